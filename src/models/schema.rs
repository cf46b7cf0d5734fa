use std::collections::{BTreeMap, BTreeSet};

/// Declarative description of the roadmap table.
///
/// Every column in the table is either required to contain data or allowed to
/// be empty. A subset of the columns may additionally be restricted to an
/// enumerated set of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub required_columns: BTreeSet<String>,
    pub optional_columns: BTreeSet<String>,
    pub enumerated_values: BTreeMap<String, BTreeSet<String>>,
}

impl Schema {
    /// All columns the table is expected to have
    pub fn all_columns(&self) -> BTreeSet<&str> {
        self.required_columns
            .iter()
            .chain(self.optional_columns.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn declares(&self, column: &str) -> bool {
        self.required_columns.contains(column) || self.optional_columns.contains(column)
    }

    /// Columns declared both required and optional, sorted
    pub fn overlapping_columns(&self) -> Vec<&str> {
        self.required_columns
            .intersection(&self.optional_columns)
            .map(String::as_str)
            .collect()
    }
}
