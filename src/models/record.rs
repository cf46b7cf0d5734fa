use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::identity::IdentitySet;

/// Column holding the topic half of the group key
pub const TARGET_COLUMN: &str = "Target Name / Protein Biomarker";

/// Column holding the variant half of the group key
pub const CONJUGATE_COLUMN: &str = "Conjugate";

/// Identities endorsing a configuration
pub const APPROVALS_COLUMN: &str = "Agree";

/// Identities rejecting a configuration
pub const REJECTIONS_COLUMN: &str = "Disagree";

pub const IDENTIFIER_COLUMNS: [&str; 2] = [APPROVALS_COLUMN, REJECTIONS_COLUMN];

pub fn is_identifier_column(column: &str) -> bool {
    IDENTIFIER_COLUMNS.contains(&column)
}

/// The non-identifier cells of one row, keyed by column name.
///
/// Keying by name makes two configurations comparable regardless of the order
/// in which their columns were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Configuration(BTreeMap<String, String>);

impl Configuration {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop the Agree/Disagree columns if present
    pub fn without_identifier_columns(mut self) -> Self {
        for column in IDENTIFIER_COLUMNS {
            self.0.remove(column);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The (target, conjugate) pair that partitions the roadmap for supporting
/// material.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub target: String,
    pub conjugate: String,
}

impl GroupKey {
    pub fn new(target: impl Into<String>, conjugate: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            conjugate: conjugate.into(),
        }
    }

    /// Name of the supporting material directory for this group
    pub fn directory_name(&self) -> String {
        format!("{}_{}", self.target, self.conjugate)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory_name())
    }
}

/// One roadmap row after its identifier cells have been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    index: usize,
    configuration: Configuration,
    approvals: IdentitySet,
    rejections: IdentitySet,
}

impl Record {
    pub fn new(
        index: usize,
        configuration: Configuration,
        approvals: IdentitySet,
        rejections: IdentitySet,
    ) -> Self {
        Self {
            index,
            configuration,
            approvals,
            rejections,
        }
    }

    /// Zero-based position of the record in the table
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn approvals(&self) -> &IdentitySet {
        &self.approvals
    }

    pub fn rejections(&self) -> &IdentitySet {
        &self.rejections
    }

    pub fn target(&self) -> &str {
        self.configuration.get(TARGET_COLUMN).unwrap_or_default()
    }

    pub fn conjugate(&self) -> &str {
        self.configuration.get(CONJUGATE_COLUMN).unwrap_or_default()
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(self.target(), self.conjugate())
    }

    /// Whether the identity approved or rejected this record
    pub fn voted_on_by(&self, identity: &str) -> bool {
        self.approvals.contains(identity) || self.rejections.contains(identity)
    }

    /// Every identity that approved or rejected this record
    pub fn voters(&self) -> BTreeSet<&str> {
        self.approvals.iter().chain(self.rejections.iter()).collect()
    }

    /// Identities found in both the approvals and the rejections
    pub fn contradictions(&self) -> Vec<&str> {
        self.approvals.intersection(&self.rejections)
    }
}
