use super::record::{Configuration, is_identifier_column};

/// The roadmap exactly as read from disk: a header and rows of literal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    source: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(source: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: source.into(),
            columns,
            rows,
        }
    }

    /// Display name of the file the table was read from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(index))
            .map(String::as_str)
    }

    /// The row's cells without the Agree/Disagree columns
    pub fn configuration(&self, row: usize) -> Configuration {
        let Some(cells) = self.rows.get(row) else {
            return Configuration::default();
        };
        self.columns
            .iter()
            .zip(cells.iter())
            .filter(|(column, _)| !is_identifier_column(column))
            .map(|(column, value)| (column.as_str(), value.as_str()))
            .collect()
    }
}
