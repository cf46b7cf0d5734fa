//! Roadmap table loading

use std::path::Path;
use tracing::debug;

use crate::error_utils::format_error_path;
use crate::models::Table;
use crate::validation::{UntrimmedCell, ValidationError};

pub struct TableLoader;

impl TableLoader {
    pub fn load(path: &Path) -> Result<Table, ValidationError> {
        let source = format_error_path(path);
        let content = std::fs::read_to_string(path).map_err(|e| ValidationError::TableRead {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&source, &content)
    }

    /// Read the table with every cell kept as a literal string.
    ///
    /// Nothing is trimmed or converted, so "NA" stays "NA" and an empty cell
    /// stays empty. Any cell with surrounding whitespace rejects the table.
    pub fn parse(source: &str, content: &str) -> Result<Table, ValidationError> {
        let read_error = |e: csv::Error| ValidationError::TableRead {
            path: source.to_string(),
            reason: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::None)
            .from_reader(content.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(read_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_error)?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let cells = untrimmed_cells(&rows);
        if !cells.is_empty() {
            return Err(ValidationError::Format {
                path: source.to_string(),
                cells,
            });
        }

        debug!("Read {} row(s) from {source}", rows.len());
        Ok(Table::new(source, columns, rows))
    }
}

fn untrimmed_cells(rows: &[Vec<String>]) -> Vec<UntrimmedCell> {
    rows.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, value)| value.trim() != value.as_str())
                .map(move |(column, value)| UntrimmedCell {
                    // Header occupies the first line of the file
                    row: row + 2,
                    column: column + 1,
                    value: value.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_literal_strings() {
        let content = "Target Name / Protein Biomarker,Conjugate,RRID,Agree\nCD3,AF488,NA,\n";
        let table = TableLoader::parse("roadmap.csv", content).unwrap();

        assert_eq!(table.columns().len(), 4);
        assert_eq!(table.len(), 1);
        assert_eq!(table.value(0, "RRID"), Some("NA"));
        assert_eq!(table.value(0, "Agree"), Some(""));
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let content = "Target Name / Protein Biomarker,Vendor\nCD3,\"Thermo Fisher, Inc.\"\n";
        let table = TableLoader::parse("roadmap.csv", content).unwrap();
        assert_eq!(table.value(0, "Vendor"), Some("Thermo Fisher, Inc."));
    }

    #[test]
    fn test_untrimmed_cells_are_all_reported() {
        let content = "A,B,C\nx, CD106,z\nx,y,z \n";
        let err = TableLoader::parse("roadmap.csv", content).unwrap_err();

        let ValidationError::Format { cells, .. } = &err else {
            panic!("Expected whitespace error, got {err:?}");
        };
        assert_eq!(
            cells,
            &vec![
                UntrimmedCell {
                    row: 2,
                    column: 2,
                    value: " CD106".to_string()
                },
                UntrimmedCell {
                    row: 3,
                    column: 3,
                    value: "z ".to_string()
                },
            ]
        );
        assert!(err.to_string().contains("2,2:  CD106"));
    }

    #[test]
    fn test_ragged_rows_are_a_read_error() {
        let err = TableLoader::parse("roadmap.csv", "A,B\n1,2,3\n").unwrap_err();
        assert!(matches!(err, ValidationError::TableRead { .. }));
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let table = TableLoader::parse("roadmap.csv", "A,B\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["A".to_string(), "B".to_string()]);
    }
}
