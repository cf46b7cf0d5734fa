//! Parser for the configurations table embedded in supporting material files
//!
//! A supporting material file looks like:
//!
//! ```text
//! # Configurations
//!
//! | Target Name / Protein Biomarker | Conjugate | ... |
//! |:--------------------------------|:----------|-----|
//! | CD3                             | AF488     | ... |
//!
//! # Reasoning
//! ...
//! ```
//!
//! Blank lines are ignored and every line is trimmed before it is inspected.

use thiserror::Error;

use crate::models::Configuration;

pub const CONFIGURATIONS_HEADER: &str = "# Configurations";
pub const REASONING_HEADER: &str = "# Reasoning";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvidenceParseError {
    #[error("no '{CONFIGURATIONS_HEADER}' section found")]
    MissingConfigurationsHeader,

    #[error("expected the table column row after '{CONFIGURATIONS_HEADER}' on line {line}")]
    MissingColumnRow { line: usize },

    #[error("table column row on line {line} has no column names")]
    EmptyColumnRow { line: usize },

    #[error("expected the table delimiter row on line {line}, found '{found}'")]
    MalformedDelimiterRow { line: usize, found: String },

    #[error("row on line {line} has {found} cell(s) but the table has {expected} column(s)")]
    CellCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("configurations table is not terminated by '{REASONING_HEADER}'")]
    UnterminatedSection,
}

/// The configurations table of one supporting material file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Configuration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekingHeader,
    ReadingColumnRow,
    ReadingDelimiterRow,
    ReadingDataRows,
    Done,
}

pub fn parse_configurations(content: &str) -> Result<EvidenceTable, EvidenceParseError> {
    let mut state = ParseState::SeekingHeader;
    let mut table = EvidenceTable::default();
    let mut last_line = 0;

    let lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    for (line_number, line) in lines {
        last_line = line_number;
        match state {
            ParseState::SeekingHeader => {
                if line == CONFIGURATIONS_HEADER {
                    state = ParseState::ReadingColumnRow;
                }
            }
            ParseState::ReadingColumnRow => {
                if !line.contains('|') || line == REASONING_HEADER {
                    return Err(EvidenceParseError::MissingColumnRow { line: line_number });
                }
                table.columns = line
                    .split('|')
                    .map(str::trim)
                    .filter(|column| !column.is_empty())
                    .map(str::to_string)
                    .collect();
                if table.columns.is_empty() {
                    return Err(EvidenceParseError::EmptyColumnRow { line: line_number });
                }
                state = ParseState::ReadingDelimiterRow;
            }
            ParseState::ReadingDelimiterRow => {
                if !is_delimiter_row(line) {
                    return Err(EvidenceParseError::MalformedDelimiterRow {
                        line: line_number,
                        found: line.to_string(),
                    });
                }
                state = ParseState::ReadingDataRows;
            }
            ParseState::ReadingDataRows => {
                if line == REASONING_HEADER {
                    state = ParseState::Done;
                    break;
                }
                let cells = split_row(line);
                if cells.len() != table.columns.len() {
                    return Err(EvidenceParseError::CellCountMismatch {
                        line: line_number,
                        expected: table.columns.len(),
                        found: cells.len(),
                    });
                }
                table.rows.push(
                    table
                        .columns
                        .iter()
                        .map(String::as_str)
                        .zip(cells)
                        .collect(),
                );
            }
            ParseState::Done => break,
        }
    }

    match state {
        ParseState::Done => Ok(table),
        ParseState::SeekingHeader => Err(EvidenceParseError::MissingConfigurationsHeader),
        ParseState::ReadingColumnRow => Err(EvidenceParseError::MissingColumnRow {
            line: last_line + 1,
        }),
        ParseState::ReadingDelimiterRow => Err(EvidenceParseError::MalformedDelimiterRow {
            line: last_line + 1,
            found: String::new(),
        }),
        ParseState::ReadingDataRows => Err(EvidenceParseError::UnterminatedSection),
    }
}

/// Split a table row on `|`, dropping the pieces outside the border pipes
fn split_row(line: &str) -> Vec<&str> {
    let pieces: Vec<&str> = line.split('|').map(str::trim).collect();
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1].to_vec()
}

fn is_delimiter_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}
