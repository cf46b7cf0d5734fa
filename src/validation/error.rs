use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// A cell whose value carries leading or trailing whitespace.
///
/// `row` is the line in the file (the header is line 1) and `column` is
/// 1-based, so both can be used directly in a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntrimmedCell {
    pub row: usize,
    pub column: usize,
    pub value: String,
}

/// An Agree/Disagree cell listing the same identity more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteCell {
    pub row: usize,
    pub column: String,
    pub value: String,
    pub identity: String,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Problem reading JSON configuration file ({path}): {reason}")]
    #[diagnostic(
        code(kbcheck::config),
        help(
            "The configuration lists data_required_column_names, data_optional_column_names and the valid values for specific columns"
        )
    )]
    Config { path: String, reason: String },

    #[error("Problem reading roster JSON file ({path}): {reason}")]
    #[diagnostic(
        code(kbcheck::roster),
        help("Each creator needs an affiliation, name, orcid and email, and may only be listed once")
    )]
    Roster { path: String, reason: String },

    #[error("{path} - could not be read as a comma separated table: {reason}")]
    #[diagnostic(code(kbcheck::table))]
    TableRead { path: String, reason: String },

    #[error(
        "{path} - entries contain preceding or trailing whitespace, please remove [row, col, value]:\n{}",
        format_untrimmed(.cells)
    )]
    #[diagnostic(code(kbcheck::whitespace))]
    Format {
        path: String,
        cells: Vec<UntrimmedCell>,
    },

    #[error(
        "{path} - expected column names do not match those found in the csv file{}",
        format_column_mismatch(.missing, .unexpected)
    )]
    #[diagnostic(code(kbcheck::columns))]
    SchemaMismatch {
        path: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error(
        "{path} - found missing value in column(s) that are required to contain data: {}",
        quote_list(.columns)
    )]
    #[diagnostic(code(kbcheck::missing_data))]
    MissingData { path: String, columns: Vec<String> },

    #[error("{path} - found repeated row(s), starting with:\n{}", .sample.join("\n"))]
    #[diagnostic(
        code(kbcheck::duplicate_row),
        help("Rows are compared on every column except Agree and Disagree")
    )]
    DuplicateRow {
        path: String,
        rows: Vec<usize>,
        sample: Vec<String>,
    },

    #[error(
        "{path} - found entries with duplicate values (one person, one vote):\n{}",
        format_votes(.cells)
    )]
    #[diagnostic(code(kbcheck::duplicate_vote))]
    DuplicateVote { path: String, cells: Vec<VoteCell> },

    #[error(
        "{path} - found contradictory recommendation in the following rows (same ORCID appears in agree and disagree columns of same row, zero based numbering): {rows:?}"
    )]
    #[diagnostic(code(kbcheck::self_contradiction))]
    SelfContradiction { path: String, rows: Vec<usize> },

    #[error(
        "{path} - found ORCID(s) {} in the {column} column which are not in the creators list, (zero based numbering) rows: {rows:?}",
        quote_list(.identities)
    )]
    #[diagnostic(
        code(kbcheck::unauthorized_identity),
        help("Add the contributor to the creators section of the roster before recording their vote")
    )]
    UnauthorizedIdentity {
        path: String,
        column: String,
        identities: Vec<String>,
        rows: Vec<usize>,
    },

    #[error(
        "{path} - found unexpected value(s) {} in column titled {column}, rows (zero based numbering, see configuration file for valid values): {rows:?}",
        quote_list(.values)
    )]
    #[diagnostic(code(kbcheck::invalid_value))]
    InvalidEnumValue {
        path: String,
        column: String,
        values: Vec<String>,
        rows: Vec<usize>,
    },

    #[error("Missing expected supporting file {}", .path.display())]
    #[diagnostic(code(kbcheck::missing_evidence))]
    MissingEvidence { path: PathBuf },

    #[error(
        "Supporting file {} configurations table contains duplicate entry",
        .path.display()
    )]
    #[diagnostic(code(kbcheck::duplicate_evidence_row))]
    DuplicateEvidenceRow { path: PathBuf },

    #[error(
        "Supporting file {} format does not match expected format",
        .path.display()
    )]
    #[diagnostic(
        code(kbcheck::evidence_format),
        help(
            "The file needs a '# Configurations' table matching the roadmap rows this ORCID voted on, followed by '# Reasoning'"
        )
    )]
    EvidenceFormat { path: PathBuf },
}

impl ValidationError {
    /// Stable name of the violation category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "ConfigError",
            Self::Roster { .. } => "RosterError",
            Self::TableRead { .. } => "TableReadError",
            Self::Format { .. } => "FormatError",
            Self::SchemaMismatch { .. } => "SchemaMismatchError",
            Self::MissingData { .. } => "MissingDataError",
            Self::DuplicateRow { .. } => "DuplicateRowError",
            Self::DuplicateVote { .. } => "DuplicateVoteError",
            Self::SelfContradiction { .. } => "SelfContradictionError",
            Self::UnauthorizedIdentity { .. } => "UnauthorizedIdentityError",
            Self::InvalidEnumValue { .. } => "InvalidEnumValueError",
            Self::MissingEvidence { .. } => "MissingEvidenceError",
            Self::DuplicateEvidenceRow { .. } => "DuplicateEvidenceRowError",
            Self::EvidenceFormat { .. } => "EvidenceFormatError",
        }
    }
}

fn format_untrimmed(cells: &[UntrimmedCell]) -> String {
    cells
        .iter()
        .map(|cell| format!("{},{}: {}", cell.row, cell.column, cell.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_votes(cells: &[VoteCell]) -> String {
    cells
        .iter()
        .map(|cell| {
            format!(
                "row {} (zero based numbering), column {}: '{}' lists '{}' more than once",
                cell.row, cell.column, cell.value, cell.identity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_column_mismatch(missing: &[String], unexpected: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing: {}", quote_list(missing)));
    }
    if !unexpected.is_empty() {
        parts.push(format!("unexpected: {}", quote_list(unexpected)));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join("; "))
    }
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
