//! Row and column checks of the roadmap table against the configuration and
//! the roster

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

use super::error::{ValidationError, VoteCell};
use crate::models::{
    APPROVALS_COLUMN, Configuration, IDENTIFIER_COLUMNS, IdentitySet, REJECTIONS_COLUMN, Record,
    Roster, Schema, Table, is_identifier_column,
};

/// Number of leading columns shown when reporting repeated rows
const REPEATED_ROW_SAMPLE_COLUMNS: usize = 3;

/// Records built from the table along with every content violation found
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub records: Vec<Record>,
    pub violations: Vec<ValidationError>,
}

pub struct RowValidator<'a> {
    schema: &'a Schema,
    roster: &'a Roster,
}

impl<'a> RowValidator<'a> {
    pub fn new(schema: &'a Schema, roster: &'a Roster) -> Self {
        Self { schema, roster }
    }

    /// The table must have exactly the configured columns, in any order.
    pub fn check_columns(&self, table: &Table) -> Result<(), ValidationError> {
        let expected = self.schema.all_columns();
        let mut found = BTreeSet::new();
        let mut repeated = BTreeSet::new();
        for column in table.columns() {
            if !found.insert(column.as_str()) {
                repeated.insert(column.to_string());
            }
        }

        let missing: Vec<String> = expected
            .difference(&found)
            .map(|c| c.to_string())
            .collect();
        let mut unexpected: Vec<String> = found
            .difference(&expected)
            .map(|c| c.to_string())
            .collect();
        unexpected.extend(repeated);

        if missing.is_empty() && unexpected.is_empty() {
            debug!("✓ Column names match the configuration");
            return Ok(());
        }

        Err(ValidationError::SchemaMismatch {
            path: table.source().to_string(),
            missing,
            unexpected,
        })
    }

    /// Run every content check, collecting all violations.
    ///
    /// The table is expected to have passed [`RowValidator::check_columns`].
    pub fn validate(&self, table: &Table) -> RowOutcome {
        let mut violations = Vec::new();

        violations.extend(self.check_required_columns(table));
        violations.extend(check_unique_rows(table));

        let (records, duplicate_votes) = parse_identifiers(table);
        violations.extend(duplicate_votes);

        violations.extend(check_contradictions(table, &records));
        violations.extend(self.check_roster_membership(table, &records));
        violations.extend(self.check_enumerated_values(table));

        if violations.is_empty() {
            info!("✓ All {} roadmap row(s) validated", records.len());
        }

        RowOutcome {
            records,
            violations,
        }
    }

    fn check_required_columns(&self, table: &Table) -> Option<ValidationError> {
        let columns: Vec<String> = self
            .schema
            .required_columns
            .iter()
            .filter(|column| {
                (0..table.len()).any(|row| table.value(row, column).is_none_or(str::is_empty))
            })
            .cloned()
            .collect();

        if columns.is_empty() {
            return None;
        }

        Some(ValidationError::MissingData {
            path: table.source().to_string(),
            columns,
        })
    }

    fn check_roster_membership(&self, table: &Table, records: &[Record]) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        for column in IDENTIFIER_COLUMNS {
            let mut identities = BTreeSet::new();
            let mut rows = Vec::new();

            for record in records {
                let votes = if column == APPROVALS_COLUMN {
                    record.approvals()
                } else {
                    record.rejections()
                };
                let unknown: Vec<&str> = votes
                    .iter()
                    .filter(|identity| !self.roster.contains(identity))
                    .collect();
                if !unknown.is_empty() {
                    identities.extend(unknown.into_iter().map(str::to_string));
                    rows.push(record.index());
                }
            }

            if !rows.is_empty() {
                violations.push(ValidationError::UnauthorizedIdentity {
                    path: table.source().to_string(),
                    column: column.to_string(),
                    identities: identities.into_iter().collect(),
                    rows,
                });
            }
        }

        violations
    }

    fn check_enumerated_values(&self, table: &Table) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        for (column, allowed) in &self.schema.enumerated_values {
            let mut values = BTreeSet::new();
            let mut rows = Vec::new();

            for row in 0..table.len() {
                let value = table.value(row, column).unwrap_or_default();
                if !allowed.contains(value) {
                    values.insert(value.to_string());
                    rows.push(row);
                }
            }

            if !rows.is_empty() {
                violations.push(ValidationError::InvalidEnumValue {
                    path: table.source().to_string(),
                    column: column.clone(),
                    values: values.into_iter().collect(),
                    rows,
                });
            }
        }

        violations
    }
}

/// No two rows may share every value outside the Agree/Disagree columns.
fn check_unique_rows(table: &Table) -> Option<ValidationError> {
    let mut occurrences: BTreeMap<Configuration, Vec<usize>> = BTreeMap::new();
    for row in 0..table.len() {
        occurrences
            .entry(table.configuration(row))
            .or_default()
            .push(row);
    }

    let mut repeated: Vec<Vec<usize>> = occurrences
        .into_values()
        .filter(|rows| rows.len() > 1)
        .collect();
    if repeated.is_empty() {
        return None;
    }
    repeated.sort();

    let sample_columns: Vec<&str> = table
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|column| !is_identifier_column(column))
        .take(REPEATED_ROW_SAMPLE_COLUMNS)
        .collect();

    let sample = repeated
        .iter()
        .map(|rows| {
            let values: Vec<&str> = sample_columns
                .iter()
                .map(|column| table.value(rows[0], column).unwrap_or_default())
                .collect();
            format!("rows {rows:?}: {}", values.join(" | "))
        })
        .collect();

    Some(ValidationError::DuplicateRow {
        path: table.source().to_string(),
        rows: repeated.into_iter().flatten().collect(),
        sample,
    })
}

/// Convert the Agree/Disagree cells of every row to identity sets.
///
/// A cell naming the same ORCID twice is reported, and its identities are
/// merged so the remaining checks can still run on the record.
pub fn parse_identifiers(table: &Table) -> (Vec<Record>, Option<ValidationError>) {
    let mut records = Vec::with_capacity(table.len());
    let mut cells = Vec::new();

    for row in 0..table.len() {
        let mut parse = |column: &str| {
            let raw = table.value(row, column).unwrap_or_default();
            IdentitySet::parse(raw).unwrap_or_else(|repeated| {
                cells.push(VoteCell {
                    row,
                    column: column.to_string(),
                    value: raw.to_string(),
                    identity: repeated.identity,
                });
                IdentitySet::parse_collapsing(raw)
            })
        };
        let approvals = parse(APPROVALS_COLUMN);
        let rejections = parse(REJECTIONS_COLUMN);

        records.push(Record::new(
            row,
            table.configuration(row),
            approvals,
            rejections,
        ));
    }

    let violation = (!cells.is_empty()).then(|| ValidationError::DuplicateVote {
        path: table.source().to_string(),
        cells,
    });

    (records, violation)
}

/// Nobody may both approve and reject the same configuration.
fn check_contradictions(table: &Table, records: &[Record]) -> Option<ValidationError> {
    let rows: Vec<usize> = records
        .iter()
        .filter(|record| !record.contradictions().is_empty())
        .map(Record::index)
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(ValidationError::SelfContradiction {
        path: table.source().to_string(),
        rows,
    })
}
