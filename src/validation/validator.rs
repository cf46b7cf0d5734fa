use std::path::PathBuf;
use tracing::{debug, warn};

use super::ValidationError;
use super::evidence::{EvidenceChecker, EvidenceStore, FsEvidenceStore};
use super::orphans::find_orphans;
use super::report::ValidationReport;
use super::rows::RowValidator;
use crate::error_utils::format_error_path;
use crate::loader::{RosterLoader, SchemaLoader, TableLoader};
use crate::models::{Roster, Schema, Table};

/// Locations of the four knowledge-base artifacts
#[derive(Debug, Clone)]
pub struct KnowledgeBasePaths {
    /// Validation configuration (required/optional columns, valid values)
    pub config: PathBuf,
    /// Roadmap table
    pub roadmap: PathBuf,
    /// Root of the supporting material tree
    pub evidence_root: PathBuf,
    /// Release metadata holding the creators roster
    pub roster: PathBuf,
}

pub struct Validator<'a> {
    schema: &'a Schema,
    roster: &'a Roster,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema, roster: &'a Roster) -> Self {
        Self { schema, roster }
    }

    /// Validate a loaded table and its supporting material.
    ///
    /// A column mismatch stops before the content checks. Content violations
    /// stop before the supporting material is cross-checked, since that
    /// comparison relies on well formed rows.
    pub fn validate(&self, table: &Table, evidence: &dyn EvidenceStore) -> ValidationReport {
        let rows = RowValidator::new(self.schema, self.roster);

        if let Err(violation) = rows.check_columns(table) {
            return ValidationReport::from_violation(violation);
        }

        let outcome = rows.validate(table);
        if !outcome.violations.is_empty() {
            debug!(
                "Skipping supporting material checks, {} roadmap violation(s) found",
                outcome.violations.len()
            );
            let mut report = ValidationReport::default();
            report.extend(outcome.violations);
            return report;
        }

        let evidence_outcome = EvidenceChecker::new(evidence).check_all(&outcome.records);

        let mut report = ValidationReport::default();
        report.extend(evidence_outcome.violations);

        match find_orphans(evidence, &evidence_outcome.expected) {
            Ok(orphans) => {
                for orphan in &orphans {
                    warn!(
                        "Supporting material file not referenced in the roadmap: {}",
                        format_error_path(orphan)
                    );
                }
                report.set_orphans(orphans);
            }
            Err(e) => warn!("Could not scan supporting material for orphan files: {e:#}"),
        }

        report.set_referenced(evidence_outcome.referenced);
        report
    }
}

/// Load all artifacts from disk and validate them.
///
/// Problems with the configuration or the roster abort the run and are
/// returned as errors; everything else ends up in the report.
pub fn validate_knowledge_base(
    paths: &KnowledgeBasePaths,
) -> Result<ValidationReport, ValidationError> {
    let schema = SchemaLoader::load(&paths.config)?;
    let roster = RosterLoader::load(&paths.roster)?;

    let table = match TableLoader::load(&paths.roadmap) {
        Ok(table) => table,
        Err(violation) => return Ok(ValidationReport::from_violation(violation)),
    };

    let store = FsEvidenceStore::new(&paths.evidence_root);
    Ok(Validator::new(&schema, &roster).validate(&table, &store))
}
