//! Cross-checking the roadmap against its supporting material files
//!
//! Each (target, conjugate) group has one directory below the supporting
//! material root, holding one file per ORCID that voted on any configuration
//! in the group: `{root}/{target}_{conjugate}/{orcid}.md`. The configurations
//! table in that file must list exactly the group's rows the ORCID voted on.

mod parser;
mod store;

pub use parser::{
    CONFIGURATIONS_HEADER, EvidenceParseError, EvidenceTable, REASONING_HEADER,
    parse_configurations,
};
pub use store::{EvidenceStore, FsEvidenceStore, MemoryEvidenceStore};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::ValidationError;
use crate::loader::EVIDENCE_EXTENSION;
use crate::models::{Configuration, GroupKey, Record};

/// Location of the supporting material file for an ORCID within a group
pub fn evidence_path(root: &Path, group: &GroupKey, identity: &str) -> PathBuf {
    root.join(group.directory_name())
        .join(format!("{identity}.{EVIDENCE_EXTENSION}"))
}

/// Records partitioned by group key, groups in order of first appearance
pub fn group_records(records: &[Record]) -> Vec<(GroupKey, Vec<&Record>)> {
    let mut positions: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<&Record>)> = Vec::new();

    for record in records {
        let key = record.group_key();
        match positions.get(&key) {
            Some(&position) => groups[position].1.push(record),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

/// Every ORCID that approved or rejected any record in the group
pub fn group_voters<'a>(records: &[&'a Record]) -> BTreeSet<&'a str> {
    records.iter().flat_map(|record| record.voters()).collect()
}

/// Outcome of checking all supporting material referenced by the roadmap
#[derive(Debug, Default)]
pub struct EvidenceOutcome {
    pub violations: Vec<ValidationError>,
    /// Files that matched the roadmap
    pub referenced: BTreeSet<PathBuf>,
    /// Every file the roadmap calls for, whether or not it passed
    pub expected: BTreeSet<PathBuf>,
}

pub struct EvidenceChecker<'a> {
    store: &'a dyn EvidenceStore,
}

impl<'a> EvidenceChecker<'a> {
    pub fn new(store: &'a dyn EvidenceStore) -> Self {
        Self { store }
    }

    /// Check every group; a failing file never stops the remaining checks
    pub fn check_all(&self, records: &[Record]) -> EvidenceOutcome {
        let mut outcome = EvidenceOutcome::default();

        for (group, group_records) in group_records(records) {
            debug!("Checking supporting material for {group}");
            for identity in group_voters(&group_records) {
                outcome
                    .expected
                    .insert(evidence_path(self.store.root(), &group, identity));
                match self.check_document(&group, identity, &group_records) {
                    Ok(path) => {
                        outcome.referenced.insert(path);
                    }
                    Err(violation) => outcome.violations.push(violation),
                }
            }
        }

        if outcome.violations.is_empty() {
            info!(
                "✓ All {} supporting material file(s) match the roadmap",
                outcome.referenced.len()
            );
        }
        outcome
    }

    /// Check the file of one ORCID in one group, returning its path when valid
    pub fn check_document(
        &self,
        group: &GroupKey,
        identity: &str,
        group_records: &[&Record],
    ) -> Result<PathBuf, ValidationError> {
        let path = evidence_path(self.store.root(), group, identity);

        let content = match self.store.read(&path) {
            Ok(Some(content)) => content,
            Ok(None) => return Err(ValidationError::MissingEvidence { path }),
            Err(e) => {
                debug!("{e:#}");
                return Err(ValidationError::EvidenceFormat { path });
            }
        };

        let table = match parse_configurations(&content) {
            Ok(table) => table,
            Err(e) => {
                debug!("{}: {e}", path.display());
                return Err(ValidationError::EvidenceFormat { path });
            }
        };

        let documented: Vec<Configuration> = table
            .rows
            .into_iter()
            .map(Configuration::without_identifier_columns)
            .collect();
        let documented_counts = count(documented.iter());
        if documented_counts.len() != documented.len() {
            return Err(ValidationError::DuplicateEvidenceRow { path });
        }

        let expected: Vec<&Configuration> = group_records
            .iter()
            .filter(|record| record.voted_on_by(identity))
            .map(|record| record.configuration())
            .collect();

        if documented.len() != expected.len() || documented_counts != count(expected.into_iter())
        {
            debug!(
                "{}: configurations table does not match content of roadmap file",
                path.display()
            );
            return Err(ValidationError::EvidenceFormat { path });
        }

        Ok(path)
    }
}

fn count<'c>(
    configurations: impl Iterator<Item = &'c Configuration>,
) -> BTreeMap<&'c Configuration, usize> {
    let mut counts = BTreeMap::new();
    for configuration in configurations {
        *counts.entry(configuration).or_insert(0) += 1;
    }
    counts
}
