//! Supporting material files that no roadmap row refers to

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

use super::evidence::EvidenceStore;

/// Files present in the store that are not in `visited`, sorted
pub fn find_orphans(
    store: &dyn EvidenceStore,
    visited: &BTreeSet<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let present = store.evidence_files()?;
    Ok(present.difference(visited).cloned().collect())
}
