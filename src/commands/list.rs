use anyhow::Result;
use kbcheck::error_utils::format_error_path;
use kbcheck::loader::TableLoader;
use kbcheck::validation::evidence::{evidence_path, group_records, group_voters};
use kbcheck::validation::parse_identifiers;
use std::path::Path;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ListType {
    /// Distinct target/conjugate groups
    Groups,
    /// Supporting material file expected for each group and ORCID
    Evidence,
}

pub fn list_command(list_type: ListType, roadmap: &Path, evidence_root: &Path) -> Result<()> {
    let table = TableLoader::load(roadmap)?;

    // Votes are collapsed here so listing still works on a roadmap that
    // repeats an ORCID in a cell
    let (records, violation) = parse_identifiers(&table);
    if let Some(violation) = violation {
        tracing::warn!("{violation}");
    }

    let groups = group_records(&records);

    match list_type {
        ListType::Groups => {
            println!("Groups:");
            if groups.is_empty() {
                println!("  (none)");
            }
            for (group, members) in &groups {
                println!("  - {group} ({} row(s))", members.len());
            }
        }
        ListType::Evidence => {
            println!("Supporting material:");
            if groups.is_empty() {
                println!("  (none)");
            }
            for (group, members) in &groups {
                println!("  {group}:");
                for identity in group_voters(members) {
                    let path = evidence_path(evidence_root, group, identity);
                    println!("    - {}", format_error_path(&path));
                }
            }
        }
    }

    Ok(())
}
