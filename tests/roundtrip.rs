mod common;

use common::{ALICE, BOB, KnowledgeBase, default_rows, row};
use kbcheck::validation::{KnowledgeBasePaths, ValidationError, validate_knowledge_base};
use std::fs;

fn paths(kb: &KnowledgeBase) -> KnowledgeBasePaths {
    KnowledgeBasePaths {
        config: kb.config(),
        roadmap: kb.roadmap(),
        evidence_root: kb.evidence_root(),
        roster: kb.roster(),
    }
}

#[test]
fn generated_supporting_material_validates() {
    let kb = KnowledgeBase::new();

    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert!(report.is_valid(), "{:?}", report.violations());
    assert_eq!(report.referenced().len(), 4);
    assert!(report.orphans().is_empty());
}

#[test]
fn single_edited_cell_fails_validation() {
    let kb = KnowledgeBase::new();
    let path = kb.evidence_file("CD20_eF570", BOB);
    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("Lymph Node", "Tonsil")).unwrap();

    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.violations(),
        &[ValidationError::EvidenceFormat { path }]
    );
}

#[test]
fn roadmap_edit_without_evidence_update_fails() {
    let kb = KnowledgeBase::new();
    let mut rows = default_rows();
    rows.push(row("CD3", "AF488", "Thymus", BOB, ""));
    kb.write_roadmap(&rows);

    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert_eq!(
        report.violations(),
        &[ValidationError::EvidenceFormat {
            path: kb.evidence_file("CD3_AF488", BOB)
        }]
    );
}

#[test]
fn new_voter_without_file_is_missing_evidence() {
    let kb = KnowledgeBase::new();
    let mut rows = default_rows();
    rows[0] = row("CD3", "AF488", "Lymph Node", ALICE, BOB);
    kb.write_roadmap(&rows);
    // Bob's CD3 file now lacks the Lymph Node row
    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.violations()[0].kind(), "EvidenceFormatError");

    fs::remove_file(kb.evidence_file("CD3_AF488", BOB)).unwrap();
    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert_eq!(
        report.violations(),
        &[ValidationError::MissingEvidence {
            path: kb.evidence_file("CD3_AF488", BOB)
        }]
    );
}

#[test]
fn extra_markdown_file_is_an_orphan() {
    let kb = KnowledgeBase::new();
    kb.write_file("supporting_material/CD3_AF488/0000-0003-3333-3333.md", "old\n");
    kb.write_file("supporting_material/CD3_AF488/figure.png", "");

    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert!(report.is_valid(), "{:?}", report.violations());
    assert_eq!(
        report.orphans(),
        &[kb.evidence_file("CD3_AF488", "0000-0003-3333-3333")]
    );
}

#[test]
fn unreadable_roadmap_is_reported_as_violation() {
    let kb = KnowledgeBase::empty();
    kb.write_file("reagent_resources.csv", "a,b\n1,2,3\n");

    let report = validate_knowledge_base(&paths(&kb)).unwrap();
    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.violations()[0].kind(), "TableReadError");
}

#[test]
fn missing_roster_aborts() {
    let kb = KnowledgeBase::new();
    fs::remove_file(kb.roster()).unwrap();

    let err = validate_knowledge_base(&paths(&kb)).unwrap_err();
    assert_eq!(err.kind(), "RosterError");
}
