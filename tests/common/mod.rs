#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ALICE: &str = "0000-0001-1111-1111";
pub const BOB: &str = "0000-0002-2222-2222";

pub const COLUMNS: [&str; 19] = [
    "UniProt Accession Number",
    "Target Name / Protein Biomarker",
    "Antibody Name",
    "Host Organism and Isotype",
    "Clonality",
    "Vendor",
    "Catalog Number",
    "Conjugate",
    "RRID",
    "Application",
    "Method",
    "Tissue Preservation",
    "Tissue",
    "Detergent",
    "Antigen Retrieval Conditions",
    "Dye Inactivation Conditions",
    "Result",
    "Agree",
    "Disagree",
];

const CONFIG: &str = r#"{
  "data_required_column_names": [
    "UniProt Accession Number",
    "Target Name / Protein Biomarker",
    "Antibody Name",
    "Host Organism and Isotype",
    "Clonality",
    "Vendor",
    "Catalog Number",
    "Conjugate",
    "Application",
    "Method",
    "Tissue Preservation",
    "Tissue",
    "Antigen Retrieval Conditions",
    "Result"
  ],
  "data_optional_column_names": [
    "RRID",
    "Detergent",
    "Dye Inactivation Conditions",
    "Agree",
    "Disagree"
  ],
  "Result": ["Success", "Failure"],
  "Clonality": ["Monoclonal", "Polyclonal"]
}"#;

const ROSTER: &str = r#"{
  "title": "IBEX Knowledge-Base",
  "creators": [
    {
      "affiliation": "NIH",
      "name": "Doe, Jane",
      "orcid": "0000-0001-1111-1111",
      "email": "jane@example.org"
    },
    {
      "affiliation": "NIH",
      "name": "Roe, Rick",
      "orcid": "0000-0002-2222-2222",
      "email": "rick@example.org"
    }
  ]
}"#;

/// A roadmap row; every column not set explicitly gets a plausible value
pub fn row(target: &str, conjugate: &str, tissue: &str, agree: &str, disagree: &str) -> Vec<String> {
    let overrides = BTreeMap::from([
        ("Target Name / Protein Biomarker", target),
        ("Conjugate", conjugate),
        ("Tissue", tissue),
        ("Agree", agree),
        ("Disagree", disagree),
    ]);
    COLUMNS
        .iter()
        .map(|column| {
            let value = overrides.get(column).copied().unwrap_or(match *column {
                "UniProt Accession Number" => "P07766",
                "Antibody Name" => "UCHT1",
                "Host Organism and Isotype" => "Mouse IgG1",
                "Clonality" => "Monoclonal",
                "Vendor" => "BioLegend",
                "Catalog Number" => "300454",
                "RRID" => "AB_2564149",
                "Application" => "IBEX",
                "Method" => "Indirect",
                "Tissue Preservation" => "Fixed Frozen",
                "Result" => "Success",
                _ => "NA",
            });
            value.to_string()
        })
        .collect()
}

pub fn default_rows() -> Vec<Vec<String>> {
    vec![
        row("CD3", "AF488", "Lymph Node", ALICE, ""),
        row("CD3", "AF488", "Spleen", ALICE, BOB),
        row("CD20", "eF570", "Lymph Node", &format!("{ALICE};{BOB}"), ""),
    ]
}

/// A complete knowledge base laid out in a temporary directory
pub struct KnowledgeBase {
    dir: TempDir,
}

impl KnowledgeBase {
    /// Configuration, roster, the default roadmap and matching supporting material
    pub fn new() -> Self {
        let kb = Self::empty();
        let rows = default_rows();
        kb.write_roadmap(&rows);
        kb.write_evidence(&rows);
        kb
    }

    /// Configuration and roster only
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), CONFIG).unwrap();
        fs::write(dir.path().join(".zenodo.json"), ROSTER).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    pub fn roster(&self) -> PathBuf {
        self.dir.path().join(".zenodo.json")
    }

    pub fn roadmap(&self) -> PathBuf {
        self.dir.path().join("reagent_resources.csv")
    }

    pub fn evidence_root(&self) -> PathBuf {
        self.dir.path().join("supporting_material")
    }

    pub fn evidence_file(&self, group: &str, identity: &str) -> PathBuf {
        self.evidence_root().join(group).join(format!("{identity}.md"))
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn write_roadmap(&self, rows: &[Vec<String>]) {
        let mut writer = csv::Writer::from_path(self.roadmap()).unwrap();
        writer.write_record(COLUMNS).unwrap();
        for row in rows {
            writer.write_record(row).unwrap();
        }
        writer.flush().unwrap();
    }

    /// One markdown file per (group, ORCID) listing the rows the ORCID voted on
    pub fn write_evidence(&self, rows: &[Vec<String>]) {
        let column = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
        let configuration: Vec<usize> = (0..COLUMNS.len())
            .filter(|&i| COLUMNS[i] != "Agree" && COLUMNS[i] != "Disagree")
            .collect();

        let mut documents: BTreeMap<PathBuf, Vec<&Vec<String>>> = BTreeMap::new();
        for row in rows {
            let group = format!(
                "{}_{}",
                row[column("Target Name / Protein Biomarker")],
                row[column("Conjugate")]
            );
            let mut voters: Vec<&str> = row[column("Agree")]
                .split(';')
                .chain(row[column("Disagree")].split(';'))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            voters.sort();
            voters.dedup();
            for identity in voters {
                documents
                    .entry(self.evidence_file(&group, identity))
                    .or_default()
                    .push(row);
            }
        }

        for (path, rows) in documents {
            let header: Vec<&str> = configuration.iter().map(|&i| COLUMNS[i]).collect();
            let mut content = format!(
                "# Configurations\n\n| {} |\n|{}|\n",
                header.join(" | "),
                vec!["---"; header.len()].join("|")
            );
            for row in rows {
                let cells: Vec<&str> = configuration.iter().map(|&i| row[i].as_str()).collect();
                content.push_str(&format!("| {} |\n", cells.join(" | ")));
            }
            content.push_str("\n# Reasoning\n\nImages and discussion of the staining.\n");
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }
}
