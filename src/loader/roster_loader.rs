//! Reviewer roster loading from the release metadata

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error_utils::format_error_path;
use crate::models::{Reviewer, Roster};
use crate::validation::ValidationError;
use crate::validation::schemas::{get_roster_schema, schema_violations};

#[derive(Debug, Deserialize)]
struct RosterDocument {
    creators: Vec<Reviewer>,
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> Result<Roster, ValidationError> {
        let source = format_error_path(path);
        let content = std::fs::read_to_string(path).map_err(|e| ValidationError::Roster {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&source, &content)
    }

    pub fn parse(source: &str, content: &str) -> Result<Roster, ValidationError> {
        let roster_error = |reason: String| ValidationError::Roster {
            path: source.to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| roster_error(e.to_string()))?;
        let problems = schema_violations(get_roster_schema(), &value).map_err(roster_error)?;
        if !problems.is_empty() {
            return Err(roster_error(format!(
                "missing required information in the creators section: {}",
                problems.join("; ")
            )));
        }

        let document: RosterDocument =
            serde_json::from_value(value).map_err(|e| roster_error(e.to_string()))?;

        let roster = Roster::new(document.creators).map_err(|repeated| {
            roster_error(format!(
                "Duplicate entry in creators section: {}",
                repeated.join(", ")
            ))
        })?;

        debug!("Loaded roster with {} creator(s)", roster.reviewers().len());
        Ok(roster)
    }
}
