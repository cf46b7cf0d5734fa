//! Validation configuration loading

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error_utils::format_error_path;
use crate::models::{
    APPROVALS_COLUMN, CONJUGATE_COLUMN, REJECTIONS_COLUMN, Schema, TARGET_COLUMN,
};
use crate::validation::ValidationError;
use crate::validation::schemas::{get_validation_config_schema, schema_violations};

/// Columns the validator itself relies on, whatever the configuration says
const STRUCTURAL_COLUMNS: [&str; 4] = [
    TARGET_COLUMN,
    CONJUGATE_COLUMN,
    APPROVALS_COLUMN,
    REJECTIONS_COLUMN,
];

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    data_required_column_names: Vec<String>,
    data_optional_column_names: Vec<String>,
    // Every other key names a column and lists its valid values
    #[serde(flatten)]
    enumerated_values: BTreeMap<String, Vec<String>>,
}

pub struct SchemaLoader;

impl SchemaLoader {
    pub fn load(path: &Path) -> Result<Schema, ValidationError> {
        let source = format_error_path(path);
        let content = std::fs::read_to_string(path).map_err(|e| ValidationError::Config {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&source, &content)
    }

    pub fn parse(source: &str, content: &str) -> Result<Schema, ValidationError> {
        let config_error = |reason: String| ValidationError::Config {
            path: source.to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| config_error(e.to_string()))?;
        let problems =
            schema_violations(get_validation_config_schema(), &value).map_err(config_error)?;
        if !problems.is_empty() {
            return Err(config_error(problems.join("; ")));
        }

        let document: SchemaDocument =
            serde_json::from_value(value).map_err(|e| config_error(e.to_string()))?;

        let schema = Schema {
            required_columns: document.data_required_column_names.into_iter().collect(),
            optional_columns: document.data_optional_column_names.into_iter().collect(),
            enumerated_values: document
                .enumerated_values
                .into_iter()
                .map(|(column, values)| (column, values.into_iter().collect()))
                .collect(),
        };

        let overlapping = schema.overlapping_columns();
        if !overlapping.is_empty() {
            return Err(config_error(format!(
                "{overlapping:?} appear in both required and optional data columns"
            )));
        }

        let undeclared: Vec<&str> = schema
            .enumerated_values
            .keys()
            .map(String::as_str)
            .chain(STRUCTURAL_COLUMNS)
            .filter(|column| !schema.declares(column))
            .collect();
        if !undeclared.is_empty() {
            return Err(config_error(format!(
                "{undeclared:?} must be listed in the required or optional data columns"
            )));
        }

        debug!(
            "Loaded validation config: {} required, {} optional, {} enumerated column(s)",
            schema.required_columns.len(),
            schema.optional_columns.len(),
            schema.enumerated_values.len()
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"{
        "data_required_column_names": ["Target Name / Protein Biomarker", "Conjugate", "Result"],
        "data_optional_column_names": ["Agree", "Disagree"],
        "Result": ["Success", "Failure"]
    }"#;

    #[test]
    fn test_parse_config_with_enumerated_values() {
        let schema = SchemaLoader::parse("config.json", BASE).unwrap();

        assert_eq!(schema.required_columns.len(), 3);
        assert_eq!(schema.optional_columns.len(), 2);
        let result_values = &schema.enumerated_values["Result"];
        assert!(result_values.contains("Success"));
        assert!(result_values.contains("Failure"));
    }

    #[test]
    fn test_overlapping_columns_are_rejected() {
        let content = r#"{
            "data_required_column_names": ["Target Name / Protein Biomarker", "Conjugate", "Agree"],
            "data_optional_column_names": ["Agree", "Disagree"]
        }"#;

        let err = SchemaLoader::parse("config.json", content).unwrap_err();
        assert!(matches!(err, ValidationError::Config { .. }));
        assert!(err.to_string().contains("appear in both required and optional"));
    }

    #[test]
    fn test_missing_column_lists_are_rejected() {
        let err = SchemaLoader::parse("config.json", r#"{"Result": ["Success"]}"#).unwrap_err();
        assert!(err.to_string().contains("data_required_column_names"));
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let err = SchemaLoader::parse("config.json", "{ not json").unwrap_err();
        assert!(matches!(err, ValidationError::Config { .. }));
    }

    #[test]
    fn test_enumerated_column_must_be_declared() {
        let content = r#"{
            "data_required_column_names": ["Target Name / Protein Biomarker", "Conjugate"],
            "data_optional_column_names": ["Agree", "Disagree"],
            "Result": ["Success"]
        }"#;

        let err = SchemaLoader::parse("config.json", content).unwrap_err();
        assert!(err.to_string().contains("Result"));
    }

    #[test]
    fn test_identifier_columns_must_be_declared() {
        let content = r#"{
            "data_required_column_names": ["Target Name / Protein Biomarker", "Conjugate"],
            "data_optional_column_names": []
        }"#;

        let err = SchemaLoader::parse("config.json", content).unwrap_err();
        assert!(err.to_string().contains("Agree"));
    }
}
