use once_cell::sync::Lazy;
use serde_json::Value;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

// Embed schemas at compile time
const VALIDATION_CONFIG_SCHEMA: &str =
    include_str!("../../schemas/v1/validation-config-schema.json");
const ROSTER_SCHEMA: &str = include_str!("../../schemas/v1/roster-schema.json");

static VALIDATION_CONFIG_SCHEMA_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(VALIDATION_CONFIG_SCHEMA)
        .expect("Failed to parse embedded validation config schema - this is a bug")
});

static ROSTER_SCHEMA_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(ROSTER_SCHEMA)
        .expect("Failed to parse embedded roster schema - this is a bug")
});

pub fn get_validation_config_schema() -> &'static Value {
    &VALIDATION_CONFIG_SCHEMA_VALUE
}

pub fn get_roster_schema() -> &'static Value {
    &ROSTER_SCHEMA_VALUE
}

/// Check a document against a schema, returning one message per violation.
///
/// Messages are prefixed with the JSON pointer of the offending value so a
/// contributor can find it in the file.
pub fn schema_violations(schema: &Value, document: &Value) -> Result<Vec<String>, String> {
    let validator = schema_draft::options()
        .build(schema)
        .map_err(|e| format!("failed to compile schema: {e}"))?;

    Ok(validator
        .iter_errors(document)
        .map(|error| {
            let instance_path = error.instance_path.to_string();
            if instance_path.is_empty() {
                error.to_string()
            } else {
                format!("{instance_path}: {error}")
            }
        })
        .collect())
}
