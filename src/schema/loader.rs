//! Schema loading and composition
//!
//! A schema reference is either an already-parsed document or a path to
//! a YAML/JSON file. Loading is explicit and uncached; every validation
//! call re-reads a path-backed schema (acceptable for one validation per
//! process; a long-lived host should cache the loaded value itself).

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

/// A schema reference: inline document or file path.
#[derive(Debug, Clone)]
pub enum SchemaRef {
    Inline(JsonValue),
    Path(PathBuf),
}

impl SchemaRef {
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }
}

/// Resolve a schema reference into a schema document.
///
/// The result must be treated as immutable by the caller.
pub fn load_schema(schema_ref: &SchemaRef) -> Result<JsonValue, SchemaError> {
    let schema = match schema_ref {
        SchemaRef::Inline(value) => value.clone(),
        SchemaRef::Path(path) => read_schema_file(path)?,
    };

    if !schema.is_object() {
        return Err(SchemaError::NotAMapping);
    }
    Ok(schema)
}

fn read_schema_file(path: &Path) -> Result<JsonValue, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // YAML is a superset of JSON here, so one parser covers both formats
    let yaml: serde_yml::Value =
        serde_yml::from_str(&content).map_err(|source| SchemaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::to_value(yaml).map_err(|_| SchemaError::NotAMapping)
}

/// Derive the config-only schema: the input schema minus its `samples`
/// property and any `samples` entry in `required`, so a full-project
/// schema also describes config-only documents.
pub fn config_schema(mut schema: JsonValue) -> JsonValue {
    if let Some(properties) = schema.get_mut("properties").and_then(|p| p.as_object_mut()) {
        properties.remove("samples");
    }
    if let Some(required) = schema.get_mut("required").and_then(|r| r.as_array_mut()) {
        required.retain(|v| v.as_str() != Some("samples"));
    }
    schema
}

/// Extract the per-sample schema (`properties.samples.items`) from a
/// project schema.
pub fn sample_schema(schema: &JsonValue) -> Result<JsonValue, SchemaError> {
    schema
        .get("properties")
        .and_then(|p| p.get("samples"))
        .and_then(|s| s.get("items"))
        .cloned()
        .ok_or(SchemaError::NoSampleSection)
}

/// Errors from schema loading and composition.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("schema must be a mapping or a path to an existing file")]
    NotAMapping,

    #[error("schema has no 'properties.samples.items' section for sample validation")]
    NoSampleSection,

    #[error("schema does not compile: {0}")]
    Compile(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_inline_schema() {
        let schema_ref = SchemaRef::Inline(json!({"type": "object"}));
        let schema = load_schema(&schema_ref).unwrap();
        assert_eq!(schema, json!({"type": "object"}));
    }

    #[test]
    fn test_load_inline_non_mapping_rejected() {
        let schema_ref = SchemaRef::Inline(json!(["not", "a", "mapping"]));
        let err = load_schema(&schema_ref).unwrap_err();
        assert!(matches!(err, SchemaError::NotAMapping));
    }

    #[test]
    fn test_load_yaml_schema_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.yaml");
        fs::write(&path, "type: object\nrequired:\n  - name\n").unwrap();

        let schema = load_schema(&SchemaRef::path(&path)).unwrap();
        assert_eq!(schema, json!({"type": "object", "required": ["name"]}));
    }

    #[test]
    fn test_load_json_schema_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.json");
        fs::write(&path, r#"{"type": "object"}"#).unwrap();

        let schema = load_schema(&SchemaRef::path(&path)).unwrap();
        assert_eq!(schema, json!({"type": "object"}));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_schema(&SchemaRef::path("/nonexistent/schema.yaml")).unwrap_err();
        assert!(matches!(err, SchemaError::Read { .. }));
    }

    #[test]
    fn test_load_unparseable_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schema.yaml");
        fs::write(&path, "{:broken").unwrap();

        let err = load_schema(&SchemaRef::path(&path)).unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn test_config_schema_strips_samples() {
        let schema = json!({
            "type": "object",
            "properties": {
                "output_dir": {"type": "string"},
                "samples": {"type": "array"},
            },
            "required": ["output_dir", "samples"],
        });

        let config = config_schema(schema);
        assert_eq!(
            config,
            json!({
                "type": "object",
                "properties": {"output_dir": {"type": "string"}},
                "required": ["output_dir"],
            })
        );
    }

    #[test]
    fn test_config_schema_without_samples_is_unchanged() {
        let schema = json!({"type": "object", "required": ["output_dir"]});
        assert_eq!(config_schema(schema.clone()), schema);
    }

    #[test]
    fn test_sample_schema_extraction() {
        let schema = json!({
            "properties": {
                "samples": {
                    "type": "array",
                    "items": {"type": "object", "required": ["name"]},
                }
            }
        });

        let sample = sample_schema(&schema).unwrap();
        assert_eq!(sample, json!({"type": "object", "required": ["name"]}));
    }

    #[test]
    fn test_sample_schema_missing_section() {
        let err = sample_schema(&json!({"type": "object"})).unwrap_err();
        assert!(matches!(err, SchemaError::NoSampleSection));
    }
}
