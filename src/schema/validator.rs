//! Structural validation with aggregate error reporting
//!
//! Validation collects every failing constraint (no short-circuit) in
//! stable document-traversal order, applies the optional case-insensitive
//! required-field exclusion as an explicit post-filter, and reports the
//! surviving violations as one aggregate diagnostic.

use jsonschema::{validator_for, ValidationError as JsonSchemaError};
use miette::Diagnostic;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::core::materialize::{materialize, materialize_sample, MaterializeError};
use crate::core::project::Project;
use crate::core::sample::{resolve_sample, SampleError};
use crate::schema::loader::{config_schema, load_schema, sample_schema, SchemaError, SchemaRef};

/// The kind of constraint a violation breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required property is absent.
    RequiredMissing { property: String },
    /// The value has the wrong type.
    TypeMismatch,
    /// The value is not one of the allowed enum options.
    EnumMismatch,
    /// The value does not match a pattern constraint.
    PatternMismatch,
    /// A property not allowed by the schema is present.
    AdditionalProperties,
    /// Any other failed constraint.
    Other,
}

/// A single schema violation: kind, document path, and message.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{message}")]
pub struct Violation {
    pub kind: ViolationKind,
    /// JSON pointer to the offending location ("" for the document root).
    pub path: String,
    message: String,

    #[help]
    help: Option<String>,
}

impl Violation {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Aggregate validation failure carrying every unsuppressed violation.
#[derive(Debug, Error, Diagnostic)]
#[error("schema validation failed: {summary}")]
#[diagnostic(code(pepcheck::schema::validation_failed))]
pub struct ValidationFailed {
    summary: String,

    #[related]
    violations: Vec<Violation>,
}

impl ValidationFailed {
    pub fn new(violations: Vec<Violation>) -> Self {
        let count = violations.len();
        let summary = if count == 1 {
            "1 error".to_string()
        } else {
            format!("{} errors", count)
        };
        Self {
            summary,
            violations,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Any error a validation call can surface.
#[derive(Debug, Error, Diagnostic)]
pub enum ValidateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Failed(#[from] ValidationFailed),
}

/// Validate a document against a schema document.
///
/// Every constraint is evaluated; violations are collected, optionally
/// filtered by the exclude-case policy, and returned together.
pub fn validate_document(
    document: &JsonValue,
    schema: &JsonValue,
    exclude_case: bool,
) -> Result<(), ValidateError> {
    let compiled = validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;

    let mut violations: Vec<Violation> = compiled
        .iter_errors(document)
        .map(|e| error_to_violation(&e))
        .collect();

    if exclude_case {
        violations = exclude_case_filter(document, violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailed::new(violations).into())
    }
}

/// Validate the full project document (config plus samples).
pub fn validate_project(
    project: &Project,
    schema_ref: &SchemaRef,
    exclude_case: bool,
) -> Result<(), ValidateError> {
    let schema = load_schema(schema_ref)?;
    let document = materialize(project, true)?;
    validate_document(&document, &schema, exclude_case)
}

/// Validate the configuration portion only. The schema's `samples`
/// requirement, if any, is stripped first.
pub fn validate_config(
    project: &Project,
    schema_ref: &SchemaRef,
    exclude_case: bool,
) -> Result<(), ValidateError> {
    let schema = config_schema(load_schema(schema_ref)?);
    let document = materialize(project, false)?;
    validate_document(&document, &schema, exclude_case)
}

/// Validate a single sample, addressed by zero-based index or by name,
/// against the schema's `properties.samples.items` section.
pub fn validate_sample(
    project: &Project,
    identifier: &str,
    schema_ref: &SchemaRef,
    exclude_case: bool,
) -> Result<(), ValidateError> {
    let schema = sample_schema(&load_schema(schema_ref)?)?;
    let sample = resolve_sample(project, identifier)?;
    let document = materialize_sample(sample)?;
    validate_document(&document, &schema, exclude_case)
}

/// Suppress required-property violations that are satisfied by an
/// existing key under case-insensitive comparison. Other violation
/// kinds pass through untouched.
fn exclude_case_filter(document: &JsonValue, violations: Vec<Violation>) -> Vec<Violation> {
    violations
        .into_iter()
        .filter(|v| match &v.kind {
            ViolationKind::RequiredMissing { property } => {
                let keys_match = document
                    .pointer(&v.path)
                    .and_then(JsonValue::as_object)
                    .map(|obj| obj.keys().any(|k| k.eq_ignore_ascii_case(property)))
                    .unwrap_or(false);
                !keys_match
            }
            _ => true,
        })
        .collect()
}

/// Convert a jsonschema error into our violation format.
fn error_to_violation(error: &JsonSchemaError) -> Violation {
    let path = error.instance_path.to_string();
    let (kind, message, help) = describe_error(error, &path);
    Violation {
        kind,
        path,
        message,
        help,
    }
}

fn describe_error(
    error: &JsonSchemaError,
    path: &str,
) -> (ViolationKind, String, Option<String>) {
    let at = if path.is_empty() {
        "document root".to_string()
    } else {
        format!("'{}'", path)
    };

    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            (
                ViolationKind::RequiredMissing {
                    property: prop.clone(),
                },
                format!("missing required property '{}' at {}", prop, at),
                Some(format!("add '{}' to the document", prop)),
            )
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => (
            ViolationKind::TypeMismatch,
            format!("wrong type at {}: expected {:?}", at, kind),
            None,
        ),
        jsonschema::error::ValidationErrorKind::Enum { options } => {
            let opts = format_enum_options(options);
            (
                ViolationKind::EnumMismatch,
                format!("invalid value at {}: must be one of: {}", at, opts),
                Some(format!("valid values: {}", opts)),
            )
        }
        jsonschema::error::ValidationErrorKind::Pattern { pattern } => (
            ViolationKind::PatternMismatch,
            format!("value at {} does not match pattern: {}", at, pattern),
            None,
        ),
        jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => (
            ViolationKind::AdditionalProperties,
            format!("property not allowed at {}: {}", at, unexpected.join(", ")),
            Some("remove the unexpected property or check spelling".to_string()),
        ),
        _ => (
            ViolationKind::Other,
            format!("validation error at {}: {}", at, error),
            None,
        ),
    }
}

fn format_enum_options(options: &JsonValue) -> String {
    if let Some(arr) = options.as_array() {
        arr.iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| v.to_string())
            })
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        options.to_string()
    }
}
