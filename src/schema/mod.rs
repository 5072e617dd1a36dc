//! Schema system - loading, composition, and validation

pub mod loader;
pub mod validator;

pub use loader::{config_schema, load_schema, sample_schema, SchemaError, SchemaRef};
pub use validator::{
    validate_config, validate_document, validate_project, validate_sample, ValidateError,
    ValidationFailed, Violation, ViolationKind,
};
