//! Conversion subsystem - pluggable project-to-output filters

pub mod filters;
pub mod registry;

pub use registry::{global_registry, ConvertError, FilterError, Registry};

use crate::core::project::Project;

/// A named unit that renders a project into an alternate representation.
pub trait ConversionFilter: Send + Sync {
    fn run(&self, project: &Project) -> Result<String, FilterError>;
}

/// Names of all registered conversion formats, in deterministic order.
pub fn list_conversion_formats() -> Vec<String> {
    global_registry().formats()
}

/// Convert a project with the named filter.
pub fn convert_project(project: &Project, format: &str) -> Result<String, ConvertError> {
    global_registry().convert(project, format)
}
