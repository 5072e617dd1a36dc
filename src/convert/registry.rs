//! Conversion filter registry
//!
//! Filters are registered once, at first use of the process-wide
//! registry, and the registry is read-only afterwards. Lookup is by
//! exact, case-sensitive name; at most one filter runs per conversion.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use miette::Diagnostic;
use thiserror::Error;

use crate::convert::filters;
use crate::convert::ConversionFilter;
use crate::core::project::Project;

/// Registry mapping format names to conversion filters.
pub struct Registry {
    filters: BTreeMap<String, Box<dyn ConversionFilter>>,
}

impl Registry {
    /// An empty registry with no filters installed.
    pub fn empty() -> Self {
        Self {
            filters: BTreeMap::new(),
        }
    }

    /// A registry populated with the built-in filters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, filter) in filters::builtins() {
            registry.register(name, filter);
        }
        registry
    }

    /// Register a filter under a name. Registering the same name twice
    /// replaces the earlier filter: last registration wins.
    pub fn register(&mut self, name: impl Into<String>, filter: Box<dyn ConversionFilter>) {
        self.filters.insert(name.into(), filter);
    }

    /// All registered format names, sorted. Empty is a valid answer.
    pub fn formats(&self) -> Vec<String> {
        self.filters.keys().cloned().collect()
    }

    /// Run the named filter against a project.
    pub fn convert(&self, project: &Project, format: &str) -> Result<String, ConvertError> {
        let filter = self
            .filters
            .get(format)
            .ok_or_else(|| ConvertError::UnknownFormat {
                requested: format.to_string(),
                available: self.formats().join(", "),
            })?;

        filter.run(project).map_err(ConvertError::Filter)
    }
}

/// The process-wide registry, built on first use and immutable after.
pub fn global_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::with_builtins)
}

/// A filter itself failed while producing output.
#[derive(Debug, Error, Diagnostic)]
#[error("conversion filter failed: {0}")]
pub struct FilterError(pub String);

/// Errors from conversion dispatch.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("unknown format '{requested}' (available: {available})")]
    UnknownFormat { requested: String, available: String },

    #[error(transparent)]
    Filter(#[from] FilterError),
}
