//! Sample type and sample resolution

use serde_yml::{Mapping, Value as YamlValue};
use thiserror::Error;

use crate::core::project::Project;

/// Attribute carrying a sample's identity (PEP convention).
pub const NAME_ATTR: &str = "sample_name";

/// Fallback identity attribute for non-PEP manifests.
pub const NAME_ATTR_FALLBACK: &str = "name";

/// One row of a sample manifest: an ordered attribute mapping.
#[derive(Debug, Clone)]
pub struct Sample {
    attributes: Mapping,
}

impl Sample {
    pub fn new(attributes: Mapping) -> Self {
        Self { attributes }
    }

    /// The sample's name: `sample_name` if present, else `name`.
    pub fn name(&self) -> Option<&str> {
        self.attributes
            .get(NAME_ATTR)
            .or_else(|| self.attributes.get(NAME_ATTR_FALLBACK))
            .and_then(YamlValue::as_str)
    }

    pub fn attributes(&self) -> &Mapping {
        &self.attributes
    }
}

/// Locate a sample by positional index or by name.
///
/// Resolution is numeric-first: an identifier that parses as an integer
/// is always a zero-based index into the manifest, so a sample literally
/// named "3" is unreachable by name. Name lookup returns the first match
/// in manifest order when names are duplicated.
pub fn resolve_sample<'a>(
    project: &'a Project,
    identifier: &str,
) -> Result<&'a Sample, SampleError> {
    if let Ok(index) = identifier.parse::<usize>() {
        return project
            .samples()
            .get(index)
            .ok_or_else(|| SampleError::NotFound {
                project: project.name().to_string(),
                identifier: identifier.to_string(),
            });
    }

    project
        .samples()
        .iter()
        .find(|s| s.name() == Some(identifier))
        .ok_or_else(|| SampleError::NotFound {
            project: project.name().to_string(),
            identifier: identifier.to_string(),
        })
}

/// Errors from sample resolution.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("no sample '{identifier}' in project '{project}'")]
    NotFound { project: String, identifier: String },
}
