//! Project model: a YAML configuration plus an ordered sample manifest
//!
//! A project is loaded from a YAML config file. If the config carries a
//! `sample_table` key, that path (relative to the config file) is read
//! as a CSV sample sheet; each row becomes one [`Sample`] in sheet order.

use std::path::{Path, PathBuf};

use serde_yml::{Mapping, Value as YamlValue};
use thiserror::Error;

use crate::core::sample::Sample;

/// Config key naming the sample sheet file.
pub const SAMPLE_TABLE_KEY: &str = "sample_table";

/// A project: named config mapping plus ordered samples.
///
/// The core only reads a project after construction; nothing here
/// mutates it.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    config: Mapping,
    samples: Vec<Sample>,
}

impl Project {
    /// Build a project from already-parsed parts.
    pub fn new(name: impl Into<String>, config: Mapping, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            config,
            samples,
        }
    }

    /// Load a project from a YAML config file.
    ///
    /// The config must be a mapping. A `sample_table` entry, if present,
    /// is resolved relative to the config file's directory and read as a
    /// CSV sample sheet.
    pub fn from_file(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: YamlValue =
            serde_yml::from_str(&content).map_err(|source| ProjectError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let config = match value {
            YamlValue::Mapping(m) => m,
            _ => {
                return Err(ProjectError::NotAMapping {
                    path: path.to_path_buf(),
                })
            }
        };

        let name = config
            .get("name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "project".to_string())
            });

        let samples = match config.get(SAMPLE_TABLE_KEY).and_then(|v| v.as_str()) {
            Some(table) => {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                load_sample_sheet(&base.join(table))?
            }
            None => Vec::new(),
        };

        Ok(Self {
            name,
            config,
            samples,
        })
    }

    /// Project name (config `name` key, or the config file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw configuration mapping.
    pub fn config(&self) -> &Mapping {
        &self.config
    }

    /// Samples in manifest order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

/// Read a CSV sample sheet into samples, preserving row order.
fn load_sample_sheet(path: &Path) -> Result<Vec<Sample>, ProjectError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| ProjectError::SampleSheet {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| ProjectError::SampleSheet {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ProjectError::SampleSheet {
            path: path.to_path_buf(),
            source,
        })?;

        let mut attributes = Mapping::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            attributes.insert(
                YamlValue::String(header.to_string()),
                YamlValue::String(cell.to_string()),
            );
        }
        samples.push(Sample::new(attributes));
    }

    Ok(samples)
}

/// Errors that can occur while loading a project.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read project config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("project config {path:?} must be a YAML mapping")]
    NotAMapping { path: PathBuf },

    #[error("failed to read sample sheet {path:?}")]
    SampleSheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_file_loads_config_and_samples() {
        let tmp = tempdir().unwrap();
        let sheet = tmp.path().join("samples.csv");
        fs::write(&sheet, "sample_name,protocol\ns1,rna\ns2,atac\n").unwrap();

        let config_path = tmp.path().join("project_config.yaml");
        fs::write(
            &config_path,
            "name: demo\noutput_dir: results\nsample_table: samples.csv\n",
        )
        .unwrap();

        let project = Project::from_file(&config_path).unwrap();
        assert_eq!(project.name(), "demo");
        assert_eq!(project.samples().len(), 2);
        assert_eq!(project.samples()[0].name(), Some("s1"));
        assert_eq!(project.samples()[1].name(), Some("s2"));
        assert_eq!(
            project.config().get("output_dir").and_then(|v| v.as_str()),
            Some("results")
        );
    }

    #[test]
    fn test_from_file_without_sample_table() {
        let tmp = tempdir().unwrap();
        let config_path = tmp.path().join("config.yaml");
        fs::write(&config_path, "output_dir: results\n").unwrap();

        let project = Project::from_file(&config_path).unwrap();
        // Name falls back to the file stem
        assert_eq!(project.name(), "config");
        assert!(project.samples().is_empty());
    }

    #[test]
    fn test_from_file_rejects_non_mapping() {
        let tmp = tempdir().unwrap();
        let config_path = tmp.path().join("config.yaml");
        fs::write(&config_path, "- just\n- a\n- list\n").unwrap();

        let err = Project::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ProjectError::NotAMapping { .. }));
    }

    #[test]
    fn test_from_file_missing_file() {
        let err = Project::from_file(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ProjectError::Read { .. }));
    }

    #[test]
    fn test_sample_sheet_row_order_preserved() {
        let tmp = tempdir().unwrap();
        let sheet = tmp.path().join("samples.csv");
        fs::write(&sheet, "sample_name\nzulu\nalpha\nmike\n").unwrap();

        let config_path = tmp.path().join("config.yaml");
        fs::write(&config_path, "sample_table: samples.csv\n").unwrap();

        let project = Project::from_file(&config_path).unwrap();
        let names: Vec<_> = project.samples().iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }
}
