//! Document materialization
//!
//! Converts a project into the canonical nested-map/array document the
//! schema engine checks. The top-level shape is always
//! `{ config-keys..., "samples": [ sample-documents... ] }`, or the
//! config-only subset without `"samples"`, so one schema can describe
//! either granularity.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::core::project::Project;
use crate::core::sample::Sample;

/// Materialize a project into a schema-checkable JSON document.
///
/// Config keys are carried over verbatim; with `include_samples`, a
/// `"samples"` array of attribute mappings is appended in manifest
/// order. The project itself is never mutated.
pub fn materialize(project: &Project, include_samples: bool) -> Result<JsonValue, MaterializeError> {
    let mut document = to_json(project.config(), "config")?;

    if include_samples {
        let samples = project
            .samples()
            .iter()
            .map(materialize_sample)
            .collect::<Result<Vec<_>, _>>()?;
        if let JsonValue::Object(map) = &mut document {
            map.insert("samples".to_string(), JsonValue::Array(samples));
        }
    }

    Ok(document)
}

/// Materialize a single sample's attribute mapping.
pub fn materialize_sample(sample: &Sample) -> Result<JsonValue, MaterializeError> {
    let name = sample.name().unwrap_or("<unnamed>").to_string();
    to_json(sample.attributes(), &name)
}

fn to_json<T: serde::Serialize>(value: &T, what: &str) -> Result<JsonValue, MaterializeError> {
    serde_json::to_value(value).map_err(|source| MaterializeError::NotRepresentable {
        what: what.to_string(),
        source,
    })
}

/// A project part that cannot be rendered as a plain JSON document,
/// e.g. a mapping with composite keys.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("cannot materialize '{what}' as a plain document")]
    NotRepresentable {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_yml::{Mapping, Value as YamlValue};

    fn yaml_map(pairs: &[(&str, YamlValue)]) -> Mapping {
        let mut m = Mapping::new();
        for (k, v) in pairs {
            m.insert(YamlValue::String(k.to_string()), v.clone());
        }
        m
    }

    fn demo_project() -> Project {
        let config = yaml_map(&[
            ("name", YamlValue::String("demo".into())),
            ("output_dir", YamlValue::String("results".into())),
        ]);
        let samples = vec![
            Sample::new(yaml_map(&[
                ("name", YamlValue::String("s1".into())),
                ("x", YamlValue::Number(1.into())),
            ])),
            Sample::new(yaml_map(&[
                ("name", YamlValue::String("s2".into())),
                ("x", YamlValue::Number(2.into())),
            ])),
        ];
        Project::new("demo", config, samples)
    }

    #[test]
    fn test_materialize_with_samples() {
        let doc = materialize(&demo_project(), true).unwrap();
        assert_eq!(
            doc,
            json!({
                "name": "demo",
                "output_dir": "results",
                "samples": [
                    {"name": "s1", "x": 1},
                    {"name": "s2", "x": 2},
                ],
            })
        );
    }

    #[test]
    fn test_materialize_config_only_has_no_samples_key() {
        let doc = materialize(&demo_project(), false).unwrap();
        assert_eq!(
            doc,
            json!({"name": "demo", "output_dir": "results"})
        );
    }

    #[test]
    fn test_materialize_sample_preserves_values() {
        let project = demo_project();
        let doc = materialize_sample(&project.samples()[1]).unwrap();
        assert_eq!(doc, json!({"name": "s2", "x": 2}));
    }

    #[test]
    fn test_non_string_keys_are_rejected() {
        let mut config = Mapping::new();
        // YAML permits composite keys; JSON documents cannot express them
        config.insert(
            YamlValue::Sequence(vec![YamlValue::String("k".into())]),
            YamlValue::String("x".into()),
        );
        let project = Project::new("bad", config, vec![]);

        let err = materialize(&project, false).unwrap_err();
        assert!(matches!(err, MaterializeError::NotRepresentable { .. }));
    }
}
