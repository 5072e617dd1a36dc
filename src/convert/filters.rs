//! Built-in conversion filters
//!
//! Shipped formats: `basic` (plain-text summary), `yaml` (full project
//! document), `yaml-samples` (samples only), `csv` (sample sheet).

use serde_yml::Value as YamlValue;

use crate::convert::registry::FilterError;
use crate::convert::ConversionFilter;
use crate::core::materialize::{materialize, materialize_sample};
use crate::core::project::Project;

/// The filters installed into the registry at startup.
pub fn builtins() -> Vec<(&'static str, Box<dyn ConversionFilter>)> {
    vec![
        ("basic", Box::new(BasicFilter)),
        ("yaml", Box::new(YamlFilter)),
        ("yaml-samples", Box::new(YamlSamplesFilter)),
        ("csv", Box::new(CsvFilter)),
    ]
}

/// Plain-text summary: project name, sample count, sample names.
struct BasicFilter;

impl ConversionFilter for BasicFilter {
    fn run(&self, project: &Project) -> Result<String, FilterError> {
        let mut out = String::new();
        out.push_str(&format!("Project '{}'\n", project.name()));
        out.push_str(&format!("{} samples\n", project.samples().len()));
        for sample in project.samples() {
            out.push_str(&format!("  {}\n", sample.name().unwrap_or("<unnamed>")));
        }
        Ok(out)
    }
}

/// The full project document (config plus samples) as YAML.
struct YamlFilter;

impl ConversionFilter for YamlFilter {
    fn run(&self, project: &Project) -> Result<String, FilterError> {
        let document = materialize(project, true).map_err(|e| FilterError(e.to_string()))?;
        serde_yml::to_string(&document).map_err(|e| FilterError(e.to_string()))
    }
}

/// Just the sample documents, as a YAML sequence.
struct YamlSamplesFilter;

impl ConversionFilter for YamlSamplesFilter {
    fn run(&self, project: &Project) -> Result<String, FilterError> {
        let samples = project
            .samples()
            .iter()
            .map(materialize_sample)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FilterError(e.to_string()))?;
        serde_yml::to_string(&samples).map_err(|e| FilterError(e.to_string()))
    }
}

/// Samples rendered back into a CSV sheet. The header is the union of
/// attribute names across samples, in first-seen order; missing cells
/// are left empty.
struct CsvFilter;

impl ConversionFilter for CsvFilter {
    fn run(&self, project: &Project) -> Result<String, FilterError> {
        let mut columns: Vec<String> = Vec::new();
        for sample in project.samples() {
            for key in sample.attributes().keys() {
                if let Some(key) = key.as_str() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.to_string());
                    }
                }
            }
        }

        if columns.is_empty() {
            return Ok(String::new());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&columns)
            .map_err(|e| FilterError(e.to_string()))?;

        for sample in project.samples() {
            let row: Vec<String> = columns
                .iter()
                .map(|col| {
                    sample
                        .attributes()
                        .get(col.as_str())
                        .map(render_cell)
                        .unwrap_or_default()
                })
                .collect();
            writer
                .write_record(&row)
                .map_err(|e| FilterError(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| FilterError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| FilterError(e.to_string()))
    }
}

fn render_cell(value: &YamlValue) -> String {
    match value {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => String::new(),
        other => serde_yml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
