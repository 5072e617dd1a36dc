//! `pepcheck inspect` command

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{GlobalOpts, InspectArgs};
use crate::core::project::Project;
use crate::core::sample::resolve_sample;

pub fn run(args: InspectArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::from_file(&args.config).into_diagnostic()?;

    if args.sample_name.is_empty() {
        println!("{}", style(format!("Project '{}'", project.name())).bold());
        println!("  {} samples", project.samples().len());
        for sample in project.samples() {
            println!("    {}", sample.name().unwrap_or("<unnamed>"));
        }
        return Ok(());
    }

    for identifier in &args.sample_name {
        let sample = resolve_sample(&project, identifier).into_diagnostic()?;
        println!(
            "{}",
            style(format!("Sample '{}'", sample.name().unwrap_or(identifier))).bold()
        );
        for (key, value) in sample.attributes() {
            let key = key.as_str().unwrap_or("?");
            println!("  {}: {}", key, truncate(&render(value), args.attr_limit));
        }
    }

    Ok(())
}

fn render(value: &serde_yml::Value) -> String {
    match value {
        serde_yml::Value::String(s) => s.clone(),
        other => serde_yml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() > limit {
        let cut: String = value.chars().take(limit).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}
