//! `pepcheck validate` command

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{GlobalOpts, ValidateArgs};
use crate::core::project::Project;
use crate::schema::loader::SchemaRef;
use crate::schema::validator::{
    validate_config, validate_project, validate_sample, ValidateError,
};

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::from_file(&args.config).into_diagnostic()?;
    let schema_ref = SchemaRef::path(&args.schema);

    if global.verbose {
        eprintln!(
            "{} Comparing project '{}' against schema {}",
            style("→").blue(),
            project.name(),
            args.schema.display()
        );
    }

    let result = if let Some(identifier) = &args.sample_name {
        validate_sample(&project, identifier, &schema_ref, args.exclude_case)
    } else if args.just_config {
        validate_config(&project, &schema_ref, args.exclude_case)
    } else {
        validate_project(&project, &schema_ref, args.exclude_case)
    };

    match result {
        Ok(()) => {
            if !global.quiet {
                println!("{} Validation successful", style("✓").green().bold());
            }
            Ok(())
        }
        Err(ValidateError::Failed(failed)) => {
            if !global.quiet {
                println!(
                    "{} Validation failed: {} violation(s)",
                    style("✗").red().bold(),
                    failed.violation_count()
                );
                for violation in failed.violations() {
                    println!("  {} {}", style("-").red(), violation.message());
                }
            }
            // Violations were already listed above; exit with a summary
            // so each one is reported once.
            if failed.violation_count() == 1 {
                Err(miette::miette!("validation failed: 1 violation"))
            } else {
                Err(miette::miette!(
                    "validation failed: {} violations",
                    failed.violation_count()
                ))
            }
        }
        Err(other) => Err(other.into()),
    }
}
