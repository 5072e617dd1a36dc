//! `pepcheck convert` command

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{ConvertArgs, GlobalOpts};
use crate::convert::convert_project;
use crate::core::project::Project;

pub fn run(args: ConvertArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::from_file(&args.config).into_diagnostic()?;

    let output = convert_project(&project, &args.format)?;
    print!("{}", output);

    if !global.quiet {
        eprintln!("{} Conversion successful", style("✓").green().bold());
    }
    Ok(())
}
