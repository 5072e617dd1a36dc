//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pepcheck")]
#[command(author, version, about = "Validate project metadata against a schema")]
#[command(long_about = "Validates a project config and its sample manifest against a \
YAML/JSON schema, and converts projects into alternate output formats.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a project against a schema
    Validate(ValidateArgs),

    /// Print a summary of a project or of selected samples
    Inspect(InspectArgs),

    /// Convert a project to another output format
    Convert(ConvertArgs),

    /// List available conversion formats
    Filters,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Project config file (YAML)
    pub config: PathBuf,

    /// Schema file (YAML or JSON)
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Validate a single sample, by name or zero-based index
    #[arg(long, short = 'n')]
    pub sample_name: Option<String>,

    /// Validate only the config portion of the project
    #[arg(long, short = 'c', conflicts_with = "sample_name")]
    pub just_config: bool,

    /// Treat required fields as present if a key matches case-insensitively
    #[arg(long, short = 'e')]
    pub exclude_case: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Project config file (YAML)
    pub config: PathBuf,

    /// Samples to inspect, by name or zero-based index
    #[arg(long, short = 'n')]
    pub sample_name: Vec<String>,

    /// Maximum attribute value length before truncation
    #[arg(long, short = 'l', default_value_t = 30)]
    pub attr_limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Project config file (YAML)
    pub config: PathBuf,

    /// Target format name (see `pepcheck filters`)
    #[arg(long, short = 'f')]
    pub format: String,
}
