use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

/// How `run` and `demo` report a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Matrix and per-step table for reading in a terminal
    Pretty,
    /// Trajectory as a JSON array of step records
    Json,
    /// Trajectory as CSV: step,total,stage_0,...
    Csv,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Model configuration file (JSON)
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Number of steps to project (overrides the config)
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the model configuration
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Preset to start from (leslie, lefkovitch)
    #[arg(short, long, default_value = defaults::PRESET)]
    pub preset: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
