mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{InitArgs, OutputFormat, RunArgs};
use commands::{demo, init, run, validate};

/// stagepop: age- and stage-structured population projection
///
/// Builds a Leslie or Lefkovitch projection matrix from a model file and
/// steps a population vector forward in discrete time.
#[derive(Parser, Debug)]
#[command(name = "stagepop")]
#[command(author, version, about = "Projects stage-structured populations forward in time", long_about = None)]
struct Cli {
    /// Log every projection step to stderr
    ///
    /// Otherwise only warnings are logged, unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Project a model described in a JSON file.
    Run(RunArgs),

    /// Run one of the built-in example models.
    Demo {
        /// Preset name (leslie, lefkovitch)
        #[arg(default_value = defaults::PRESET)]
        preset: String,

        /// Number of steps to project
        #[arg(short, long, default_value_t = defaults::DEMO_STEPS)]
        steps: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Write a preset model to a JSON file as a starting point.
    Init(InitArgs),

    /// Check that a model file parses and builds.
    Validate {
        /// Model configuration file (JSON)
        #[arg(short, long, default_value = defaults::CONFIG_FILE)]
        config: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            run::run_model(&args)?;
        }
        Commands::Demo {
            preset,
            steps,
            format,
        } => {
            demo::run_demo(&preset, Some(steps), format)?;
        }
        Commands::Init(args) => {
            init::init_model(&args)?;
        }
        Commands::Validate { config } => {
            validate::validate_model(&config)?;
        }
    }

    Ok(())
}
