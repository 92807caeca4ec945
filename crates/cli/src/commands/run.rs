use anyhow::{Context, Result};
use stagepop_sim::projection::ModelConfig;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::args::{OutputFormat, RunArgs};
use crate::defaults;
use crate::printing::render;

pub fn run_model(args: &RunArgs) -> Result<()> {
    let config = ModelConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load model from {}", args.config.display()))?;

    project_and_report(&config, args.steps, args.format, args.output.as_ref())
}

/// Build the model, project it and write the report to `output` or stdout.
pub fn project_and_report(
    config: &ModelConfig,
    steps_override: Option<usize>,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let steps = steps_override.unwrap_or(config.steps);
    if steps > defaults::MAX_STEPS {
        anyhow::bail!(
            "Too many steps: {steps} (at most {} are supported)",
            defaults::MAX_STEPS
        );
    }

    let mut model = config
        .build()
        .with_context(|| format!("Invalid model '{}'", config.display_name()))?;

    info!(model = config.display_name(), steps, "projecting");
    let trajectory = model
        .project(steps)
        .context("Failed to project population")?;

    let report = render(format, config, &model, &trajectory)?;
    match output {
        Some(path) => write_report(path, &report)?,
        None => print!("{report}"),
    }
    Ok(())
}

fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Wrote projection to {}", path.display());
    Ok(())
}
