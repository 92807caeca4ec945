use anyhow::{Context, Result};
use stagepop_sim::presets;

use crate::args::InitArgs;

pub fn init_model(args: &InitArgs) -> Result<()> {
    let Some(config) = presets::by_name(&args.preset) else {
        anyhow::bail!(
            "Unknown preset '{}'. Available presets: {}",
            args.preset,
            presets::NAMES.join(", ")
        );
    };

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    config
        .write_to(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("✓ Model '{}' written to {}", config.display_name(), args.output.display());
    println!("  Stages: {}", config.stages);
    println!("  Steps: {}", config.steps);
    Ok(())
}
