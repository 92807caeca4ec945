use anyhow::Result;
use stagepop_sim::presets;

use crate::args::OutputFormat;
use crate::commands::run::project_and_report;

pub fn run_demo(preset: &str, steps: Option<usize>, format: OutputFormat) -> Result<()> {
    let Some(config) = presets::by_name(preset) else {
        anyhow::bail!(
            "Unknown preset '{preset}'. Available presets: {}",
            presets::NAMES.join(", ")
        );
    };

    if format == OutputFormat::Pretty {
        println!("🌱 stagepop - {} demo", config.display_name());
        println!("============================================");
    }

    project_and_report(&config, steps, format, None)
}
