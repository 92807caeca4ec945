use anyhow::{Context, Result};
use stagepop_sim::projection::ModelConfig;
use std::path::Path;

pub fn validate_model(path: &Path) -> Result<()> {
    println!("🔍 Validating model: {}", path.display());

    let config = ModelConfig::from_path(path).context("Failed to load model")?;
    println!("✓ Parsed: {}", config.display_name());

    let model = config.build().context("Model is invalid")?;
    println!("✓ Matrix: {0}×{0}", model.stage_count());

    if model.population().is_empty() {
        println!("⚠️  No population vector set; `run` will fail until one is added");
    } else {
        println!("✓ Population: total {:.6}", model.total_population());
    }
    println!("✓ Steps: {}", config.steps);
    Ok(())
}
