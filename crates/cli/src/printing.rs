use anyhow::Result;
use stagepop_sim::projection::{ModelConfig, ProjectionMatrix, Trajectory};

use crate::args::OutputFormat;

/// Render a projection in the requested format.
pub fn render(
    format: OutputFormat,
    config: &ModelConfig,
    model: &ProjectionMatrix,
    trajectory: &Trajectory,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(render_pretty(config, model, trajectory)),
        OutputFormat::Json => render_json(trajectory),
        OutputFormat::Csv => Ok(render_csv(model.stage_count(), trajectory)),
    }
}

/// JSON cannot hold infinities or NaN, so an overflowed trajectory is refused
/// rather than written with `null`s.
pub fn render_json(trajectory: &Trajectory) -> Result<String> {
    if let Some(record) = trajectory.records().iter().find(|r| !r.is_finite()) {
        anyhow::bail!(
            "Population is not finite from step {} on; JSON cannot represent it (use --format csv)",
            record.step
        );
    }
    let mut out = serde_json::to_string_pretty(trajectory)?;
    out.push('\n');
    Ok(out)
}

pub fn render_pretty(
    config: &ModelConfig,
    model: &ProjectionMatrix,
    trajectory: &Trajectory,
) -> String {
    let mut out = describe_model(config, model);

    out.push_str("\n📈 Trajectory\n");
    out.push_str(&format!("  {:>6} {:>16}", "step", "total"));
    for stage in 0..model.stage_count() {
        out.push_str(&format!(" {:>16}", format!("stage {stage}")));
    }
    out.push('\n');

    for record in trajectory.records() {
        out.push_str(&format!("  {:>6} {:>16.6}", record.step, record.total));
        for value in &record.population {
            out.push_str(&format!(" {value:>16.6}"));
        }
        out.push('\n');
    }
    out
}

/// Summary of a model: its name, stage count and coefficient matrix.
pub fn describe_model(config: &ModelConfig, model: &ProjectionMatrix) -> String {
    let mut out = format!("\n📋 Model: {}\n", config.display_name());
    out.push_str(&format!("  • Stages: {}\n", model.stage_count()));
    if !config.relations.is_empty() {
        out.push_str(&format!("  • Relations: {}\n", config.relations.len()));
    }

    out.push_str("\n🔢 Projection Matrix (row = to, column = from)\n");
    for row in model.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>12.6}")).collect();
        out.push_str(&format!("  [{} ]\n", cells.join("")));
    }
    out
}

pub fn render_csv(stage_count: usize, trajectory: &Trajectory) -> String {
    let mut out = String::from("step,total");
    for stage in 0..stage_count {
        out.push_str(&format!(",stage_{stage}"));
    }
    out.push('\n');

    for record in trajectory.records() {
        out.push_str(&format!("{},{}", record.step, record.total));
        for value in &record.population {
            out.push_str(&format!(",{value}"));
        }
        out.push('\n');
    }
    out
}
