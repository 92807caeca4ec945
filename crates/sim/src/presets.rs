//! Reference models with published worked examples.

use crate::projection::ModelConfig;

/// Four-class age-structured (Leslie) example.
///
/// Starting from `[20, 10, 40, 30]`, one step gives `[74, 10, 8, 20]`.
pub fn leslie_four_stage() -> ModelConfig {
    ModelConfig {
        name: Some("leslie-4".to_string()),
        stages: 4,
        fecundity: Some(vec![0.5, 2.4, 1.0, 0.0]),
        survival: Some(vec![0.5, 0.8, 0.5]),
        recurrence: None,
        relations: Vec::new(),
        population: Some(vec![20.0, 10.0, 40.0, 30.0]),
        steps: 1,
    }
}

/// Three-stage (Lefkovitch) example with individuals remaining in the
/// later stages.
///
/// Starting from `[70, 20, 10]`, the totals for the first three steps are
/// 3847.58, 2093.1914 and 5811.535142.
pub fn lefkovitch_three_stage() -> ModelConfig {
    ModelConfig {
        name: Some("lefkovitch-3".to_string()),
        stages: 3,
        fecundity: Some(vec![0.0, 52.0, 279.5]),
        survival: Some(vec![0.024, 0.08]),
        recurrence: Some(vec![0.25, 0.43]),
        relations: Vec::new(),
        population: Some(vec![70.0, 20.0, 10.0]),
        steps: 25,
    }
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<ModelConfig> {
    match name {
        "leslie" | "leslie-4" => Some(leslie_four_stage()),
        "lefkovitch" | "lefkovitch-3" => Some(lefkovitch_three_stage()),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["leslie", "lefkovitch"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        for name in NAMES {
            let config = by_name(name).unwrap();
            let model = config.build().unwrap();
            assert_eq!(model.population().len(), config.stages);
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(by_name("logistic").is_none());
    }

    #[test]
    fn test_lefkovitch_long_run() {
        let config = lefkovitch_three_stage();
        let mut model = config.build().unwrap();
        model.project(config.steps).unwrap();

        let expected = [19837904.89838918, 393232.36554185, 30519.85368983];
        for (actual, expected) in model.population().iter().zip(expected) {
            assert!(
                ((actual - expected) / expected).abs() < 1e-9,
                "expected {expected}, got {actual}"
            );
        }
    }
}
