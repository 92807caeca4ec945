//! Serializable model descriptions.
//!
//! A [`ModelConfig`] captures everything needed to rebuild a projection
//! model: the stage count, the helper vectors, single-cell relations, the
//! starting population and how many steps to project.

use crate::errors::{ConfigError, ProjectionError};
use crate::projection::{ProjectionBuilder, ProjectionMatrix};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_steps() -> usize {
    1
}

/// A single-cell transition coefficient as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    /// Source stage
    pub from: usize,
    /// Destination stage
    pub to: usize,
    /// Coefficient
    pub value: f64,
}

/// Complete description of a projection model.
///
/// ```
/// use stagepop_sim::projection::ModelConfig;
///
/// let config = ModelConfig::from_json_str(r#"{
///     "stages": 2,
///     "fecundity": [0.0, 1.2],
///     "survival": [0.6],
///     "population": [10.0, 5.0],
///     "steps": 4
/// }"#).unwrap();
///
/// let mut model = config.build().unwrap();
/// let trajectory = model.project(config.steps).unwrap();
/// assert_eq!(trajectory.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of ages or stages
    pub stages: usize,
    /// Fecundity row (length `stages`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecundity: Option<Vec<f64>>,
    /// Survival sub-diagonal (length `stages - 1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survival: Option<Vec<f64>>,
    /// Recurrence diagonal (length `stages - 1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<f64>>,
    /// Single-cell overrides, applied after the helper vectors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationConfig>,
    /// Starting population (length `stages`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<Vec<f64>>,
    /// Number of steps to project
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl ModelConfig {
    /// Create an empty config for `stages` stages.
    pub fn new(stages: usize) -> Self {
        Self {
            name: None,
            stages,
            fecundity: None,
            survival: None,
            recurrence: None,
            relations: Vec::new(),
            population: None,
            steps: default_steps(),
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the config as pretty-printed JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Build the projection matrix this config describes.
    pub fn build(&self) -> Result<ProjectionMatrix, ProjectionError> {
        let mut builder = ProjectionBuilder::new(self.stages);
        if let Some(fecundity) = &self.fecundity {
            builder = builder.fecundity(fecundity.clone());
        }
        if let Some(survival) = &self.survival {
            builder = builder.survival(survival.clone());
        }
        if let Some(recurrence) = &self.recurrence {
            builder = builder.recurrence(recurrence.clone());
        }
        for r in &self.relations {
            builder = builder.relation(r.from, r.to, r.value);
        }
        if let Some(population) = &self.population {
            builder = builder.population(population.clone());
        }
        builder.build()
    }

    /// Label to show for this model.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VectorKind;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::from_json_str(r#"{"stages": 3}"#).unwrap();
        assert_eq!(config, ModelConfig::new(3));
        assert_eq!(config.steps, 1);
        assert_eq!(config.display_name(), "unnamed model");
    }

    #[test]
    fn test_build_with_relations() {
        let config = ModelConfig::from_json_str(
            r#"{
                "stages": 3,
                "survival": [0.5, 0.5],
                "relations": [{"from": 0, "to": 2, "value": 0.1}]
            }"#,
        )
        .unwrap();
        let m = config.build().unwrap();
        assert_eq!(m.get(2, 0), Some(0.1));
        assert_eq!(m.get(1, 0), Some(0.5));
    }

    #[test]
    fn test_negative_stage_index_rejected_by_parser() {
        let result = ModelConfig::from_json_str(
            r#"{"stages": 2, "relations": [{"from": -1, "to": 0, "value": 1.0}]}"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_build_reports_mismatch() {
        let mut config = ModelConfig::new(2);
        config.population = Some(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            config.build().unwrap_err(),
            ProjectionError::DimensionMismatch {
                target: VectorKind::Population,
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");

        let mut config = ModelConfig::new(2);
        config.name = Some("pair".to_string());
        config.fecundity = Some(vec![0.0, 2.0]);
        config.steps = 7;
        config.write_to(&path).unwrap();

        let loaded = ModelConfig::from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = ModelConfig::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
