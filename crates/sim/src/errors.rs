use std::fmt;
use thiserror::Error;

/// Identifies which input vector a dimension check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    /// Fecundity row (row 0 of the matrix)
    Fecundity,
    /// Survival sub-diagonal
    Survival,
    /// Recurrence diagonal
    Recurrence,
    /// Population vector
    Population,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fecundity => "fecundity",
            Self::Survival => "survival",
            Self::Recurrence => "recurrence",
            Self::Population => "population",
        };
        f.write_str(name)
    }
}

/// Errors raised while building or stepping a projection matrix.
///
/// A call that returns one of these has not modified the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A vector did not have the length its slot requires.
    #[error("Mismatch in {target} size: expected {expected}, got {actual}")]
    DimensionMismatch {
        target: VectorKind,
        expected: usize,
        actual: usize,
    },

    /// A single-cell override referenced a stage outside the matrix.
    #[error("Invalid stage values: from={from}, to={to} (stage count = {stage_count})")]
    StageOutOfRange {
        from: usize,
        to: usize,
        stage_count: usize,
    },

    /// A matrix needs at least one stage.
    #[error("Invalid stage count: {0} (must be at least 1)")]
    InvalidStageCount(usize),

    /// Stepping requires a population vector.
    #[error("Population vector has not been set")]
    PopulationNotSet,
}

/// Errors raised while loading a model description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Model(#[from] ProjectionError),
}
