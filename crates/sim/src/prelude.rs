//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the stagepop library.
//!
//! # Example
//!
//! ```
//! use stagepop_sim::prelude::*;
//!
//! let model = ProjectionBuilder::new(2)
//!     .fecundity([0.0, 1.5])
//!     .survival([0.5])
//!     .build()
//!     .unwrap();
//! assert_eq!(model.stage_count(), 2);
//! ```

pub use crate::errors::{ConfigError, ProjectionError, VectorKind};
pub use crate::presets;
pub use crate::projection::{
    ModelConfig, ProjectionBuilder, ProjectionMatrix, Relation, RelationConfig, StepRecord,
    Trajectory,
};
