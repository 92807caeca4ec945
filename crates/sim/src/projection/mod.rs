//! Projection matrices and population stepping.
//!
//! - `ProjectionMatrix`: the coefficient matrix and current population.
//! - `ProjectionBuilder`: fluent builder that validates all inputs at once.
//! - `ModelConfig`: serde description of a model, loadable from JSON.
//! - `Trajectory`: recorded population states from a multi-step projection.

pub mod builder;
pub mod config;
pub mod matrix;
pub mod trajectory;

pub use builder::{ProjectionBuilder, Relation};
pub use config::{ModelConfig, RelationConfig};
pub use matrix::ProjectionMatrix;
pub use trajectory::{StepRecord, Trajectory};
