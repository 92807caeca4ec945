//! # Simulation Crate
//!
//! The `sim` crate provides age- and stage-structured population projection.
//! A [`ProjectionMatrix`](projection::ProjectionMatrix) combines fecundity,
//! survival and recurrence rates into a single coefficient matrix and steps
//! a population vector forward one discrete time step at a time.

pub mod errors;
pub mod prelude;
pub mod presets;
pub mod projection;

pub use errors::{ConfigError, ProjectionError, VectorKind};
pub use projection::{ModelConfig, ProjectionBuilder, ProjectionMatrix, Trajectory};
