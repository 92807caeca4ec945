//! Shared default values for command-line arguments.

pub const CONFIG_FILE: &str = "model.json";
pub const PRESET: &str = "leslie";
pub const DEMO_STEPS: usize = 3;

/// Largest step count `run` and `demo` will project; every step is kept in memory.
pub const MAX_STEPS: usize = 1_000_000;
