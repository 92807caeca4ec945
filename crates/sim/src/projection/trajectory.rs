//! Recorded sequences of population states.

use serde::{Deserialize, Serialize};

/// Population state after a given number of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Steps taken when this state was recorded
    pub step: usize,
    /// Population per stage
    pub population: Vec<f64>,
    /// Sum of `population`
    pub total: f64,
}

impl StepRecord {
    /// Create a record, computing the total from the population.
    pub fn new(step: usize, population: Vec<f64>) -> Self {
        let total = population.iter().sum();
        Self {
            step,
            population,
            total,
        }
    }

    /// Whether the population and total are all finite.
    pub fn is_finite(&self) -> bool {
        self.total.is_finite() && self.population.iter().all(|v| v.is_finite())
    }
}

/// Ordered population states produced by
/// [`ProjectionMatrix::project`](crate::projection::ProjectionMatrix::project).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    records: Vec<StepRecord>,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trajectory with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been pushed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether every population value and total is finite.
    ///
    /// JSON has no encoding for infinities or NaN, so a trajectory that
    /// overflowed cannot be written as JSON and read back.
    pub fn is_finite(&self) -> bool {
        self.records.iter().all(StepRecord::is_finite)
    }

    /// Totals for each record, in order.
    pub fn totals(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total).collect()
    }
}
