//! Builder pattern for creating projection matrices.
//!
//! Collects the fecundity row, survival and recurrence vectors, single-cell
//! relations and the starting population, then validates them all in
//! [`ProjectionBuilder::build`].

use crate::errors::ProjectionError;
use crate::projection::ProjectionMatrix;

/// A single-cell transition coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relation {
    pub from: usize,
    pub to: usize,
    pub value: f64,
}

/// Builder for constructing [`ProjectionMatrix`] instances with a fluent API.
///
/// Inputs are applied in a fixed order regardless of call order: fecundity,
/// survival, recurrence, relations (in the order added), then population.
/// Relations therefore always override cells set by the helpers.
///
/// # Examples
///
/// ```
/// use stagepop_sim::projection::ProjectionBuilder;
///
/// let model = ProjectionBuilder::new(3)
///     .fecundity([0.0, 52.0, 279.5])
///     .survival([0.024, 0.08])
///     .recurrence([0.25, 0.43])
///     .population([70.0, 20.0, 10.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(model.get(1, 1), Some(0.25));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectionBuilder {
    stages: usize,
    fecundity: Option<Vec<f64>>,
    survival: Option<Vec<f64>>,
    recurrence: Option<Vec<f64>>,
    relations: Vec<Relation>,
    population: Option<Vec<f64>>,
}

impl ProjectionBuilder {
    /// Start a builder for a model with `stages` ages or stages.
    pub fn new(stages: usize) -> Self {
        Self {
            stages,
            ..Default::default()
        }
    }

    /// Set the fecundity row.
    pub fn fecundity(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.fecundity = Some(values.into());
        self
    }

    /// Set the survival sub-diagonal.
    pub fn survival(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.survival = Some(values.into());
        self
    }

    /// Set the recurrence diagonal.
    pub fn recurrence(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.recurrence = Some(values.into());
        self
    }

    /// Add a transition coefficient from `from` into `to`.
    pub fn relation(mut self, from: usize, to: usize, value: f64) -> Self {
        self.relations.push(Relation { from, to, value });
        self
    }

    /// Set the starting population.
    pub fn population(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.population = Some(values.into());
        self
    }

    /// Build the matrix, failing on the first invalid input.
    pub fn build(self) -> Result<ProjectionMatrix, ProjectionError> {
        let mut matrix = ProjectionMatrix::new(self.stages)?;

        if let Some(fecundity) = &self.fecundity {
            matrix.set_fecundity_row(fecundity)?;
        }
        if let Some(survival) = &self.survival {
            matrix.set_survival_subdiagonal(survival)?;
        }
        if let Some(recurrence) = &self.recurrence {
            matrix.set_recurrence_diagonal(recurrence)?;
        }
        for relation in &self.relations {
            matrix.set_cell(relation.from, relation.to, relation.value)?;
        }
        if let Some(population) = &self.population {
            matrix.set_population(population)?;
        }

        Ok(matrix)
    }
}
