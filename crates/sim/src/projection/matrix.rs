//! The projection matrix and its population vector.
//!
//! A [`ProjectionMatrix`] holds an N×N coefficient matrix indexed
//! `(to_stage, from_stage)` together with the current population vector.
//! Each call to [`ProjectionMatrix::step_forward`] replaces the population
//! with the matrix-vector product, advancing the model one time step.
//!
//! Leslie (age-structured) models only use the fecundity row and the
//! survival sub-diagonal. Lefkovitch (stage-structured) models also fill the
//! main diagonal with the fraction of individuals that remain in a stage,
//! and may use [`ProjectionMatrix::set_cell`] for transitions that skip
//! stages.

use crate::errors::{ProjectionError, VectorKind};
use crate::projection::trajectory::{StepRecord, Trajectory};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

/// Upper bound on the records reserved up front by [`ProjectionMatrix::project`].
const MAX_PRESIZED_RECORDS: usize = 4096;

fn presized_records(steps: usize) -> usize {
    steps.saturating_add(1).min(MAX_PRESIZED_RECORDS)
}

/// Stage-structured projection model.
///
/// # Examples
///
/// ```
/// use stagepop_sim::projection::ProjectionMatrix;
///
/// let mut model = ProjectionMatrix::new(4).unwrap();
/// model.set_fecundity_row(&[0.5, 2.4, 1.0, 0.0]).unwrap();
/// model.set_survival_subdiagonal(&[0.5, 0.8, 0.5]).unwrap();
/// model.set_population(&[20.0, 10.0, 40.0, 30.0]).unwrap();
///
/// model.step_forward().unwrap();
/// assert_eq!(model.population(), &[74.0, 10.0, 8.0, 20.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMatrix {
    /// Number of ages or stages
    stage_count: usize,
    /// Coefficients, row = destination stage, column = source stage
    matrix: DMatrix<f64>,
    /// Current population, `None` until set
    population: Option<DVector<f64>>,
    /// Population replaced by the most recent step
    previous: Option<DVector<f64>>,
    /// Number of steps taken
    step_count: usize,
    // Last accepted builder inputs, kept for inspection only
    fecundity: Vec<f64>,
    survival: Vec<f64>,
    recurrence: Vec<f64>,
}

impl ProjectionMatrix {
    /// Create an all-zero matrix for `stage_count` stages.
    ///
    /// Returns [`ProjectionError::InvalidStageCount`] if `stage_count` is zero.
    pub fn new(stage_count: usize) -> Result<Self, ProjectionError> {
        if stage_count == 0 {
            warn!(stage_count, "rejected projection matrix with no stages");
            return Err(ProjectionError::InvalidStageCount(stage_count));
        }

        Ok(Self {
            stage_count,
            matrix: DMatrix::zeros(stage_count, stage_count),
            population: None,
            previous: None,
            step_count: 0,
            fecundity: Vec::new(),
            survival: Vec::new(),
            recurrence: Vec::new(),
        })
    }

    /// Number of ages or stages.
    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    /// Number of steps taken so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The full coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Coefficient for the transition from `from_stage` into `to_stage`.
    pub fn get(&self, to_stage: usize, from_stage: usize) -> Option<f64> {
        self.matrix.get((to_stage, from_stage)).copied()
    }

    /// Matrix rows as owned vectors, row `i` producing stage `i`.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Current population vector (empty before [`Self::set_population`]).
    pub fn population(&self) -> &[f64] {
        self.population
            .as_ref()
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    /// Population vector in place before the most recent step.
    pub fn previous_population(&self) -> Option<&[f64]> {
        self.previous.as_ref().map(|p| p.as_slice())
    }

    /// Last accepted fecundity row.
    pub fn fecundity(&self) -> &[f64] {
        &self.fecundity
    }

    /// Last accepted survival sub-diagonal.
    pub fn survival(&self) -> &[f64] {
        &self.survival
    }

    /// Last accepted recurrence diagonal.
    pub fn recurrence(&self) -> &[f64] {
        &self.recurrence
    }

    /// Set row 0 of the matrix: offspring entering stage 0 per individual
    /// of each stage.
    ///
    /// `fecundity` must have exactly `stage_count` entries.
    pub fn set_fecundity_row(&mut self, fecundity: &[f64]) -> Result<(), ProjectionError> {
        self.check_len(VectorKind::Fecundity, self.stage_count, fecundity.len())?;

        for (from, &value) in fecundity.iter().enumerate() {
            self.matrix[(0, from)] = value;
        }
        self.fecundity = fecundity.to_vec();
        Ok(())
    }

    /// Set the sub-diagonal `(i, i - 1)`: the fraction of stage `i - 1`
    /// that advances into stage `i` each step.
    ///
    /// `survival` must have exactly `stage_count - 1` entries.
    pub fn set_survival_subdiagonal(&mut self, survival: &[f64]) -> Result<(), ProjectionError> {
        self.check_len(VectorKind::Survival, self.stage_count - 1, survival.len())?;

        for (i, &value) in survival.iter().enumerate() {
            self.matrix[(i + 1, i)] = value;
        }
        self.survival = survival.to_vec();
        Ok(())
    }

    /// Set the diagonal `(i, i)` for `i >= 1`: the fraction of stage `i`
    /// that remains in stage `i` each step. Stage 0 is left untouched.
    ///
    /// `recurrence` must have exactly `stage_count - 1` entries.
    pub fn set_recurrence_diagonal(&mut self, recurrence: &[f64]) -> Result<(), ProjectionError> {
        self.check_len(VectorKind::Recurrence, self.stage_count - 1, recurrence.len())?;

        for (i, &value) in recurrence.iter().enumerate() {
            self.matrix[(i + 1, i + 1)] = value;
        }
        self.recurrence = recurrence.to_vec();
        Ok(())
    }

    /// Set one transition coefficient from `from_stage` into `to_stage`,
    /// overriding whatever the fecundity, survival or recurrence helpers
    /// put there.
    pub fn set_cell(
        &mut self,
        from_stage: usize,
        to_stage: usize,
        value: f64,
    ) -> Result<(), ProjectionError> {
        if from_stage >= self.stage_count || to_stage >= self.stage_count {
            warn!(
                from = from_stage,
                to = to_stage,
                stage_count = self.stage_count,
                "invalid stage values"
            );
            return Err(ProjectionError::StageOutOfRange {
                from: from_stage,
                to: to_stage,
                stage_count: self.stage_count,
            });
        }

        self.matrix[(to_stage, from_stage)] = value;
        Ok(())
    }

    /// Replace the population vector.
    ///
    /// `population` must have exactly `stage_count` entries.
    pub fn set_population(&mut self, population: &[f64]) -> Result<(), ProjectionError> {
        self.check_len(VectorKind::Population, self.stage_count, population.len())?;

        self.population = Some(DVector::from_vec(population.to_vec()));
        Ok(())
    }

    /// Advance the population by one time step.
    ///
    /// Returns [`ProjectionError::PopulationNotSet`] if no population has
    /// been supplied yet; the step counter is not advanced in that case.
    pub fn step_forward(&mut self) -> Result<(), ProjectionError> {
        let Some(current) = self.population.take() else {
            warn!(step = self.step_count, "cannot step without a population vector");
            return Err(ProjectionError::PopulationNotSet);
        };

        let next = &self.matrix * &current;
        if current.iter().all(|v| v.is_finite()) && !next.iter().all(|v| v.is_finite()) {
            warn!(
                step = self.step_count + 1,
                "population is no longer finite (overflow or NaN coefficients)"
            );
        }
        self.previous = Some(current);
        self.population = Some(next);
        self.step_count += 1;

        debug!(
            step = self.step_count,
            total = self.total_population(),
            "projected population"
        );
        Ok(())
    }

    /// Sum of the current population vector, 0.0 before a population is set.
    pub fn total_population(&self) -> f64 {
        self.population.as_ref().map(|p| p.sum()).unwrap_or(0.0)
    }

    /// Step `steps` times, recording the starting state and every state
    /// after it.
    ///
    /// The returned trajectory holds `steps + 1` records. Fails before any
    /// stepping if no population has been set.
    pub fn project(&mut self, steps: usize) -> Result<Trajectory, ProjectionError> {
        if self.population.is_none() {
            warn!(steps, "cannot project without a population vector");
            return Err(ProjectionError::PopulationNotSet);
        }

        let mut trajectory = Trajectory::with_capacity(presized_records(steps));
        trajectory.push(self.snapshot());
        for _ in 0..steps {
            self.step_forward()?;
            trajectory.push(self.snapshot());
        }
        Ok(trajectory)
    }

    fn snapshot(&self) -> StepRecord {
        StepRecord::new(self.step_count, self.population().to_vec())
    }

    fn check_len(
        &self,
        target: VectorKind,
        expected: usize,
        actual: usize,
    ) -> Result<(), ProjectionError> {
        if expected == actual {
            return Ok(());
        }
        warn!(vector = %target, expected, actual, "mismatch in size");
        Err(ProjectionError::DimensionMismatch {
            target,
            expected,
            actual,
        })
    }
}
