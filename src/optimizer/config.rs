// src/optimizer/config.rs

use crate::error::ParameterError;

/// Tuning knobs for the particle swarm.
///
/// The defaults (100 particles, 100 iterations, w=0.5, c1=c2=2.0) match the
/// standard textbook setup and converge quickly on this one-dimensional
/// problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsoConfig {
    pub population_size: usize,
    pub iteration_count: usize,
    /// Inertia weight (w): how much of last step's velocity carries over.
    pub inertia_weight: f64,
    /// Cognitive coefficient (c1): pull toward the particle's personal best.
    pub cognitive_coeff: f64,
    /// Social coefficient (c2): pull toward the swarm's global best.
    pub social_coeff: f64,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            iteration_count: 100,
            inertia_weight: 0.5,
            cognitive_coeff: 2.0,
            social_coeff: 2.0,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Checked before the optimizer is built, never mid-run.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.population_size == 0 {
            return Err(ParameterError::EmptyPopulation);
        }
        if self.iteration_count == 0 {
            return Err(ParameterError::ZeroIterations);
        }
        Ok(())
    }
}
