// src/error.rs

use thiserror::Error;

/// Validation failures raised while constructing the cost model or the
/// optimizer. Once construction succeeds, a run cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("safety stock must be a non-negative finite number, got {0}")]
    InvalidSafetyStock(f64),

    #[error("safety stock ({safety_stock}) exceeds capacity ({capacity}); the feasible interval is empty")]
    EmptyFeasibleInterval { safety_stock: f64, capacity: f64 },

    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("iteration count must be at least 1")]
    ZeroIterations,
}
