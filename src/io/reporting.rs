// src/io/reporting.rs

use crate::model::cost::CostModel;
use crate::optimizer::engine::RunResult;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

// We make these Serialize so the csv writer can emit them with headers.
#[derive(Debug, Clone, Serialize)]
struct ConvergenceRecord {
    iteration: usize,
    best_fitness: f64,
    mean_fitness: f64,
}

#[derive(Debug, Clone, Serialize)]
struct CostCurveRecord {
    quantity: f64,
    total_cost: f64,
}

/// Writes the per-iteration convergence history to a CSV file.
///
/// One row per iteration: the swarm's best and mean fitness. Plot these two
/// columns against the iteration index to see the swarm settle.
pub fn write_convergence_log(file_path: &str, result: &RunResult) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for (iteration, (&best, &mean)) in result
        .best_history
        .iter()
        .zip(result.mean_history.iter())
        .enumerate()
    {
        wtr.serialize(ConvergenceRecord {
            iteration,
            best_fitness: best,
            mean_fitness: mean,
        })?;
    }

    wtr.flush()?;

    println!(
        "Successfully exported {} iterations to '{}'",
        result.best_history.len(),
        file_path
    );
    Ok(())
}

/// Samples the model's cost curve and writes it to a CSV file.
///
/// Gives the (quantity, total cost) sweep over the feasible interval so the
/// swarm's answer can be placed on the curve it was searching.
pub fn write_cost_curve(
    file_path: &str,
    model: &CostModel,
    samples: usize,
) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for (quantity, total_cost) in model.cost_curve(samples) {
        wtr.serialize(CostCurveRecord {
            quantity,
            total_cost,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
