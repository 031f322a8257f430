mod error;
mod io;
mod model;
mod optimizer;

use crate::io::reporting;
use crate::model::cost::CostModel;
use crate::optimizer::config::PsoConfig;
use crate::optimizer::engine::SwarmOptimizer;
use std::process;

fn main() {
    println!("=== Order-Quantity Optimization with PSO ===");

    // 1. DEFINE THE PROBLEM
    // Scenario A: Capacity-constrained warehouse.
    // The unconstrained EOQ (~223.6) exceeds the 200-unit capacity, so the
    // swarm should settle at the capacity bound.
    let model = match CostModel::new(
        1000.0, // D: annual demand
        50.0,   // S: cost per order
        2.0,    // H: holding cost per unit per year
        200.0,  // C: storage capacity
        10.0,   // Sseg: safety stock
    ) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Invalid problem parameters: {e}");
            process::exit(1);
        }
    };

    // Scenario B: Interior optimum.
    // With H = 50 the EOQ (~44.7) sits well inside [1, 200].
    // let model = CostModel::new(1000.0, 50.0, 50.0, 200.0, 1.0).unwrap();

    // 2. CONFIGURE THE SWARM
    let config = PsoConfig {
        population_size: 100,
        iteration_count: 100,
        seed: Some(42), // fixed seed so repeated runs match
        ..PsoConfig::default()
    };

    // 3. RUN THE OPTIMIZER
    let pso = match SwarmOptimizer::new(model, config) {
        Ok(pso) => pso,
        Err(e) => {
            eprintln!("Invalid tuning parameters: {e}");
            process::exit(1);
        }
    };
    println!(
        "Running {} particles for {} iterations...",
        pso.config().population_size,
        pso.config().iteration_count
    );
    let result = pso.run();

    // 4. PRINT RESULTS
    println!("\n=== Best solution found ===");
    println!("Q* = {:.2} units per order", result.best_quantity);
    println!("Total annual cost = ${:.2}", result.best_cost);
    println!(
        "Unconstrained EOQ reference = {:.2} (feasible range [{}, {}])",
        pso.model().unconstrained_eoq(),
        pso.model().safety_stock,
        pso.model().capacity
    );

    // 5. EXPORT HISTORIES
    match reporting::write_convergence_log("convergence.csv", &result) {
        Ok(_) => println!("Convergence history written to ./convergence.csv"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }
    match reporting::write_cost_curve("cost_curve.csv", pso.model(), 1000) {
        Ok(_) => println!("Cost curve written to ./cost_curve.csv"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }

    println!("\nOptimization complete.");
}
