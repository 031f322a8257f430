// src/optimizer/engine.rs

use crate::error::ParameterError;
use crate::model::cost::CostModel;
use crate::model::swarm::Swarm;
use crate::optimizer::config::PsoConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything one run hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The best order quantity found (Q*).
    pub best_quantity: f64,
    /// Total annual cost at `best_quantity`.
    pub best_cost: f64,
    /// Minimum fitness across the swarm at each iteration.
    pub best_history: Vec<f64>,
    /// Mean fitness across the swarm at each iteration.
    pub mean_history: Vec<f64>,
}

/// Particle Swarm Optimizer for the order-quantity problem.
///
/// Holds only the immutable inputs: the cost model and the tuning
/// configuration. All swarm state is created inside [`run`](Self::run) and
/// dropped when it returns, so one optimizer can be reused for repeated runs
/// without any cross-run contamination.
#[derive(Debug, Clone)]
pub struct SwarmOptimizer {
    model: CostModel,
    config: PsoConfig,
}

impl SwarmOptimizer {
    /// Validates the tuning parameters and builds the optimizer.
    ///
    /// The cost model validates its own parameters in [`CostModel::new`], so
    /// a constructed optimizer can never fail mid-run.
    pub fn new(model: CostModel, config: PsoConfig) -> Result<Self, ParameterError> {
        config.validate()?;
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Runs the swarm to completion and returns the result bundle.
    ///
    /// Synchronous and single-threaded: all `iteration_count` steps execute
    /// before this returns, and no partial results are visible mid-run.
    pub fn run(&self) -> RunResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let model = &self.model;
        let mut swarm = Swarm::initialize(model, self.config.population_size, &mut rng);

        let mut best_history = Vec::with_capacity(self.config.iteration_count);
        let mut mean_history = Vec::with_capacity(self.config.iteration_count);

        for _ in 0..self.config.iteration_count {
            // =============================================================
            // PHASE 1: EVALUATE
            // =============================================================
            let fitness = swarm.evaluate(model);

            best_history.push(min_of(&fitness));
            mean_history.push(mean_of(&fitness));

            // =============================================================
            // PHASE 2: UPDATE BESTS
            // Bests are stored as positions; their costs are recomputed on
            // every comparison rather than cached. The global best updates
            // sequentially within the pass, so a later particle compares
            // against an earlier particle's improvement from the same
            // iteration.
            // =============================================================
            for i in 0..swarm.len() {
                if fitness[i] < model.total_cost(swarm.personal_best[i]) {
                    swarm.personal_best[i] = swarm.positions[i];
                }
                if fitness[i] < model.total_cost(swarm.global_best) {
                    swarm.global_best = swarm.positions[i];
                }
            }

            // =============================================================
            // PHASE 3: MOVE
            // No velocity or position clamping: a particle may overshoot the
            // feasible interval, reads infinite fitness there, and is pulled
            // back by the pbest/gbest terms.
            // =============================================================
            for i in 0..swarm.len() {
                let r1: f64 = rng.gen();
                let r2: f64 = rng.gen();
                swarm.velocities[i] = self.config.inertia_weight * swarm.velocities[i]
                    + self.config.cognitive_coeff * r1 * (swarm.personal_best[i] - swarm.positions[i])
                    + self.config.social_coeff * r2 * (swarm.global_best - swarm.positions[i]);
                swarm.positions[i] += swarm.velocities[i];
            }
        }

        // Terminal pass: re-evaluate the final positions and keep the
        // cheapest one (earliest particle wins ties).
        let final_fitness = swarm.evaluate(model);
        let mut best_idx = 0;
        for i in 1..final_fitness.len() {
            if final_fitness[i] < final_fitness[best_idx] {
                best_idx = i;
            }
        }

        // The last velocity step can leave every final position slightly
        // worse than the cheapest point the swarm ever visited. That point is
        // the global best, whose cost is at or below every recorded history
        // minimum, so fall back to it when it beats the final re-scan.
        let global_best_cost = model.total_cost(swarm.global_best);
        let (best_quantity, best_cost) = if global_best_cost < final_fitness[best_idx] {
            (swarm.global_best, global_best_cost)
        } else {
            (swarm.positions[best_idx], final_fitness[best_idx])
        };

        RunResult {
            best_quantity,
            best_cost,
            best_history,
            mean_history,
        }
    }
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
