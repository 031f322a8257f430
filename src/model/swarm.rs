// src/model/swarm.rs

use crate::model::cost::CostModel;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// The swarm as parallel flat arrays indexed by particle id.
///
/// Particles have no behavior of their own, so there is no per-particle
/// struct: position, velocity and personal best live in three vectors of the
/// same length, plus one scalar for the swarm-wide best.
///
/// `personal_best` and `global_best` hold positions, never fitness values;
/// their costs are recomputed through the cost model whenever a comparison
/// needs them.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
    pub personal_best: Vec<f64>,
    pub global_best: f64,
}

impl Swarm {
    /// Seeds a fresh swarm for one optimization run.
    ///
    /// Positions are drawn i.i.d. uniform from the closed feasible interval
    /// `[safety_stock, capacity]`, so every particle starts feasible.
    /// Velocities start at exactly zero and each personal best starts at the
    /// particle's own position. The global best is the cheapest initial
    /// position; ties keep the earliest particle.
    pub fn initialize<R: Rng>(model: &CostModel, population_size: usize, rng: &mut R) -> Self {
        let between = Uniform::new_inclusive(model.safety_stock, model.capacity);

        let positions: Vec<f64> = (0..population_size)
            .map(|_| between.sample(rng))
            .collect();
        let velocities = vec![0.0; population_size];
        let personal_best = positions.clone();

        let mut global_best = positions[0];
        for &p in &positions[1..] {
            if model.total_cost(p) < model.total_cost(global_best) {
                global_best = p;
            }
        }

        Self {
            positions,
            velocities,
            personal_best,
            global_best,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Costs of all current positions, in particle order. Pure: reads the
    /// model and the positions, mutates nothing.
    pub fn evaluate(&self, model: &CostModel) -> Vec<f64> {
        self.positions.iter().map(|&q| model.total_cost(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn model() -> CostModel {
        CostModel::new(1000.0, 50.0, 2.0, 200.0, 10.0).unwrap()
    }

    #[test]
    fn initial_particles_are_feasible_and_at_rest() {
        let m = model();
        let mut rng = StdRng::seed_from_u64(7);
        let swarm = Swarm::initialize(&m, 50, &mut rng);

        assert_eq!(swarm.len(), 50);
        assert!(swarm
            .positions
            .iter()
            .all(|&q| (10.0..=200.0).contains(&q)));
        assert!(swarm.velocities.iter().all(|&v| v == 0.0));
        assert_eq!(swarm.personal_best, swarm.positions);
    }

    #[test]
    fn global_best_is_cheapest_initial_position() {
        let m = model();
        let mut rng = StdRng::seed_from_u64(7);
        let swarm = Swarm::initialize(&m, 50, &mut rng);

        let best_cost = m.total_cost(swarm.global_best);
        for &q in &swarm.positions {
            assert!(best_cost <= m.total_cost(q));
        }
    }

    #[test]
    fn degenerate_interval_collapses_to_single_point() {
        let m = CostModel::new(1000.0, 50.0, 2.0, 200.0, 200.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let swarm = Swarm::initialize(&m, 10, &mut rng);
        assert!(swarm.positions.iter().all(|&q| q == 200.0));
        assert_eq!(swarm.global_best, 200.0);
    }

    #[test]
    fn evaluation_applies_the_barrier() {
        let m = model();
        let swarm = Swarm {
            positions: vec![100.0, 5.0, 300.0],
            velocities: vec![0.0; 3],
            personal_best: vec![100.0, 5.0, 300.0],
            global_best: 100.0,
        };
        let fitness = swarm.evaluate(&m);
        assert_eq!(fitness[0], 600.0);
        assert!(fitness[1].is_infinite());
        assert!(fitness[2].is_infinite());
    }
}
