// src/model/cost.rs

use crate::error::ParameterError;

/// The single-item replenishment cost model.
///
/// Holds the five problem parameters and evaluates the total annual cost of
/// ordering a quantity `q` each cycle:
///
/// Formula: Cost(q) = (D / q) * S + (q / 2) * H
///
/// The first term is ordering cost (D/q orders per year at S each), the
/// second is holding cost (average on-hand stock of q/2 at H per unit).
/// Quantities below the safety-stock floor or above the storage capacity are
/// infeasible and cost positive infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Annual demand (D).
    pub annual_demand: f64,
    /// Fixed cost per order placed (S).
    pub order_cost: f64,
    /// Holding cost per unit per year (H).
    pub holding_cost: f64,
    /// Maximum storage capacity (C), the upper feasibility bound.
    pub capacity: f64,
    /// Safety-stock floor (Sseg), the lower feasibility bound.
    pub safety_stock: f64,
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    // NaN fails this comparison too, so non-finite garbage is rejected here.
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}

impl CostModel {
    /// Validates and builds a cost model.
    ///
    /// # Arguments
    /// * `annual_demand` - Units demanded per year, must be positive.
    /// * `order_cost` - Cost of placing one order, must be positive.
    /// * `holding_cost` - Cost of holding one unit for a year, must be positive.
    /// * `capacity` - Storage ceiling, must be positive.
    /// * `safety_stock` - Stock floor, must be non-negative and must not
    ///   exceed `capacity`. `safety_stock == capacity` is legal: the feasible
    ///   interval collapses to a single point.
    pub fn new(
        annual_demand: f64,
        order_cost: f64,
        holding_cost: f64,
        capacity: f64,
        safety_stock: f64,
    ) -> Result<Self, ParameterError> {
        require_positive("annual demand", annual_demand)?;
        require_positive("order cost", order_cost)?;
        require_positive("holding cost", holding_cost)?;
        require_positive("capacity", capacity)?;

        if !(safety_stock >= 0.0) || !safety_stock.is_finite() {
            return Err(ParameterError::InvalidSafetyStock(safety_stock));
        }
        if safety_stock > capacity {
            return Err(ParameterError::EmptyFeasibleInterval {
                safety_stock,
                capacity,
            });
        }

        Ok(Self {
            annual_demand,
            order_cost,
            holding_cost,
            capacity,
            safety_stock,
        })
    }

    /// Total annual cost of order quantity `q`, or infinity if `q` is
    /// infeasible.
    ///
    /// The barrier is hard: an infeasible point gets no gradient toward the
    /// interval, only the swarm's velocity terms pull it back. `q <= 0` is
    /// always infeasible, which also guards the division when the safety
    /// stock is zero.
    pub fn total_cost(&self, q: f64) -> f64 {
        if q <= 0.0 || q < self.safety_stock || q > self.capacity {
            return f64::INFINITY;
        }
        (self.annual_demand / q) * self.order_cost + (q / 2.0) * self.holding_cost
    }

    /// The classic closed-form Economic Order Quantity, sqrt(2DS/H).
    ///
    /// Ignores the capacity and safety-stock bounds, so it may fall outside
    /// the feasible interval; used as a printed reference next to the swarm's
    /// answer.
    pub fn unconstrained_eoq(&self) -> f64 {
        (2.0 * self.annual_demand * self.order_cost / self.holding_cost).sqrt()
    }

    /// Samples the cost curve over the feasible quantities.
    ///
    /// Sweeps `samples` evenly spaced points from `max(1, safety_stock)` to
    /// `capacity` and pairs each quantity with its total cost. This is the
    /// curve a caller plots to eyeball where the swarm's answer sits.
    pub fn cost_curve(&self, samples: usize) -> Vec<(f64, f64)> {
        let lo = self.safety_stock.max(1.0);
        let hi = self.capacity;
        if samples == 0 || hi < lo {
            return Vec::new();
        }
        if samples == 1 {
            return vec![(lo, self.total_cost(lo))];
        }

        let step = (hi - lo) / (samples - 1) as f64;
        (0..samples)
            .map(|i| {
                // Pin the endpoint so rounding never pushes it past capacity.
                let q = if i == samples - 1 { hi } else { lo + step * i as f64 };
                (q, self.total_cost(q))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CostModel {
        CostModel::new(1000.0, 50.0, 2.0, 200.0, 10.0).unwrap()
    }

    #[test]
    fn cost_matches_formula_inside_bounds() {
        let m = model();
        // (1000/100)*50 + (100/2)*2 = 500 + 100
        assert_eq!(m.total_cost(100.0), 600.0);
        // Bounds themselves are feasible (closed interval).
        assert_eq!(m.total_cost(10.0), (1000.0 / 10.0) * 50.0 + 10.0);
        assert_eq!(m.total_cost(200.0), (1000.0 / 200.0) * 50.0 + 200.0);
    }

    #[test]
    fn cost_is_infinite_outside_bounds() {
        let m = model();
        assert!(m.total_cost(9.999).is_infinite());
        assert!(m.total_cost(200.001).is_infinite());
        assert!(m.total_cost(-5.0).is_infinite());
    }

    #[test]
    fn zero_quantity_is_infeasible_even_with_zero_safety_stock() {
        let m = CostModel::new(1000.0, 50.0, 2.0, 200.0, 0.0).unwrap();
        assert!(m.total_cost(0.0).is_infinite());
        assert!(m.total_cost(0.5).is_finite());
    }

    #[test]
    fn eoq_reference_value() {
        // sqrt(2*1000*50/2) = sqrt(50000)
        assert!((model().unconstrained_eoq() - 50_000_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(CostModel::new(0.0, 50.0, 2.0, 200.0, 10.0).is_err());
        assert!(CostModel::new(1000.0, -1.0, 2.0, 200.0, 10.0).is_err());
        assert!(CostModel::new(1000.0, 50.0, f64::NAN, 200.0, 10.0).is_err());
        assert!(CostModel::new(1000.0, 50.0, 2.0, 200.0, -1.0).is_err());
        assert_eq!(
            CostModel::new(1000.0, 50.0, 2.0, 200.0, 250.0),
            Err(ParameterError::EmptyFeasibleInterval {
                safety_stock: 250.0,
                capacity: 200.0
            })
        );
    }

    #[test]
    fn degenerate_interval_is_allowed() {
        let m = CostModel::new(1000.0, 50.0, 2.0, 200.0, 200.0).unwrap();
        assert!(m.total_cost(200.0).is_finite());
        assert!(m.total_cost(199.9).is_infinite());
    }

    #[test]
    fn cost_curve_spans_feasible_interval() {
        let curve = model().cost_curve(1000);
        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.first().unwrap().0, 10.0);
        assert!((curve.last().unwrap().0 - 200.0).abs() < 1e-9);
        assert!(curve.iter().all(|(_, c)| c.is_finite()));
    }
}
