//! Load-penalized traversal cost.

use serde::{Deserialize, Serialize};

/// Cost of moving a distance while carrying a load.
///
/// ```text
/// cost(d, L) = d + (alpha · d · L)^beta
/// ```
///
/// The penalty term is zero whenever `d` or `L` is zero, for every `beta > 0`.
///
/// # Examples
///
/// ```
/// use u_collect::evaluation::CostModel;
///
/// let model = CostModel::new(1.0, 2.0);
/// assert_eq!(model.edge_cost(3.0, 0.0), 3.0);
/// // 3 + (1 · 3 · 2)^2 = 39
/// assert!((model.edge_cost(3.0, 2.0) - 39.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    alpha: f64,
    beta: f64,
}

impl CostModel {
    /// Creates a cost model. Callers validate `alpha, beta > 0`.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Distance-to-penalty scale.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Load exponent.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Penalty term `(alpha · distance · load)^beta`.
    pub fn penalty(&self, distance: f64, load: f64) -> f64 {
        let base = self.alpha * distance * load;
        if base <= 0.0 {
            0.0
        } else {
            base.powf(self.beta)
        }
    }

    /// Cost of one edge (or one shortest-path hop) at the given load.
    pub fn edge_cost(&self, distance: f64, load: f64) -> f64 {
        distance + self.penalty(distance, load)
    }

    /// Cost of a sequence of edge lengths traversed at a constant load.
    pub fn legs_cost<I>(&self, distances: I, load: f64) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        distances
            .into_iter()
            .map(|d| self.edge_cost(d, load))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_load_is_plain_distance() {
        let m = CostModel::new(2.0, 0.5);
        assert_eq!(m.edge_cost(7.5, 0.0), 7.5);
        assert_eq!(m.edge_cost(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_known_value() {
        let m = CostModel::new(0.5, 1.0);
        // 4 + (0.5 · 4 · 3)^1 = 10
        assert!((m.edge_cost(4.0, 3.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_legs_cost() {
        let m = CostModel::new(1.0, 2.0);
        // (1 + 1) + (2 + 4)
        let c = m.legs_cost([1.0, 2.0], 1.0);
        assert!((c - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_beta_at_zero_load() {
        let m = CostModel::new(1.0, 0.3);
        assert!(m.penalty(5.0, 0.0).is_finite());
        assert_eq!(m.penalty(5.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_zero_load_no_penalty(
            d in 0.0f64..1e4,
            alpha in 0.01f64..10.0,
            beta in 0.1f64..4.0,
        ) {
            let m = CostModel::new(alpha, beta);
            prop_assert_eq!(m.edge_cost(d, 0.0), d);
        }

        #[test]
        fn prop_non_decreasing_in_load(
            d in 0.0f64..1e3,
            l1 in 0.0f64..1e3,
            extra in 0.0f64..1e3,
            alpha in 0.01f64..10.0,
            beta in 0.1f64..4.0,
        ) {
            let m = CostModel::new(alpha, beta);
            prop_assert!(m.edge_cost(d, l1) <= m.edge_cost(d, l1 + extra));
        }
    }
}
