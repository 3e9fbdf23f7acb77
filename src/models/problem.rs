//! Collection problem instance.

use crate::error::RoutingError;
use crate::evaluation::CostModel;
use crate::graph::{GraphService, DEPOT};

/// A collection problem: a graph plus the load-penalty parameters.
///
/// `alpha` scales the load penalty, `beta` is its exponent. Both are fixed
/// for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::models::Problem;
///
/// let mut graph = WeightedGraph::with_gold(vec![7.0, 3.0]).unwrap();
/// graph.add_edge(0, 1, 2.0).unwrap();
///
/// let problem = Problem::new(graph, 1.0, 2.0).unwrap();
/// assert_eq!(problem.gold(0), 0.0); // depot never holds gold
/// assert_eq!(problem.gold(1), 3.0);
/// assert!((problem.total_gold() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Problem<G> {
    graph: G,
    alpha: f64,
    beta: f64,
}

impl<G: GraphService> Problem<G> {
    /// Creates a problem instance.
    ///
    /// Fails if `alpha` or `beta` is not a positive finite number.
    pub fn new(graph: G, alpha: f64, beta: f64) -> Result<Self, RoutingError> {
        for (name, value) in [("alpha", alpha), ("beta", beta)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RoutingError::InvalidParameter(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(Self { graph, alpha, beta })
    }

    /// The underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Distance-to-penalty scale.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Load-cost exponent.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Cost model for this instance.
    pub fn cost_model(&self) -> CostModel {
        CostModel::new(self.alpha, self.beta)
    }

    /// Gold at `node`; the depot always reports zero.
    pub fn gold(&self, node: usize) -> f64 {
        if node == DEPOT {
            0.0
        } else {
            self.graph.gold(node)
        }
    }

    /// Gold per node id, depot zeroed.
    pub fn gold_table(&self) -> Vec<f64> {
        self.graph.nodes().map(|n| self.gold(n)).collect()
    }

    /// Sum of all positive gold.
    pub fn total_gold(&self) -> f64 {
        self.graph
            .nodes()
            .map(|n| self.gold(n))
            .filter(|&g| g > 0.0)
            .sum()
    }
}
