//! Per-node analytic trip splitting.
//!
//! # Algorithm
//!
//! Each gold node is served on its own by `k` identical depot round trips,
//! carrying `gold / k` on the way back. With `d` the depot distance, the
//! node's contribution is approximated by
//!
//! ```text
//! cost(k) = k · (2d + (alpha · d · gold / k)^beta)
//! ```
//!
//! `k` is scanned upward from 1. Past `split_patience_after` trips the scan
//! stops at the first value that does not improve on the best so far, so the
//! result is the first local minimum beyond that point rather than a proven
//! global one.
//!
//! # Complexity
//!
//! O(n · search_limit) plus one single-source shortest-path query.

use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::error::RoutingError;
use crate::evaluation::CostModel;
use crate::expansion::densify;
use crate::graph::{GraphService, DEPOT};
use crate::models::{Problem, Stop};

/// Chosen trip count for one node and its approximated cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitChoice {
    /// Number of round trips.
    pub trips: usize,
    /// `cost(trips)` as defined in the module docs.
    pub cost: f64,
}

/// Searches the trip count for a node holding `gold` at depot distance `distance`.
///
/// Scans `k` in `1..search_limit`; once `k > patience_after`, the first
/// non-improving `k` ends the scan.
///
/// # Examples
///
/// ```
/// use u_collect::evaluation::CostModel;
/// use u_collect::split::best_split_count;
///
/// // Linear penalty: one trip is always best.
/// let linear = best_split_count(10.0, 5.0, &CostModel::new(1.0, 1.0), 500, 10);
/// assert_eq!(linear.trips, 1);
///
/// // Quadratic penalty: many light trips win.
/// let quadratic = best_split_count(10.0, 5.0, &CostModel::new(1.0, 2.0), 500, 10);
/// assert_eq!(quadratic.trips, 16);
/// ```
pub fn best_split_count(
    gold: f64,
    distance: f64,
    model: &CostModel,
    search_limit: usize,
    patience_after: usize,
) -> SplitChoice {
    let mut best = SplitChoice {
        trips: 1,
        cost: f64::INFINITY,
    };

    for k in 1..search_limit {
        let chunk = gold / k as f64;
        let cost = k as f64 * (2.0 * distance + model.penalty(distance, chunk));
        if cost < best.cost {
            best = SplitChoice { trips: k, cost };
        } else if k > patience_after {
            break;
        }
    }

    best
}

/// Builds the logical path of per-node round trips.
///
/// `depot_distances[n]` is the shortest distance from the depot to node `n`.
/// Nodes are served in increasing id order; nodes at or below
/// `config.gold_epsilon` or unreachable from the depot are skipped. The path
/// always ends at the depot.
pub fn plan_round_trips<G: GraphService>(
    problem: &Problem<G>,
    depot_distances: &[f64],
    config: &SolverConfig,
) -> Vec<Stop> {
    let model = problem.cost_model();
    let mut logical = Vec::new();

    for node in problem.graph().nodes().filter(|&n| n != DEPOT) {
        let gold = problem.gold(node);
        if gold <= config.gold_epsilon {
            continue;
        }
        let distance = match depot_distances.get(node) {
            Some(&d) if d.is_finite() => d,
            _ => {
                warn!(node, gold, "node unreachable from depot, skipping");
                continue;
            }
        };

        let choice = best_split_count(
            gold,
            distance,
            &model,
            config.split_search_limit,
            config.split_patience_after,
        );
        debug!(
            node,
            gold,
            distance,
            trips = choice.trips,
            cost = choice.cost,
            "split"
        );

        let chunk = gold / choice.trips as f64;
        for _ in 0..choice.trips {
            logical.push(Stop::new(node, chunk));
            logical.push(Stop::depot());
        }
    }

    if logical.last().map_or(true, |s| !s.is_depot()) {
        logical.push(Stop::depot());
    }
    logical
}

/// Solves a problem with the analytic split strategy.
///
/// Returns a physical path. If shortest distances from the depot cannot be
/// computed at all, the trivial path `[(depot, 0)]` is returned instead.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::models::{Problem, Stop};
/// use u_collect::split::analytic_split;
/// use u_collect::SolverConfig;
///
/// let mut graph = WeightedGraph::with_gold(vec![0.0, 4.0]).unwrap();
/// graph.add_edge(0, 1, 1.0).unwrap();
/// let problem = Problem::new(graph, 1.0, 1.0).unwrap();
///
/// let path = analytic_split(&problem, &SolverConfig::default()).unwrap();
/// assert_eq!(path, vec![Stop::new(1, 4.0), Stop::depot()]);
/// ```
pub fn analytic_split<G: GraphService>(
    problem: &Problem<G>,
    config: &SolverConfig,
) -> Result<Vec<Stop>, RoutingError> {
    config.validate()?;

    let distances = match problem.graph().shortest_path_lengths(DEPOT) {
        Ok(d) => d,
        Err(err) => {
            warn!(%err, "no shortest paths from depot, returning trivial route");
            return Ok(vec![Stop::depot()]);
        }
    };

    let logical = plan_round_trips(problem, &distances, config);
    densify(&logical, problem.graph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::verify_path;
    use crate::graph::WeightedGraph;

    #[test]
    fn test_higher_beta_never_fewer_trips() {
        let linear = best_split_count(10.0, 5.0, &CostModel::new(1.0, 1.0), 500, 10);
        let quadratic = best_split_count(10.0, 5.0, &CostModel::new(1.0, 2.0), 500, 10);
        assert_eq!(linear.trips, 1);
        assert!(quadratic.trips >= linear.trips);
        // 10k + 2500/k is minimized at k = 16 among integers
        assert_eq!(quadratic.trips, 16);
        assert!((quadratic.cost - 316.25).abs() < 1e-9);
    }

    #[test]
    fn test_split_count_respects_search_limit() {
        let choice = best_split_count(1e6, 5.0, &CostModel::new(1.0, 3.0), 4, 10);
        assert_eq!(choice.trips, 3);
    }

    #[test]
    fn test_zero_distance_single_trip() {
        let choice = best_split_count(10.0, 0.0, &CostModel::new(1.0, 2.0), 500, 10);
        assert_eq!(choice.trips, 1);
        assert_eq!(choice.cost, 0.0);
    }

    #[test]
    fn test_round_trips_per_node() {
        // 0 —1— 1 —1— 2, gold 2 at node 1 and 10 at node 2
        let mut g = WeightedGraph::with_gold(vec![0.0, 2.0, 10.0]).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        let p = Problem::new(g, 1.0, 2.0).unwrap();
        let d = p.graph().shortest_path_lengths(DEPOT).unwrap();

        let logical = plan_round_trips(&p, &d, &SolverConfig::default());
        let node1: Vec<_> = logical.iter().filter(|s| s.node == 1).collect();
        let node2: Vec<_> = logical.iter().filter(|s| s.node == 2).collect();

        let expected1 = best_split_count(2.0, 1.0, &p.cost_model(), 500, 10).trips;
        let expected2 = best_split_count(10.0, 2.0, &p.cost_model(), 500, 10).trips;
        assert_eq!(node1.len(), expected1);
        assert_eq!(node2.len(), expected2);
        assert!(logical.last().unwrap().is_depot());
        // every pickup is followed by a depot return
        for pair in logical.chunks(2) {
            assert!(!pair[0].is_depot());
            assert!(pair[1].is_depot());
        }
    }

    #[test]
    fn test_epsilon_gold_skipped() {
        let mut g = WeightedGraph::with_gold(vec![0.0, 1e-12]).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        let p = Problem::new(g, 1.0, 2.0).unwrap();
        let d = p.graph().shortest_path_lengths(DEPOT).unwrap();
        assert_eq!(
            plan_round_trips(&p, &d, &SolverConfig::default()),
            vec![Stop::depot()]
        );
    }

    #[test]
    fn test_no_gold_yields_empty_physical_path() {
        let mut g = WeightedGraph::new(2);
        g.add_edge(0, 1, 1.0).unwrap();
        let p = Problem::new(g, 1.0, 2.0).unwrap();
        assert!(analytic_split(&p, &SolverConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_depot_falls_back() {
        let p = Problem::new(WeightedGraph::new(0), 1.0, 2.0).unwrap();
        assert_eq!(
            analytic_split(&p, &SolverConfig::default()).unwrap(),
            vec![Stop::depot()]
        );
    }

    #[test]
    fn test_unreachable_node_skipped() {
        let mut g = WeightedGraph::with_gold(vec![0.0, 3.0, 5.0]).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        let p = Problem::new(g, 1.0, 2.0).unwrap();
        let path = analytic_split(&p, &SolverConfig::default()).unwrap();
        assert!(path.iter().all(|s| s.node != 2));
    }

    #[test]
    fn test_physical_path_is_valid() {
        let mut g = WeightedGraph::with_gold(vec![0.0, 3.0, 0.0, 8.0]).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.5).unwrap();
        g.add_edge(0, 2, 2.5).unwrap();
        let p = Problem::new(g, 0.5, 1.8).unwrap();
        let path = analytic_split(&p, &SolverConfig::default()).unwrap();
        verify_path(p.graph(), &path).unwrap();
    }
}
