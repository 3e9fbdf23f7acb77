//! Strategy selection and the solver entry point.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SolverConfig;
use crate::error::RoutingError;
use crate::evaluation::evaluate_route_cost;
use crate::ga::memetic_search;
use crate::graph::GraphService;
use crate::models::{Problem, Stop};
use crate::split::analytic_split;

/// Available solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Population search over visit orders with greedy depot returns.
    Memetic,
    /// Independent per-node round trips with an optimized trip count.
    AnalyticSplit,
}

/// Result of [`Solver::solve_and_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Strategy that produced the path.
    pub strategy: Strategy,
    /// Physical path.
    pub path: Vec<Stop>,
    /// Cost of the path under the problem's cost model.
    pub cost: f64,
}

/// Picks a strategy from the load exponent and runs it.
///
/// Low `beta` (distance dominates) favors long multi-stop tours, so the
/// memetic search is used; high `beta` (load dominates) favors many light
/// round trips, so the analytic split is used.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::models::Problem;
/// use u_collect::{Solver, SolverConfig, Strategy};
///
/// let mut graph = WeightedGraph::with_gold(vec![0.0, 2.0, 3.0]).unwrap();
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
/// let problem = Problem::new(graph, 1.0, 2.0).unwrap();
///
/// let solver = Solver::new(SolverConfig::default().with_generations(20));
/// assert_eq!(solver.strategy_for(problem.beta()), Strategy::AnalyticSplit);
///
/// let path = solver.solve_seeded(&problem, 42).unwrap();
/// assert!(path.last().unwrap().is_depot());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Strategy used for a problem with load exponent `beta`.
    pub fn strategy_for(&self, beta: f64) -> Strategy {
        if beta <= self.config.beta_threshold {
            Strategy::Memetic
        } else {
            Strategy::AnalyticSplit
        }
    }

    /// Solves with the strategy chosen by [`strategy_for`](Self::strategy_for).
    pub fn solve<G: GraphService, R: Rng>(
        &self,
        problem: &Problem<G>,
        rng: &mut R,
    ) -> Result<Vec<Stop>, RoutingError> {
        self.solve_with(self.strategy_for(problem.beta()), problem, rng)
    }

    /// Solves with an explicit strategy.
    pub fn solve_with<G: GraphService, R: Rng>(
        &self,
        strategy: Strategy,
        problem: &Problem<G>,
        rng: &mut R,
    ) -> Result<Vec<Stop>, RoutingError> {
        self.config.validate()?;
        info!(
            ?strategy,
            alpha = problem.alpha(),
            beta = problem.beta(),
            nodes = problem.graph().node_count(),
            "solving"
        );
        match strategy {
            Strategy::Memetic => memetic_search(problem, &self.config, rng),
            Strategy::AnalyticSplit => analytic_split(problem, &self.config),
        }
    }

    /// Solves with a generator seeded from `seed`, for reproducible runs.
    pub fn solve_seeded<G: GraphService>(
        &self,
        problem: &Problem<G>,
        seed: u64,
    ) -> Result<Vec<Stop>, RoutingError> {
        let mut rng = u_numflow::random::create_rng(seed);
        self.solve(problem, &mut rng)
    }

    /// Solves and scores the resulting path.
    pub fn solve_and_score<G: GraphService, R: Rng>(
        &self,
        problem: &Problem<G>,
        rng: &mut R,
    ) -> anyhow::Result<SolveReport> {
        let strategy = self.strategy_for(problem.beta());
        let path = self.solve_with(strategy, problem, rng)?;
        let cost = evaluate_route_cost(problem.graph(), &problem.cost_model(), &path)?;
        info!(?strategy, cost, stops = path.len(), "solved");
        Ok(SolveReport {
            strategy,
            path,
            cost,
        })
    }
}

/// Solves `problem` with the default configuration.
pub fn solve<G: GraphService, R: Rng>(
    problem: &Problem<G>,
    rng: &mut R,
) -> Result<Vec<Stop>, RoutingError> {
    Solver::default().solve(problem, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::verify_path;
    use crate::graph::WeightedGraph;

    /// Small grid-like graph with gold scattered over it.
    fn graph() -> WeightedGraph {
        let mut g = WeightedGraph::with_gold(vec![0.0, 1.0, 0.0, 2.5, 4.0, 0.5]).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 2.0).unwrap();
        g.add_edge(0, 4, 3.0).unwrap();
        g.add_edge(4, 5, 1.0).unwrap();
        g.add_edge(5, 3, 1.0).unwrap();
        g
    }

    fn fast() -> Solver {
        Solver::new(
            SolverConfig::default()
                .with_population_size(10)
                .with_generations(15),
        )
    }

    #[test]
    fn test_strategy_threshold() {
        let s = Solver::default();
        assert_eq!(s.strategy_for(0.5), Strategy::Memetic);
        assert_eq!(s.strategy_for(1.0), Strategy::Memetic);
        assert_eq!(s.strategy_for(1.01), Strategy::AnalyticSplit);
        let custom = Solver::new(SolverConfig::default().with_beta_threshold(2.0));
        assert_eq!(custom.strategy_for(1.5), Strategy::Memetic);
    }

    #[test]
    fn test_both_strategies_produce_valid_paths() {
        for beta in [0.6, 1.0, 1.7, 2.5] {
            let p = Problem::new(graph(), 1.0, beta).unwrap();
            let path = fast().solve_seeded(&p, 17).unwrap();
            verify_path(p.graph(), &path).unwrap();
        }
    }

    #[test]
    fn test_forced_strategy() {
        let p = Problem::new(graph(), 1.0, 3.0).unwrap();
        let mut rng = u_numflow::random::create_rng(2);
        let path = fast().solve_with(Strategy::Memetic, &p, &mut rng).unwrap();
        verify_path(p.graph(), &path).unwrap();
    }

    #[test]
    fn test_solve_and_score() {
        let p = Problem::new(graph(), 0.5, 0.8).unwrap();
        let mut rng = u_numflow::random::create_rng(4);
        let report = fast().solve_and_score(&p, &mut rng).unwrap();
        assert_eq!(report.strategy, Strategy::Memetic);
        let rescored = evaluate_route_cost(p.graph(), &p.cost_model(), &report.path).unwrap();
        assert_eq!(report.cost, rescored);
        assert!(report.cost > 0.0);
    }

    #[test]
    fn test_free_solve_uses_defaults() {
        let p = Problem::new(graph(), 1.0, 1.5).unwrap();
        let mut rng = u_numflow::random::create_rng(8);
        let path = solve(&p, &mut rng).unwrap();
        verify_path(p.graph(), &path).unwrap();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let p = Problem::new(graph(), 1.0, 1.5).unwrap();
        let solver = Solver::new(SolverConfig::default().with_population_size(0));
        assert!(solver.solve_seeded(&p, 1).is_err());
    }
}
