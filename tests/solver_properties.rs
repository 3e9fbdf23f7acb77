use proptest::prelude::*;

use u_collect::evaluation::{evaluate_route_cost, verify_path, GOLD_TOLERANCE};
use u_collect::expansion::densify;
use u_collect::graph::{GraphService, WeightedGraph, DEPOT};
use u_collect::models::{collected_per_node, Problem};
use u_collect::{Solver, SolverConfig, Strategy as SolveStrategy};

/// Connected graph: node `i > 0` hangs off `parents[i - 1] % i`, plus extra chords.
fn build_graph(
    gold: &[f64],
    parents: &[usize],
    weights: &[f64],
    chords: &[(usize, usize, f64)],
) -> WeightedGraph {
    let mut g = WeightedGraph::with_gold(gold.to_vec()).unwrap();
    for i in 1..gold.len() {
        g.add_edge(i, parents[i - 1] % i, weights[i - 1]).unwrap();
    }
    for &(a, b, w) in chords {
        let (a, b) = (a % gold.len(), b % gold.len());
        if a != b {
            g.add_edge(a, b, w).unwrap();
        }
    }
    g
}

fn graph_strategy() -> impl Strategy<Value = WeightedGraph> {
    (2usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(prop_oneof![Just(0.0), 0.1f64..20.0], n),
            prop::collection::vec(0usize..100, n - 1),
            prop::collection::vec(0.5f64..10.0, n - 1),
            prop::collection::vec((0usize..100, 0usize..100, 0.5f64..10.0), 0..4),
        )
            .prop_map(|(gold, parents, weights, chords)| {
                build_graph(&gold, &parents, &weights, &chords)
            })
    })
}

fn quick_solver() -> Solver {
    Solver::new(
        SolverConfig::default()
            .with_population_size(8)
            .with_generations(6),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_both_strategies_conserve_gold_and_follow_edges(
        graph in graph_strategy(),
        alpha in 0.1f64..3.0,
        beta in 0.3f64..3.0,
        seed in 0u64..1000,
    ) {
        let problem = Problem::new(graph, alpha, beta).unwrap();
        for strategy in [SolveStrategy::Memetic, SolveStrategy::AnalyticSplit] {
            let mut rng = u_numflow::random::create_rng(seed);
            let path = quick_solver().solve_with(strategy, &problem, &mut rng).unwrap();

            prop_assert!(verify_path(problem.graph(), &path).is_ok());

            let collected = collected_per_node(&path, problem.graph().node_count());
            for node in problem.graph().nodes().filter(|&n| n != DEPOT) {
                prop_assert!((collected[node] - problem.gold(node)).abs() <= GOLD_TOLERANCE);
            }

            let cost = evaluate_route_cost(problem.graph(), &problem.cost_model(), &path).unwrap();
            prop_assert!(cost.is_finite());
            prop_assert!(cost >= 0.0);
        }
    }

    #[test]
    fn prop_densify_is_idempotent(
        graph in graph_strategy(),
        beta in 1.1f64..3.0,
    ) {
        let problem = Problem::new(graph, 1.0, beta).unwrap();
        let path = quick_solver().solve_seeded(&problem, 0).unwrap();
        prop_assert_eq!(densify(&path, problem.graph()).unwrap(), path);
    }
}
