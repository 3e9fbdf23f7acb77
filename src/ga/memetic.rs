//! Memetic search: generational GA with bounded 2-opt refinement.
//!
//! # Operators
//!
//! - **Seeding**: one nearest-neighbor order plus uniform random permutations
//! - **Selection**: tournament without replacement
//! - **Crossover**: OX1, otherwise the child copies its first parent
//! - **Mutation**: swap or inversion with equal probability
//! - **Local search**: bounded 2-opt on some children of every
//!   `local_search_frequency`-th generation
//! - **Replacement**: the best individual so far survives unchanged; the
//!   rest of the population is replaced by children
//!
//! The generation count is fixed; there is no convergence test.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::chromosome::{sort_by_cost, Individual};
use super::fitness::Fitness;
use super::operators::{mutate, order_crossover_ox1, tournament};
use crate::config::SolverConfig;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::expansion::densify;
use crate::graph::{GraphService, DEPOT};
use crate::local_search::two_opt_bounded;
use crate::models::{Problem, Stop};

/// Population-based search over visit orders.
///
/// # Examples
///
/// ```
/// use u_collect::distance::DistanceMatrix;
/// use u_collect::evaluation::CostModel;
/// use u_collect::ga::{Fitness, MemeticSearch};
/// use u_collect::SolverConfig;
///
/// let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0]).unwrap();
/// let gold = [0.0, 2.0, 3.0];
/// let fitness = Fitness::new(&dm, &gold, CostModel::new(1.0, 0.8));
/// let config = SolverConfig::default().with_generations(10);
///
/// let search = MemeticSearch::new(vec![1, 2], &dm, fitness, &config);
/// let mut rng = u_numflow::random::create_rng(42);
/// let best = search.run(&mut rng);
/// assert_eq!(best.len(), 2);
/// assert!(best.phenotype().last().unwrap().is_depot());
/// ```
pub struct MemeticSearch<'a> {
    nodes: Vec<usize>,
    distances: &'a DistanceMatrix,
    fitness: Fitness<'a>,
    config: &'a SolverConfig,
}

impl<'a> MemeticSearch<'a> {
    /// Creates a search over permutations of `nodes`.
    pub fn new(
        nodes: Vec<usize>,
        distances: &'a DistanceMatrix,
        fitness: Fitness<'a>,
        config: &'a SolverConfig,
    ) -> Self {
        Self {
            nodes,
            distances,
            fitness,
            config,
        }
    }

    /// The fitness evaluator.
    pub fn fitness(&self) -> &Fitness<'a> {
        &self.fitness
    }

    /// Builds the first generation: the nearest-neighbor order first, then
    /// `population_size - 1` random permutations.
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Vec<Individual> {
        let size = self.config.population_size.max(1);
        let mut population = Vec::with_capacity(size);

        let greedy = nearest_neighbor_tour(&self.nodes, self.distances, DEPOT);
        population.push(Individual::new(greedy, &self.fitness));

        for _ in 1..size {
            let mut perm = self.nodes.clone();
            perm.shuffle(rng);
            population.push(Individual::new(perm, &self.fitness));
        }

        population
    }

    /// Runs the full generational loop and returns the best individual.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Individual {
        let size = self.config.population_size.max(1);
        let mut population = self.initial_population(rng);
        sort_by_cost(&mut population);
        let mut best = population[0].clone();
        debug!(cost = best.cost(), "initial population");

        for generation in 0..self.config.generations {
            let mut next = Vec::with_capacity(size);
            next.push(best.clone());
            while next.len() < size {
                next.push(self.breed(&population, &best, generation, rng));
            }

            population = next;
            sort_by_cost(&mut population);
            if population[0].cost() < best.cost() {
                best = population[0].clone();
            }
            debug!(generation, best_cost = best.cost(), "generation");
        }

        best
    }

    /// Produces one child from the current population.
    fn breed<R: Rng>(
        &self,
        population: &[Individual],
        elite: &Individual,
        generation: usize,
        rng: &mut R,
    ) -> Individual {
        let k = self.config.tournament_size;
        let parent1 = tournament(population, k, rng).unwrap_or(elite);
        let parent2 = tournament(population, k, rng).unwrap_or(elite);

        let mut child = if rng.random_bool(self.config.crossover_rate) {
            order_crossover_ox1(parent1.genome(), parent2.genome(), rng)
        } else {
            parent1.genome().to_vec()
        };

        if rng.random_bool(self.config.mutation_rate) {
            mutate(&mut child, rng);
        }

        if generation % self.config.local_search_frequency == 0
            && rng.random_bool(self.config.local_search_probability)
        {
            child = two_opt_bounded(&child, &self.fitness, self.config.two_opt_max_checks).0;
        }

        Individual::new(child, &self.fitness)
    }
}

/// Solves a problem with the memetic strategy.
///
/// Returns a physical path. If the distance precomputation from the depot
/// fails, the trivial path `[(depot, 0)]` is returned instead. A gold node
/// that cannot be reached from the depot is an error.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::models::{Problem, Stop};
/// use u_collect::ga::memetic_search;
/// use u_collect::SolverConfig;
///
/// let mut graph = WeightedGraph::with_gold(vec![0.0, 0.0, 5.0]).unwrap();
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
/// let problem = Problem::new(graph, 1.0, 0.5).unwrap();
///
/// let mut rng = u_numflow::random::create_rng(7);
/// let path = memetic_search(&problem, &SolverConfig::default(), &mut rng).unwrap();
/// assert_eq!(
///     path,
///     vec![Stop::pass(1), Stop::new(2, 5.0), Stop::pass(1), Stop::depot()]
/// );
/// ```
pub fn memetic_search<G: GraphService, R: Rng>(
    problem: &Problem<G>,
    config: &SolverConfig,
    rng: &mut R,
) -> Result<Vec<Stop>, RoutingError> {
    config.validate()?;

    let distances = match DistanceMatrix::from_graph(problem.graph()).and_then(|dm| {
        if dm.size() > DEPOT {
            Ok(dm)
        } else {
            Err(RoutingError::NodeNotFound(DEPOT))
        }
    }) {
        Ok(dm) => dm,
        Err(err) => {
            warn!(%err, "no shortest paths from depot, returning trivial route");
            return Ok(vec![Stop::depot()]);
        }
    };

    let gold = problem.gold_table();
    let nodes: Vec<usize> = problem
        .graph()
        .nodes()
        .filter(|&n| n != DEPOT && gold[n] > 0.0)
        .collect();

    if let Some(&node) = nodes.iter().find(|&&n| !distances.is_reachable(DEPOT, n)) {
        return Err(RoutingError::Unreachable {
            from: DEPOT,
            to: node,
        });
    }

    let fitness = Fitness::new(&distances, &gold, problem.cost_model());
    let search = MemeticSearch::new(nodes, &distances, fitness, config);
    let best = search.run(rng);
    info!(
        cost = best.cost(),
        nodes = best.len(),
        generations = config.generations,
        "memetic search finished"
    );

    densify(best.phenotype(), problem.graph())
}
