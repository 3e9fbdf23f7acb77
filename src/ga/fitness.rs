//! Fitness evaluation with greedy depot returns.
//!
//! A genome only fixes the visit order. While walking it, each leg is either
//! taken directly at the current load or as a detour through the depot
//! (return at the current load, then leave empty), whichever is cheaper.
//! The decision is made inline, so every fitness value already accounts for
//! the depot returns it implies.

use crate::distance::DistanceMatrix;
use crate::evaluation::CostModel;
use crate::graph::DEPOT;
use crate::models::Stop;

/// Which way the collector reaches the next node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Travel straight from the current node at the current load.
    Direct,
    /// Unload at the depot first, then travel empty.
    ViaDepot,
}

/// Outcome of [`decide_leg`]: the chosen leg, its cost, and the state the
/// collector departs from towards the next node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegDecision {
    /// Chosen leg.
    pub leg: Leg,
    /// Cost of the chosen leg.
    pub cost: f64,
    /// Node the final hop starts from.
    pub from: usize,
    /// Load carried on the final hop.
    pub load: f64,
}

/// Picks the cheaper of a direct leg and a detour through the depot.
///
/// `return_home` is the cost of going back to the depot at the current load,
/// `depot_to_next` the cost of the empty leg from the depot. The detour wins
/// only when strictly cheaper.
///
/// # Examples
///
/// ```
/// use u_collect::ga::{decide_leg, Leg};
///
/// let stay = decide_leg(5.0, 3.0, 2.0, 4, 10.0);
/// assert_eq!(stay.leg, Leg::Direct);
/// assert_eq!((stay.from, stay.load), (4, 10.0));
///
/// let unload = decide_leg(9.0, 3.0, 2.0, 4, 10.0);
/// assert_eq!(unload.leg, Leg::ViaDepot);
/// assert_eq!((unload.from, unload.load), (0, 0.0));
/// ```
pub fn decide_leg(
    direct: f64,
    return_home: f64,
    depot_to_next: f64,
    current: usize,
    load: f64,
) -> LegDecision {
    let detour = return_home + depot_to_next;
    if detour < direct {
        LegDecision {
            leg: Leg::ViaDepot,
            cost: detour,
            from: DEPOT,
            load: 0.0,
        }
    } else {
        LegDecision {
            leg: Leg::Direct,
            cost: direct,
            from: current,
            load,
        }
    }
}

/// Evaluates genomes against precomputed shortest distances.
#[derive(Debug, Clone, Copy)]
pub struct Fitness<'a> {
    distances: &'a DistanceMatrix,
    gold: &'a [f64],
    model: CostModel,
}

impl<'a> Fitness<'a> {
    /// Creates an evaluator.
    ///
    /// `gold[n]` is the amount collected at node `n` (depot zeroed).
    pub fn new(distances: &'a DistanceMatrix, gold: &'a [f64], model: CostModel) -> Self {
        Self {
            distances,
            gold,
            model,
        }
    }

    /// Total cost of a genome and its logical path with explicit depot returns.
    ///
    /// The path always ends at the depot unless the genome is empty.
    pub fn evaluate(&self, genome: &[usize]) -> (f64, Vec<Stop>) {
        let mut path = Vec::with_capacity(genome.len() + 1);
        let cost = self.walk(genome, Some(&mut path));
        (cost, path)
    }

    /// Total cost of a genome, without building its path.
    pub fn cost(&self, genome: &[usize]) -> f64 {
        self.walk(genome, None)
    }

    fn walk(&self, genome: &[usize], mut path: Option<&mut Vec<Stop>>) -> f64 {
        let dm = self.distances;
        let mut total = 0.0;
        let mut current = DEPOT;
        let mut load = 0.0;

        for &next in genome {
            let direct = self.model.edge_cost(dm.get(current, next), load);
            let return_home = self.model.edge_cost(dm.get(current, DEPOT), load);
            let decision = decide_leg(direct, return_home, dm.get(DEPOT, next), current, load);

            if decision.leg == Leg::ViaDepot && current != DEPOT {
                if let Some(p) = path.as_deref_mut() {
                    p.push(Stop::depot());
                }
            }
            total += decision.cost;

            let gold = self.gold.get(next).copied().unwrap_or(0.0);
            if let Some(p) = path.as_deref_mut() {
                p.push(Stop::new(next, gold));
            }
            load = decision.load + gold;
            current = next;
        }

        if current != DEPOT {
            total += self.model.edge_cost(dm.get(current, DEPOT), load);
            if let Some(p) = path.as_deref_mut() {
                p.push(Stop::depot());
            }
        }

        total
    }
}
