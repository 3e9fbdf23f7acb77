//! Path stop type.

use serde::{Deserialize, Serialize};

use crate::graph::DEPOT;

/// A single stop on a path: the node reached and the gold collected there.
///
/// The same type serves both path flavors:
///
/// - a *logical* path lists only meaningful stops (pickups, depot returns);
/// - a *physical* path is the logical one expanded so that consecutive
///   stops are graph-adjacent, with pass-through nodes collecting `0.0`.
///
/// A depot stop always collects nothing and resets the carried load.
///
/// # Examples
///
/// ```
/// use u_collect::models::Stop;
///
/// let pickup = Stop::new(3, 12.5);
/// assert_eq!(pickup.node, 3);
/// assert!(!pickup.is_depot());
/// assert!(Stop::depot().is_depot());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Node id reached.
    pub node: usize,
    /// Gold collected at this stop.
    pub amount: f64,
}

impl Stop {
    /// Creates a stop collecting `amount` at `node`.
    pub fn new(node: usize, amount: f64) -> Self {
        Self { node, amount }
    }

    /// A pass-through stop collecting nothing.
    pub fn pass(node: usize) -> Self {
        Self { node, amount: 0.0 }
    }

    /// A return to the depot.
    pub fn depot() -> Self {
        Self::pass(DEPOT)
    }

    /// Returns `true` if this stop is at the depot.
    pub fn is_depot(&self) -> bool {
        self.node == DEPOT
    }
}

impl From<(usize, f64)> for Stop {
    fn from((node, amount): (usize, f64)) -> Self {
        Self::new(node, amount)
    }
}

/// Sums the amount collected per node over a path, indexed by node id.
pub fn collected_per_node(path: &[Stop], node_count: usize) -> Vec<f64> {
    let mut totals = vec![0.0; node_count];
    for stop in path {
        if let Some(t) = totals.get_mut(stop.node) {
            *t += stop.amount;
        }
    }
    totals
}
