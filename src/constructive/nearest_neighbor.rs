//! Nearest-neighbor visit order.
//!
//! Starting from a given node, greedily visit the closest unvisited node by
//! shortest-path distance. Load is ignored; the result seeds the memetic
//! population with one reasonable ordering.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes to order.

use crate::distance::DistanceMatrix;

/// Orders `nodes` by repeated nearest-neighbor jumps from `start`.
///
/// Ties go to the node listed first in `nodes`.
///
/// # Examples
///
/// ```
/// use u_collect::distance::DistanceMatrix;
/// use u_collect::constructive::nearest_neighbor_tour;
///
/// // Line 0 — 1 — 2 — 3 with unit edges
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// assert_eq!(nearest_neighbor_tour(&[3, 1, 2], &dm, 0), vec![1, 2, 3]);
/// ```
pub fn nearest_neighbor_tour(
    nodes: &[usize],
    distances: &DistanceMatrix,
    start: usize,
) -> Vec<usize> {
    let mut remaining = nodes.to_vec();
    let mut tour = Vec::with_capacity(nodes.len());
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&n| n != next);
        tour.push(next);
        current = next;
    }

    tour
}
