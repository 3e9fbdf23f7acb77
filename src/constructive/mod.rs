//! Constructive heuristics for seeding the search.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor visit order, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
