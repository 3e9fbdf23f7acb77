//! Graph access for the collection problem.
//!
//! - [`GraphService`] — Read-only interface the solvers query (gold, edges, shortest paths)
//! - [`WeightedGraph`] — In-memory undirected implementation backed by Dijkstra

mod service;
mod weighted;

pub use service::GraphService;
pub use weighted::WeightedGraph;

/// The depot node id. Carried load resets to zero here.
pub const DEPOT: usize = 0;
