//! Graph service trait.

use crate::error::RoutingError;

/// Read-only view of the collection graph consumed by the solvers.
///
/// Node ids are dense: `0..node_count()`, with node 0 as the depot.
/// Implementations must stay immutable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use u_collect::graph::{GraphService, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 2.0).unwrap();
/// graph.add_edge(1, 2, 3.0).unwrap();
///
/// assert_eq!(graph.shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
/// assert!((graph.shortest_path_length(0, 2).unwrap() - 5.0).abs() < 1e-10);
/// ```
pub trait GraphService {
    /// Number of nodes (ids `0..node_count()`).
    fn node_count(&self) -> usize;

    /// Material stored at `node`. Unknown nodes hold nothing.
    fn gold(&self, node: usize) -> f64;

    /// Nodes adjacent to `node` with their edge weights. Unknown nodes have none.
    fn neighbors(&self, node: usize) -> Vec<(usize, f64)>;

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    fn edge_distance(&self, a: usize, b: usize) -> Option<f64>;

    /// Shortest distances from `source` to every node.
    ///
    /// Unreachable nodes carry `f64::INFINITY`. Fails with
    /// [`RoutingError::NodeNotFound`] when `source` is not in the graph.
    fn shortest_path_lengths(&self, source: usize) -> Result<Vec<f64>, RoutingError>;

    /// Shortest node sequence from `source` to `target`, both endpoints included.
    fn shortest_path(&self, source: usize, target: usize) -> Result<Vec<usize>, RoutingError>;

    /// Shortest distance from `source` to `target`.
    fn shortest_path_length(&self, source: usize, target: usize) -> Result<f64, RoutingError> {
        let lengths = self.shortest_path_lengths(source)?;
        match lengths.get(target) {
            None => Err(RoutingError::NodeNotFound(target)),
            Some(d) if d.is_infinite() => Err(RoutingError::Unreachable {
                from: source,
                to: target,
            }),
            Some(&d) => Ok(d),
        }
    }

    /// Returns `true` if an edge connects `a` and `b`.
    fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.edge_distance(a, b).is_some()
    }

    /// All node ids, depot included.
    fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count()
    }
}
