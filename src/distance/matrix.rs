//! Dense all-pairs shortest-distance matrix.

use crate::error::RoutingError;
use crate::graph::GraphService;

/// A dense n×n shortest-distance matrix stored in row-major order.
///
/// Built once per solve from the graph service so that fitness evaluation
/// never re-runs Dijkstra. Unreachable pairs hold `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::distance::DistanceMatrix;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 3.0).unwrap();
/// graph.add_edge(1, 2, 4.0).unwrap();
///
/// let dm = DistanceMatrix::from_graph(&graph).unwrap();
/// assert!((dm.get(0, 2) - 7.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Runs a single-source shortest-path query from every node.
    pub fn from_graph<G: GraphService>(graph: &G) -> Result<Self, RoutingError> {
        let n = graph.node_count();
        let mut data = Vec::with_capacity(n * n);
        for source in graph.nodes() {
            let row = graph.shortest_path_lengths(source)?;
            if row.len() != n {
                return Err(RoutingError::InvalidParameter(format!(
                    "distance row from node {source} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, size: n })
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `to` can be reached from `from`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .reduce(|best, c| {
                if self.get(from, c) < self.get(from, best) {
                    c
                } else {
                    best
                }
            })
    }
}
