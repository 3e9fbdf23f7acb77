//! In-memory undirected weighted graph with Dijkstra shortest paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use super::GraphService;
use crate::error::RoutingError;

/// Undirected graph with per-edge `dist` weights and per-node gold.
///
/// # Examples
///
/// ```
/// use u_collect::graph::{GraphService, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(0, 2, 4.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
/// graph.set_gold(2, 12.5).unwrap();
///
/// assert_eq!(graph.gold(2), 12.5);
/// assert_eq!(graph.shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedGraph {
    gold: Vec<f64>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl WeightedGraph {
    /// Creates a graph with `node_count` isolated nodes and no gold.
    pub fn new(node_count: usize) -> Self {
        Self {
            gold: vec![0.0; node_count],
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a graph whose node count is `gold.len()`.
    ///
    /// Fails if any quantity is negative or not finite.
    pub fn with_gold(gold: Vec<f64>) -> Result<Self, RoutingError> {
        if let Some((node, g)) = gold
            .iter()
            .enumerate()
            .find(|(_, g)| !g.is_finite() || **g < 0.0)
        {
            return Err(RoutingError::InvalidParameter(format!(
                "gold at node {node} must be finite and nonnegative, got {g}"
            )));
        }
        let n = gold.len();
        Ok(Self {
            gold,
            adjacency: vec![Vec::new(); n],
        })
    }

    /// Adds (or reweights) the undirected edge `a — b`.
    pub fn add_edge(&mut self, a: usize, b: usize, dist: f64) -> Result<(), RoutingError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if !dist.is_finite() || dist < 0.0 {
            return Err(RoutingError::InvalidParameter(format!(
                "edge ({a}, {b}) distance must be finite and nonnegative, got {dist}"
            )));
        }
        if a == b {
            return Err(RoutingError::InvalidParameter(format!("self-loop on node {a}")));
        }
        self.upsert(a, b, dist);
        self.upsert(b, a, dist);
        Ok(())
    }

    /// Sets the gold stored at `node`.
    pub fn set_gold(&mut self, node: usize, gold: f64) -> Result<(), RoutingError> {
        self.check_node(node)?;
        if !gold.is_finite() || gold < 0.0 {
            return Err(RoutingError::InvalidParameter(format!(
                "gold at node {node} must be finite and nonnegative, got {gold}"
            )));
        }
        self.gold[node] = gold;
        Ok(())
    }

    fn edges(&self, node: usize) -> &[(usize, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn check_node(&self, node: usize) -> Result<(), RoutingError> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(RoutingError::NodeNotFound(node))
        }
    }

    fn upsert(&mut self, from: usize, to: usize, dist: f64) {
        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(n, _)| *n == to) {
            Some(edge) => edge.1 = dist,
            None => edges.push((to, dist)),
        }
    }

    /// Dijkstra from `source`: returns distances and predecessors.
    fn dijkstra(&self, source: usize) -> Result<(Vec<f64>, Vec<Option<usize>>), RoutingError> {
        self.check_node(source)?;
        let n = self.adjacency.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(HeapEntry {
            cost: 0.0,
            node: source,
        });

        while let Some(HeapEntry { cost, node }) = heap.pop() {
            if cost > dist[node] {
                continue;
            }
            for &(next, w) in &self.adjacency[node] {
                let candidate = cost + w;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    pred[next] = Some(node);
                    heap.push(HeapEntry {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        Ok((dist, pred))
    }
}

impl GraphService for WeightedGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn gold(&self, node: usize) -> f64 {
        self.gold.get(node).copied().unwrap_or(0.0)
    }

    fn neighbors(&self, node: usize) -> Vec<(usize, f64)> {
        self.edges(node).to_vec()
    }

    fn edge_distance(&self, a: usize, b: usize) -> Option<f64> {
        self.edges(a)
            .iter()
            .find(|(n, _)| *n == b)
            .map(|&(_, d)| d)
    }

    fn shortest_path_lengths(&self, source: usize) -> Result<Vec<f64>, RoutingError> {
        self.dijkstra(source).map(|(dist, _)| dist)
    }

    fn shortest_path(&self, source: usize, target: usize) -> Result<Vec<usize>, RoutingError> {
        self.check_node(target)?;
        let (dist, pred) = self.dijkstra(source)?;
        if dist[target].is_infinite() {
            return Err(RoutingError::Unreachable {
                from: source,
                to: target,
            });
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(p) = pred[node] {
            path.push(p);
            node = p;
        }
        path.reverse();
        Ok(path)
    }
}

/// Min-heap entry; ties broken by smaller node id.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: f64,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}
