//! Logical-to-physical path expansion.

use crate::error::RoutingError;
use crate::graph::{GraphService, DEPOT};
use crate::models::Stop;

/// Expands a logical path into a physical one.
///
/// Walking from the depot, each stop that differs from the previous one is
/// reached through the graph's shortest path: intermediate nodes are emitted
/// with amount `0.0`, then the stop itself with its collected amount. Stops
/// equal to the previous node are dropped.
///
/// Fails with the graph's error when two consecutive stops are not connected.
///
/// # Examples
///
/// ```
/// use u_collect::graph::WeightedGraph;
/// use u_collect::expansion::densify;
/// use u_collect::models::Stop;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 1.0).unwrap();
/// graph.add_edge(1, 2, 1.0).unwrap();
///
/// let logical = vec![Stop::new(2, 5.0), Stop::depot()];
/// let physical = densify(&logical, &graph).unwrap();
/// assert_eq!(
///     physical,
///     vec![Stop::pass(1), Stop::new(2, 5.0), Stop::pass(1), Stop::depot()]
/// );
/// ```
pub fn densify<G: GraphService>(logical: &[Stop], graph: &G) -> Result<Vec<Stop>, RoutingError> {
    let mut physical = Vec::with_capacity(logical.len());
    let mut current = DEPOT;

    for stop in logical {
        if stop.node == current {
            continue;
        }

        let nodes = graph.shortest_path(current, stop.node)?;
        if nodes.len() > 2 {
            physical.extend(nodes[1..nodes.len() - 1].iter().map(|&n| Stop::pass(n)));
        }
        physical.push(*stop);
        current = stop.node;
    }

    Ok(physical)
}
