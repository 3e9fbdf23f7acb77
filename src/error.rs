//! Error type shared by the graph service and both strategies.

use std::fmt;

/// Errors raised while building or expanding a collection route.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// The node id does not exist in the graph.
    NodeNotFound(usize),
    /// No path connects `from` to `to`.
    Unreachable {
        /// Source node.
        from: usize,
        /// Target node.
        to: usize,
    },
    /// A problem or solver parameter is outside its valid range.
    InvalidParameter(String),
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "node {id} not found in graph"),
            Self::Unreachable { from, to } => write!(f, "no path from node {from} to node {to}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for RoutingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RoutingError::NodeNotFound(7).to_string(),
            "node 7 not found in graph"
        );
        assert_eq!(
            RoutingError::Unreachable { from: 0, to: 3 }.to_string(),
            "no path from node 0 to node 3"
        );
        assert!(RoutingError::InvalidParameter("alpha".into())
            .to_string()
            .contains("alpha"));
    }
}
