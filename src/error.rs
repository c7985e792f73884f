/*!
# Errors

Caller-contract violations reported by editing operations and by queries that take an edge
as argument. None of them is recoverable by retrying; the error is handed straight back to
the caller. A failing single-edge operation (`add_edge`, `remove_edge`) leaves the graph
untouched, while bulk insertions (`add_edges`, `from_edges`, the generators in
[`crate::gens`]) keep the edges added before the failing one.
*/

use crate::{Node, NumNodes};

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node index outside of `0..n`.
    #[error("Node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange { node: Node, number_of_nodes: NumNodes },

    /// Weight `0` is reserved for "no edge".
    #[error("Edge ({u},{v}) must have a positive weight")]
    InvalidWeight { u: Node, v: Node },

    /// Edge `(u, u)`.
    #[error("Self-loop at node {0} is not allowed")]
    SelfLoop(Node),

    /// The queried edge is not part of the graph.
    #[error("Edge ({u},{v}) does not exist")]
    MissingEdge { u: Node, v: Node },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
