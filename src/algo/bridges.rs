use tracing::debug;

use super::*;

/// Isthmus (bridge) detection: an edge is an isthmus iff removing it increases the
/// number of connectivity classes.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = WeightMatrix::new(4);
/// graph.add_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 5)]).unwrap();
///
/// assert_eq!(graph.is_isthmus(2, 3), Ok(true));
/// assert_eq!(graph.is_isthmus(0, 1), Ok(false));
/// assert_eq!(graph.compute_bridges(), vec![Edge(2, 3)]);
/// ```
pub trait Bridges {
    /// Returns *true* if the edge *(u,v)* is an isthmus.
    /// The graph is observably unchanged afterwards.
    ///
    /// Fails with
    /// - [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`,
    /// - [`GraphError::MissingEdge`] if there is no edge *(u,v)*.
    fn is_isthmus(&self, u: Node, v: Node) -> Result<bool>;

    /// Returns all isthmuses as normalized edges in ascending order.
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: GraphEdgeEditing + WeightedAdjacency + Clone,
{
    fn is_isthmus(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if !self.has_edge(u, v) {
            return Err(GraphError::MissingEdge { u, v });
        }

        let is_isthmus = separates(self, u, v);
        debug!(u, v, is_isthmus, "isthmus query");
        Ok(is_isthmus)
    }

    fn compute_bridges(&self) -> Vec<Edge> {
        self.edges().filter(|&Edge(u, v)| separates(self, u, v)).collect()
    }
}

/// Compares the number of classes before and after removing the existing edge *(u,v)*.
/// The removal happens on a private copy, so `graph` itself is never touched.
fn separates<G>(graph: &G, u: Node, v: Node) -> bool
where
    G: GraphEdgeEditing + WeightedAdjacency + Clone,
{
    let before = graph.number_of_components();

    let mut copy = graph.clone();
    copy.try_remove_edge(u, v);

    copy.number_of_components() > before
}
