use tracing::debug;

use super::*;

/// Existence of an Eulerian path, i.e. a walk using every edge exactly once.
pub trait Eulerian {
    /// Returns *true* if the graph is connected and has either zero or two nodes of odd degree.
    ///
    /// Isolated nodes count as classes of their own, so a graph with an isolated node
    /// next to some edges has no Eulerian path.
    fn has_eulerian_path(&self) -> bool;
}

impl<G> Eulerian for G
where
    G: AdjacencyList,
{
    fn has_eulerian_path(&self) -> bool {
        if !self.is_connected() {
            return false;
        }

        let odd = self.number_of_odd_degree_nodes();
        debug!(odd_degree_nodes = odd, "checked Eulerian degree condition");
        odd == 0 || odd == 2
    }
}
