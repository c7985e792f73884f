/*!
# Subgraph Working Copies

Analyses that consume edges (the greedy heaviest-path walk) or that judge a single class
in isolation (forest classification) operate on a private copy of the graph restricted to a
node subset. The copy keeps the node count of the original so no index remapping is needed;
nodes outside the subset simply end up without edges.
*/

use super::*;

/// A trait for creating restricted working copies of a graph.
pub trait Subgraph: Sized {
    /// Creates a copy of the graph that only contains edges where **both endpoints**
    /// are included in `vertices`. The number of nodes is unchanged.
    ///
    /// For a connectivity class this keeps exactly the edges of the class.
    /// ** Panics if any node in `vertices` is `>= n` **
    fn subgraph_of<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = Node>;
}

impl<G> Subgraph for G
where
    G: GraphEdgeEditing + WeightedAdjacency + Clone,
{
    fn subgraph_of<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut keep = self.vertex_bitset_unset();
        for u in vertices {
            assert!(
                u < self.number_of_nodes(),
                "Node {u} is out of range for a graph with {} nodes",
                self.number_of_nodes()
            );
            keep.set_bit(u);
        }

        let mut copy = self.clone();
        for Edge(u, v) in self.edges() {
            if !(keep.get_bit(u) && keep.get_bit(v)) {
                copy.try_remove_edge(u, v);
            }
        }
        copy
    }
}
