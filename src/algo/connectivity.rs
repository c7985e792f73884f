use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Connectivity classes (connected components) of an undirected graph.
///
/// Classes are reported as vectors of nodes sorted in ascending order, and the classes
/// themselves are ordered by their smallest node.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns the connectivity class of `u`, i.e. every node reachable from `u`
    /// (including `u` itself), in ascending order.
    /// ** Panics if `u >= n` **
    fn connectivity_class(&self, u: Node) -> Vec<Node> {
        self.connectivity_class_with(u, TraversalOrder::default())
    }

    /// Same as [`Connectivity::connectivity_class`] but explores the graph in the given order.
    /// The result does not depend on `order`.
    /// ** Panics if `u >= n` **
    fn connectivity_class_with(&self, u: Node, order: TraversalOrder) -> Vec<Node> {
        let mut class = self.reachable_from(u, order);
        class.sort_unstable();
        class
    }

    /// Returns an iterator over all connectivity classes. Together they partition `0..n`.
    fn connectivity_classes(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connectivity classes
    fn number_of_components(&self) -> NumNodes {
        let count = self.connectivity_classes().count() as NumNodes;
        debug!(components = count, "counted connectivity classes");
        count
    }

    /// Returns *true* if the graph consists of exactly one connectivity class
    fn is_connected(&self) -> bool {
        self.number_of_components() == 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connectivity classes of a graph.
///
/// Repeatedly picks the smallest node not assigned to a class yet, emits its
/// class and removes those nodes from the pool until the pool is empty.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    assigned: NodeBitSet,
    potentially_unassigned: Node,
    order: TraversalOrder,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            assigned: graph.vertex_bitset_unset(),
            potentially_unassigned: 0,
            order: TraversalOrder::default(),
        }
    }

    /// Sets the order in which each class is explored
    pub fn set_order(&mut self, order: TraversalOrder) {
        self.order = order;
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.set_order(order);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.number_of_nodes();
        while self.potentially_unassigned < n && self.assigned.get_bit(self.potentially_unassigned)
        {
            self.potentially_unassigned += 1;
        }

        if self.potentially_unassigned == n {
            return None;
        }

        let class = self
            .graph
            .connectivity_class_with(self.potentially_unassigned, self.order);
        for &u in &class {
            let was_assigned = self.assigned.set_bit(u);
            debug_assert!(!was_assigned);
        }

        Some(class)
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Returns *true* if `classes` partitions `0..n`, i.e. every node appears in exactly one class.
pub fn is_partition_of(classes: &[Vec<Node>], n: NumNodes) -> bool {
    classes.iter().flatten().copied().sorted().eq(0..n)
}
