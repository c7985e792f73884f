/*!
Graph traversal iterators.

A traversal keeps an explicit frontier of discovered but unprocessed nodes together with a set
of visited nodes. The frontier container decides the order:

- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**

Both visit exactly the nodes reachable from the start node; only the order differs.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<Node> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Yields the start node first, then every node reachable from it exactly once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "Node {start} is out of range for a graph with {} nodes",
            graph.number_of_nodes()
        );

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Returns *true* if `u` was discovered so far.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

/// Frontier discipline used when exploring the graph from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Expand the oldest discovered node first
    #[default]
    BreadthFirst,
    /// Expand the most recently discovered node first
    DepthFirst,
}

/// Traversal algorithms exposed as methods on the graph itself.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search order.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns all nodes reachable from `start` in the requested visiting order.
    /// ** Panics if `start >= n` **
    fn reachable_from(&self, start: Node, order: TraversalOrder) -> Vec<Node> {
        match order {
            TraversalOrder::BreadthFirst => self.bfs(start).collect(),
            TraversalOrder::DepthFirst => self.dfs(start).collect(),
        }
    }
}

impl<G: AdjacencyList> Traversal for G {}
