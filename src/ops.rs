use std::{cmp::Reverse, ops::Range};

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in ascending order.
    /// The range does not borrow `self` and may thus be used while editing the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns `Ok(u)` if `u` is a node of the graph and
    /// [`GraphError::NodeOutOfRange`] otherwise.
    fn check_node(&self, u: Node) -> Result<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the degrees of all nodes, indexed by node
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.degree_of(u))
    }

    /// Returns the number of nodes with odd degree
    fn number_of_odd_degree_nodes(&self) -> NumNodes {
        self.degrees().filter(|d| d % 2 == 1).count() as NumNodes
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph, each reported once as a
    /// normalized edge in ascending order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u, true))
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Access to the weights stored on edges.
pub trait WeightedAdjacency: AdjacencyList + AdjacencyTest {
    /// Returns the weight of edge (u,v), or `0` if the edge does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Weight;

    /// Returns the incident edge of `u` with the largest weight as `(neighbor, weight)`.
    /// Among equally heavy edges, the one to the smallest neighbor wins.
    /// ** Panics if `u >= n` **
    fn heaviest_edge_of(&self, u: Node) -> Option<(Node, Weight)> {
        self.neighbors_of(u)
            .map(|v| (v, self.weight_of(u, v)))
            .min_by_key(|&(v, w)| (Reverse(w), v))
    }

    /// Returns an iterator over all edges with their weights, normalized and in ascending order.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges()
            .map(move |Edge(u, v)| WeightedEdge(u, v, self.weight_of(u, v)))
    }

    /// Sums the weights of the edges between consecutive nodes of `path`.
    /// Missing edges contribute `0`.
    /// ** Panics if any node on the path is `>= n` **
    fn path_weight(&self, path: &[Node]) -> PathWeight {
        path.iter()
            .tuple_windows()
            .map(|(&u, &v)| self.weight_of(u, v) as PathWeight)
            .sum()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete weighted edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Sets the weight of edge *(u,v)* to `w`, overwriting any previous weight.
    /// Returns the previous weight if the edge was present before.
    ///
    /// Fails with
    /// - [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`,
    /// - [`GraphError::SelfLoop`] if `u == v`,
    /// - [`GraphError::InvalidWeight`] if `w == 0`.
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<Option<Weight>>;

    /// Adds all edges in the collection, stopping at the first invalid one.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Result<()> {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Removes the edge *(u,v)* from the graph and returns its weight if it was present.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight>;

    /// Removes the edge *(u,v)* from the graph and returns its weight if it was present.
    /// Removing an absent edge is a no-op.
    ///
    /// Fails with [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Option<Weight>> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.try_remove_edge(u, v))
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over weighted edges
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
