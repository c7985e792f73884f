use std::fmt::{self, Display};

use super::*;

/// An undirected weighted graph stored as a dense adjacency matrix.
///
/// Invariants (hold before and after every public operation):
/// - the matrix is square with `n` rows,
/// - `weight[u][v] == weight[v][u]` for all `u, v`,
/// - `weight[u][u] == 0` for all `u`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WeightMatrix {
    n: NumNodes,
    weights: Vec<Weight>,
    num_edges: NumEdges,
}

impl WeightMatrix {
    /// Returns the flat index of cell `(u, v)`.
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        assert!(
            u < self.n && v < self.n,
            "Edge ({u},{v}) is out of range for a graph with {} nodes",
            self.n
        );
        u as usize * self.n as usize + v as usize
    }

    /// Returns the weights of all potential edges at `u`, indexed by the other endpoint.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        assert!(
            u < self.n,
            "Node {u} is out of range for a graph with {} nodes",
            self.n
        );
        let begin = u as usize * self.n as usize;
        &self.weights[begin..begin + self.n as usize]
    }

    /// Iterates over all rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        // `chunks_exact` panics on a chunk size of 0
        self.weights.chunks_exact(self.len().max(1))
    }

    fn set_symmetric(&mut self, u: Node, v: Node, w: Weight) -> Weight {
        let uv = self.cell(u, v);
        let vu = self.cell(v, u);
        let previous = std::mem::replace(&mut self.weights[uv], w);
        self.weights[vu] = w;

        match (previous > 0, w > 0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }

        previous
    }
}

impl GraphNew for WeightMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            weights: vec![0; n as usize * n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for WeightMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for WeightMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for WeightMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w > 0).then_some(v as Node))
    }
}

impl AdjacencyTest for WeightMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v) > 0
    }
}

impl WeightedAdjacency for WeightMatrix {
    fn weight_of(&self, u: Node, v: Node) -> Weight {
        self.weights[self.cell(u, v)]
    }
}

impl GraphEdgeEditing for WeightMatrix {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<Option<Weight>> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if w == 0 {
            return Err(GraphError::InvalidWeight { u, v });
        }

        let previous = self.set_symmetric(u, v, w);
        Ok((previous > 0).then_some(previous))
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let previous = self.set_symmetric(u, v, 0);
        (previous > 0).then_some(previous)
    }
}

/// Diagnostic dump: a leading line break, then one line per row with the
/// decimal weights written back to back.
impl Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if self.is_empty() {
            return Ok(());
        }
        for row in self.rows() {
            for w in row {
                write!(f, "{w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_weighted_graph;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn graph_new() {
        for n in 0..20 {
            let graph = WeightMatrix::new(n);

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.is_singleton_graph());
        }
    }

    #[test]
    fn add_edge_overwrites() {
        let mut graph = WeightMatrix::new(3);

        assert_eq!(graph.add_edge(0, 1, 4), Ok(None));
        assert_eq!(graph.add_edge(1, 0, 4), Ok(Some(4)));
        assert_eq!(graph.number_of_edges(), 1);

        assert_eq!(graph.add_edge(0, 1, 7), Ok(Some(4)));
        assert_eq!(graph.weight_of(1, 0), 7);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn add_edge_rejects_invalid_input() {
        let mut graph = WeightMatrix::new(3);

        assert_eq!(graph.add_edge(1, 1, 2), Err(GraphError::SelfLoop(1)));
        assert_eq!(
            graph.add_edge(0, 2, 0),
            Err(GraphError::InvalidWeight { u: 0, v: 2 })
        );
        assert_eq!(
            graph.add_edge(0, 3, 1),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                number_of_nodes: 3
            })
        );
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn remove_edge() {
        let mut graph = WeightMatrix::from_edges(4, [(0, 1, 2), (1, 2, 3)]).unwrap();

        assert_eq!(graph.remove_edge(2, 1), Ok(Some(3)));
        assert_eq!(graph.remove_edge(2, 1), Ok(None));
        assert!(!graph.has_edge(1, 2));
        assert_eq!(graph.number_of_edges(), 1);

        assert!(matches!(
            graph.remove_edge(4, 0),
            Err(GraphError::NodeOutOfRange { node: 4, .. })
        ));
    }

    #[test]
    fn failed_edits_keep_earlier_edges() {
        let mut graph = WeightMatrix::from_edges(4, [(0, 1, 2)]).unwrap();
        let snapshot = graph.clone();

        assert!(graph.add_edge(2, 2, 1).is_err());
        assert!(graph.add_edge(0, 9, 1).is_err());
        assert_eq!(graph, snapshot);

        assert_eq!(
            graph.add_edges([(1, 2, 4), (2, 3, 0), (0, 3, 1)]),
            Err(GraphError::InvalidWeight { u: 2, v: 3 })
        );
        assert_eq!(
            graph.weighted_edges().collect_vec(),
            vec![WeightedEdge(0, 1, 2), WeightedEdge(1, 2, 4)]
        );
    }

    #[test]
    fn from_borrowed_edges() {
        let edges: Vec<(Node, Node, Weight)> = vec![(0, 1, 2), (1, 2, 3), (2, 3, 5)];
        let graph = WeightMatrix::from_edges(4, &edges).unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weight_of(3, 2), 5);

        let weighted = graph.weighted_edges().collect_vec();
        let mut copy = WeightMatrix::new(4);
        copy.add_edges(&weighted).unwrap();
        assert_eq!(copy, graph);

        let invalid = [WeightedEdge(0, 1, 1), WeightedEdge(2, 2, 1)];
        assert_eq!(
            WeightMatrix::from_edges(4, &invalid),
            Err(GraphError::SelfLoop(2))
        );
    }

    #[test]
    fn neighbors_and_degrees() {
        let graph =
            WeightMatrix::from_edges(5, [(3, 0, 1), (0, 1, 1), (4, 0, 9), (1, 2, 2)]).unwrap();

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 3, 4]);
        assert_eq!(graph.degree_of(0), 3);
        assert_eq!(graph.degrees().collect_vec(), vec![3, 2, 1, 1, 1]);
        assert_eq!(graph.number_of_odd_degree_nodes(), 4);
        assert_eq!(graph.heaviest_edge_of(0), Some((4, 9)));
        assert_eq!(graph.heaviest_edge_of(1), Some((2, 2)));
    }

    #[test]
    fn heaviest_edge_prefers_smaller_neighbor_on_ties() {
        let graph = WeightMatrix::from_edges(4, [(0, 3, 5), (0, 2, 5), (0, 1, 1)]).unwrap();
        assert_eq!(graph.heaviest_edge_of(0), Some((2, 5)));
    }

    #[test]
    #[should_panic]
    fn neighbors_of_out_of_range() {
        let graph = WeightMatrix::new(3);
        let _ = graph.neighbors_of(3).count();
    }

    #[test]
    #[should_panic]
    fn has_edge_out_of_range() {
        // (0, 3) would alias cell (1, 0) in the flat storage without the bounds check
        let graph = WeightMatrix::from_edges(3, [(0, 1, 1)]).unwrap();
        graph.has_edge(0, 3);
    }

    #[test]
    fn display_matches_matrix_dump() {
        let graph = WeightMatrix::from_edges(3, [(0, 1, 2), (1, 2, 13)]).unwrap();
        assert_eq!(format!("{graph}"), "\n020\n2013\n0130\n");
        assert_eq!(format!("{}", WeightMatrix::new(0)), "\n");
    }

    #[test]
    fn symmetric_after_random_edits() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 10, 30] {
            for _ in 0..10 {
                let mut graph = random_weighted_graph(rng, n, n * 3, 9);

                for _ in 0..n {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    graph.remove_edge(u, v).unwrap();
                }

                for u in graph.vertices() {
                    assert_eq!(graph.weight_of(u, u), 0);
                    for v in graph.vertices() {
                        assert_eq!(graph.weight_of(u, v), graph.weight_of(v, u));
                    }
                }

                let m = graph
                    .vertices()
                    .tuple_combinations()
                    .filter(|&(u, v)| graph.weight_of(u, v) > 0)
                    .count();
                assert_eq!(graph.number_of_edges() as usize, m);
                assert_eq!(graph.edges().count(), m);
            }
        }
    }
}
