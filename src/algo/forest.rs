use tracing::debug;

use super::*;

/// Tree and forest classification.
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut graph = WeightMatrix::new(5);
/// graph.add_edges([(0, 1, 2), (1, 2, 2), (3, 4, 7)]).unwrap();
///
/// assert!(!graph.is_tree());
/// assert!(graph.is_forest());
///
/// graph.add_edge(2, 3, 1).unwrap();
/// assert!(graph.is_tree());
/// ```
pub trait TreeClassification {
    /// Returns *true* if the graph is connected and has exactly `n - 1` edges.
    /// A graph without nodes is not a tree.
    fn is_tree(&self) -> bool;

    /// Returns *true* if every connectivity class induces a tree on its own nodes.
    /// A graph without nodes is a forest.
    fn is_forest(&self) -> bool;
}

impl<G> TreeClassification for G
where
    G: GraphEdgeEditing + GraphEdgeOrder + WeightedAdjacency + Clone,
{
    fn is_tree(&self) -> bool {
        !self.is_empty()
            && self.number_of_edges() as usize + 1 == self.len()
            && self.is_connected()
    }

    fn is_forest(&self) -> bool {
        let is_forest = self.connectivity_classes().all(|class| {
            // a class is connected by definition, so only the edge count remains to check
            let class_graph = self.subgraph_of(class.iter().copied());
            class_graph.number_of_edges() as usize + 1 == class.len()
        });

        debug!(is_forest, "classified forest");
        is_forest
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::random_weighted_graph};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn tree_criterion() {
        let mut graph = WeightMatrix::new(5);
        graph
            .add_edges([(0, 1, 1), (0, 2, 4), (2, 3, 2), (2, 4, 9)])
            .unwrap();
        assert!(graph.is_tree());
        assert!(graph.is_forest());

        graph.add_edge(1, 4, 3).unwrap();
        assert!(!graph.is_tree());
        assert!(!graph.is_forest());
        assert_eq!(graph.number_of_components(), 1);
    }

    #[test]
    fn enough_edges_but_disconnected() {
        // triangle plus isolated node: 3 edges for 4 nodes
        let mut graph = WeightMatrix::new(4);
        graph.connect_cycle([0, 1, 2], 1).unwrap();
        assert!(!graph.is_tree());
        assert!(!graph.is_forest());
    }

    #[test]
    fn two_disjoint_trees() {
        let mut graph = WeightMatrix::new(7);
        graph.connect_path([0, 1, 2], 1).unwrap();
        graph.add_edges([(3, 4, 2), (3, 5, 2), (3, 6, 2)]).unwrap();

        assert!(!graph.is_tree());
        assert!(graph.is_forest());

        graph.add_edge(4, 5, 1).unwrap();
        assert!(!graph.is_forest());

        graph.remove_edge(4, 5).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        assert!(!graph.is_forest());
    }

    #[test]
    fn trivial_graphs() {
        assert!(!WeightMatrix::new(0).is_tree());
        assert!(WeightMatrix::new(0).is_forest());

        assert!(WeightMatrix::new(1).is_tree());
        assert!(WeightMatrix::new(1).is_forest());

        assert!(!WeightMatrix::new(3).is_tree());
        assert!(WeightMatrix::new(3).is_forest());
    }

    #[test]
    fn forest_iff_every_edge_is_isthmus() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [3, 10, 20] {
            for m_ub in [n / 2, n, n * 2] {
                for _ in 0..10 {
                    let graph = random_weighted_graph(rng, n, m_ub, 3);
                    let all_bridges = graph.compute_bridges() == graph.edges().collect_vec();
                    assert_eq!(graph.is_forest(), all_bridges);

                    let m = graph.number_of_edges() as usize;
                    let c = graph.number_of_components() as usize;
                    assert_eq!(graph.is_forest(), m + c == n as usize);
                }
            }
        }
    }
}
