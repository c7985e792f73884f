//! Helpers shared by the unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Creates a graph on `n` nodes with at most `m_ub` random edges, each weighted uniformly
/// from `1..=max_weight`. Self-loops drawn at random are skipped.
pub(crate) fn random_weighted_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    max_weight: Weight,
) -> WeightMatrix {
    let edges = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            WeightedEdge(u, v, rng.random_range(1..=max_weight))
        })
        .filter(|e| !e.edge().is_loop())
        .collect_vec();

    let mut graph = WeightMatrix::new(n);
    for WeightedEdge(u, v, w) in edges {
        graph
            .add_edge(u, v, w)
            .expect("random edges are in range, loop-free and positively weighted");
    }
    graph
}
