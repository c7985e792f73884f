/*!
`wgraphs` is a small library for **w**eighted undirected graphs stored as a dense matrix:
- Nodes are numbered `0` to `n - 1` and `n` is fixed at construction
- Edges carry a positive integer weight; weight `0` means "no edge"
- Graphs are simple: no self-loops and no multi-edges

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as the tuple-struct
`Edge(Node, Node)` (or `WeightedEdge(Node, Node, Weight)` when the weight matters).
The only storage backend is [`WeightMatrix`](crate::repr::WeightMatrix), a symmetric
`n x n` matrix of weights. Its `Display` implementation prints the matrix row by row.

# Analyses

The [`algo`] module implements the structural queries as traits on the graph itself:
- connectivity classes and their count ([`algo::Connectivity`]),
- isthmus (bridge) detection ([`algo::Bridges`]),
- a greedy heaviest-edge-extension heuristic for long paths ([`algo::HeaviestPath`]);
  this is a heuristic, not an exact longest-path algorithm,
- Eulerian-path existence ([`algo::Eulerian`]),
- tree and forest classification ([`algo::TreeClassification`]).

# Errors

Editing operations and edge queries report caller-contract violations as
[`GraphError`]: out-of-range nodes, self-loops, zero weights and queries on missing edges.
Infallible per-node lookups such as `neighbors_of` panic on out-of-range nodes, just like
slice indexing.

# Logging

Analyses emit `tracing` events (`debug` for results, `trace` for individual greedy steps).
The library never installs a subscriber.

# Usage

```rust
use wgraphs::{prelude::*, algo::*};

let mut graph = WeightMatrix::new(5);
graph.add_edges([(0, 1, 2), (1, 2, 2), (2, 0, 2), (2, 3, 7)]).unwrap();

assert_eq!(graph.number_of_components(), 2);
assert_eq!(graph.is_isthmus(2, 3), Ok(true));
assert!(!graph.has_eulerian_path());
assert!(!graph.is_forest());
assert_eq!(graph.longest_path(), vec![0, 1, 2, 3]);
assert_eq!(graph.longest_path_weight(), 11);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
