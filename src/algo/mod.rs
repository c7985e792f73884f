/*!
# Graph Algorithms

This module provides the structural analyses built on top of the graph representations in
this crate. All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, isthmus detection, the greedy heaviest path,
Eulerian-path existence and tree/forest classification. Each analysis is a trait implemented
for every graph that provides the required operations, so it can be called directly as a
method on the graph.

Analyses that need to edit the graph (removing an edge to test for an isthmus, consuming
edges during the greedy walk) work on a private copy and never modify the caller's graph.
*/

mod bridges;
mod connectivity;
mod eulerian;
mod forest;
mod heaviest_path;
mod subgraph;
mod traversal;

use crate::prelude::*;

pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use forest::*;
pub use heaviest_path::*;
pub use subgraph::*;
pub use traversal::*;
