/*!
# Graph Generators

Deterministic helpers that add common weighted substructures (paths, cycles, cliques) to an
already existing graph. They are handy for building test instances with known properties:
every edge of a path is an isthmus, no edge of a cycle is, a clique on `k > 3` nodes has no
Eulerian path for even `k`, and so on.
*/

use crate::prelude::*;

mod substructures;

pub use substructures::*;
