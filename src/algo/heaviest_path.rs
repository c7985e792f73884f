/*!
# Greedy Heaviest Path

Finding a longest simple path in a weighted graph is NP-hard. This module implements the
**heaviest-edge-extension heuristic** instead:

1. Restrict a working copy of the graph to one connectivity class.
2. Start at the smallest node of the class.
3. Repeatedly follow the heaviest remaining edge at the current node (ties go to the smaller
   neighbor), delete it from the working copy and add its weight to the total.
4. Stop once the current node has no remaining edge, i.e. its class in the working copy
   has shrunk to the node itself.

Since every edge is consumed when it is used, the walk never traverses an edge twice. It may
however return to a node it visited before if that node still has unused edges. The result
is not guaranteed to be optimal: a locally heaviest edge can lead into a dead end.

# Example
```
use wgraphs::{prelude::*, algo::*};

let mut graph = WeightMatrix::new(4);
graph.add_edges([(0, 1, 2), (0, 2, 5), (2, 3, 1)]).unwrap();

assert_eq!(graph.longest_path(), vec![0, 2, 3]);
assert_eq!(graph.longest_path_weight(), 6);
```
*/

use tracing::{debug, trace};

use super::*;

/// Greedy heaviest-edge-extension walk within a single connectivity class.
pub struct GreedyPathSearch<'a, G> {
    graph: &'a G,
    class: &'a [Node],
}

impl<'a, G> GreedyPathSearch<'a, G>
where
    G: GraphEdgeEditing + WeightedAdjacency + Clone,
{
    /// Prepares a walk over `class`, which should be a connectivity class of `graph`.
    pub fn new(graph: &'a G, class: &'a [Node]) -> Self {
        Self { graph, class }
    }

    /// The node the walk starts at: the smallest node of the class
    pub fn seed(&self) -> Option<Node> {
        self.class.iter().copied().min()
    }

    /// Accumulated weight of the walk. `0` for a singleton or empty class.
    pub fn weight(self) -> PathWeight {
        let mut total: PathWeight = 0;
        self.walk(|_, w| total += w as PathWeight);
        total
    }

    /// Nodes visited by the walk, starting with the seed. Empty for an empty class.
    pub fn path(self) -> Vec<Node> {
        let Some(seed) = self.seed() else {
            return Vec::new();
        };

        let mut path = vec![seed];
        self.walk(|v, _| path.push(v));
        path
    }

    /// Runs the walk and reports every step as `(next node, weight of consumed edge)`.
    fn walk<F: FnMut(Node, Weight)>(&self, mut on_step: F) {
        let Some(mut current) = self.seed() else {
            return;
        };

        let mut work = self.graph.subgraph_of(self.class.iter().copied());
        while let Some((next, w)) = work.heaviest_edge_of(current) {
            trace!(from = current, to = next, weight = w, "extend heaviest path");
            work.try_remove_edge(current, next);
            on_step(next, w);
            current = next;
        }
    }
}

/// Heaviest-path queries based on [`GreedyPathSearch`].
pub trait HeaviestPath {
    /// Weight accumulated by the greedy walk within `class`.
    /// ** Panics if any node in `class` is `>= n` **
    fn heaviest_path_weight(&self, class: &[Node]) -> PathWeight;

    /// Returns the connectivity class whose greedy walk accumulates the largest weight.
    ///
    /// With a single class it is returned without running the walk. Among equally heavy
    /// classes the one with the smallest node wins; if no class has positive weight, the
    /// first class is returned. Empty for a graph without nodes.
    fn heaviest_class(&self) -> Vec<Node>;

    /// Nodes visited by the greedy walk within [`HeaviestPath::heaviest_class`].
    fn longest_path(&self) -> Vec<Node>;

    /// Sum of the original edge weights along [`HeaviestPath::longest_path`].
    fn longest_path_weight(&self) -> PathWeight;
}

impl<G> HeaviestPath for G
where
    G: GraphEdgeEditing + WeightedAdjacency + Clone,
{
    fn heaviest_path_weight(&self, class: &[Node]) -> PathWeight {
        GreedyPathSearch::new(self, class).weight()
    }

    fn heaviest_class(&self) -> Vec<Node> {
        let mut classes = self.connectivity_classes();
        let Some(first) = classes.next() else {
            return Vec::new();
        };

        let rest: Vec<_> = classes.collect();
        if rest.is_empty() {
            return first;
        }

        let mut best_weight = self.heaviest_path_weight(&first);
        let mut best = first;
        for class in rest {
            let weight = self.heaviest_path_weight(&class);
            if weight > best_weight {
                best_weight = weight;
                best = class;
            }
        }

        debug!(class = ?best, weight = best_weight, "selected heaviest class");
        best
    }

    fn longest_path(&self) -> Vec<Node> {
        let class = self.heaviest_class();
        GreedyPathSearch::new(self, &class).path()
    }

    fn longest_path_weight(&self) -> PathWeight {
        self.path_weight(&self.longest_path())
    }
}
