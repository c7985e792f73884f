/*!
# Substructure Generators

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = WeightMatrix::new(5);
g.connect_path([0, 1, 2], 3).unwrap();
g.connect_cycle([2, 3, 4], 1).unwrap();

assert_eq!(
    g.weighted_edges().collect::<Vec<_>>(),
    vec![
        WeightedEdge(0, 1, 3),
        WeightedEdge(1, 2, 3),
        WeightedEdge(2, 3, 1),
        WeightedEdge(2, 4, 1),
        WeightedEdge(3, 4, 1),
    ]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph. All created edges share the weight `w`.
///
/// Each method stops at the first edge [`GraphEdgeEditing::add_edge`] rejects; edges added
/// before that remain in the graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **path**.
    fn connect_path<P>(&mut self, nodes_on_path: P, w: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the
    /// last node is connected back to the first. With fewer than three nodes no closing
    /// edge is added, as it would either be a self-loop or duplicate the only edge.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes pairwise into a **clique**.
    fn connect_clique(&mut self, nodes: &[Node], w: Weight) -> Result<()>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, w: Weight) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, w: Weight) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            let mut len = 1;
            for cur in iter {
                self.add_edge(prev, cur, w)?;
                prev = cur;
                len += 1;
            }

            if len > 2 {
                self.add_edge(prev, first, w)?;
            }
        }
        Ok(())
    }

    fn connect_clique(&mut self, nodes: &[Node], w: Weight) -> Result<()> {
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }
}
