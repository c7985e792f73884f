/*!
# Node Representation

We choose `Node = u32` as graphs stored in a dense weight matrix never come close to `2^32` nodes.
This allows us to manipulate node values directly without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes are numbered `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
