/*!
# Graph Representations

Currently a single storage backend is provided:

- [`WeightMatrix`]: a dense, symmetric `n x n` matrix of edge weights where `0` means "no edge".

Every algorithm in [`crate::algo`] is written against the traits in [`crate::ops`], so further
representations only need to implement those.
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
