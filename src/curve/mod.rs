//! Dragon curve geometry.
//!
//! This module folds the turn sequence and walks it into a polyline of
//! integer grid points.

mod sequence;
mod walker;

pub use sequence::{turns_from_bits, Turn, TurnSequence};
pub use walker::{Bounds, Path, PathWalker};
