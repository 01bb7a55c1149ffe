//! Board-independent primitives.
//!
//! - [`coord`]: 4D integer coordinates and deltas, plus the king offset set.
//! - [`color`]: the two sides.

pub mod color;
pub mod coord;
