//! Constructive heuristics for building an initial visiting order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor from target 0, O(n²)
//! - [`greedy_insertion`] — Cheapest insertion into a growing path, O(n³)

mod greedy_insertion;
mod nearest_neighbor;

pub use greedy_insertion::greedy_insertion;
pub use nearest_neighbor::nearest_neighbor;
