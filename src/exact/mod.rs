//! Exact route-order solvers.
//!
//! - [`held_karp`] — Open-path dynamic program, O(2ⁿ · n²)
//! - [`branch_and_bound`] — Closed tour from a fixed start, depth-first with pruning

mod branch_bound;
mod held_karp;

pub use branch_bound::{branch_and_bound, BranchBoundResult};
pub use held_karp::{held_karp, MAX_HELD_KARP_TARGETS};
