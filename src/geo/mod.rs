//! Geographic coordinates and great-circle distance.
//!
//! The haversine distance serves two roles: the heuristic guiding A* and
//! greedy best-first search, and a stand-in cost when no road graph is
//! available.

mod point;

pub use point::{haversine, Point, EARTH_RADIUS_M};
