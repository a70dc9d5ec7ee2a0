//! Road-network graph model.
//!
//! The graph is built by an external collaborator (from OSM extracts, JSON
//! dumps, ...) and handed to the search engine fully materialized.

mod node;
mod road_graph;

pub use node::{Edge, Node};
pub use road_graph::Graph;
