//! Console and file collaborators around the recognizer.
//!
//! - [`EdgeReader`] - builds a graph from `u v` lines
//! - [`write_edges`] - lists the edges of a graph
//! - [`to_dot`] - Graphviz drawing of a graph

pub mod error;

mod dot;
mod listing;
mod reader;

pub use dot::to_dot;
pub use error::InputError;
pub use listing::write_edges;
pub use reader::{parse_edge, EdgeReader};
