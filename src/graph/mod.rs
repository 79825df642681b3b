pub mod error;

mod store;
pub use store::Graph;

pub use error::GraphError;

/// Label type used for vertices.
pub type Label = String;
