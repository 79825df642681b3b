use crate::graph::GraphError;
use thiserror::Error;

/// Errors raised while reading edges.
///
/// Only `Io` ends input; the others are reported and the reader moves on.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid format on line {line}: expected 'u v', found {found} token(s)")]
    Malformed { line: usize, found: usize },

    #[error("Rejected edge on line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether the reader can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Io(_))
    }
}
