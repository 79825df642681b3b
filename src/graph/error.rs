use thiserror::Error;

/// Errors raised while building a [`Graph`](super::Graph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Self-loops are not allowed: {0} -- {0}")]
    SelfLoop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_display() {
        let e = GraphError::SelfLoop("a".to_string());
        assert_eq!(e.to_string(), "Self-loops are not allowed: a -- a");
    }
}
