use crate::graph::Graph;
use petgraph::dot::{Config, Dot};

/// Renders `graph` in Graphviz DOT format.
///
/// Layout is left to Graphviz (`neato` or `fdp` give a force-directed
/// drawing).
pub fn to_dot(graph: &Graph) -> String {
    let labelled = graph.graph().map(|_, label| label.as_str(), |_, _| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_undirected_graph() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
        let dot = to_dot(&graph);
        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("\"a\""));
        assert!(dot.contains("\"c\""));
        assert_eq!(dot.matches("--").count(), 2);
    }

    #[test]
    fn renders_isolated_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex("solo");
        let dot = to_dot(&graph);
        assert!(dot.contains("\"solo\""));
        assert!(!dot.contains("--"));
    }
}
