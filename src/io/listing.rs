use crate::graph::Graph;
use std::io::{self, Write};

/// Writes a header followed by one `(u, v)` line per edge, in store order.
pub fn write_edges<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "Graph edges:")?;
    for (u, v) in graph.edges() {
        writeln!(out, "({}, {})", u, v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_edge() {
        let graph = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
        let mut out = Vec::new();
        write_edges(&graph, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Graph edges:\n(a, b)\n(b, c)\n"
        );
    }

    #[test]
    fn empty_graph_prints_header_only() {
        let mut out = Vec::new();
        write_edges(&Graph::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Graph edges:\n");
    }
}
