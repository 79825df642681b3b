//! Asteroidal triple detection.
//!
//! Every unordered triple is tested in the graph's vertex insertion order.
//! For each member, its neighbors are deleted from a private copy of the graph
//! and the other two members must still be connected there. Deleting only the
//! open neighborhood is enough: the member itself is left isolated, so no path
//! can run through it.

use super::verdict::AsteroidalTriple;
use crate::graph::Graph;
use log::trace;

/// Returns the first asteroidal triple of `graph`, if any.
pub fn find_asteroidal_triple(graph: &Graph) -> Option<AsteroidalTriple> {
    let vertices: Vec<&str> = graph.vertices().collect();
    let n = vertices.len();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (u, v, w) = (vertices[i], vertices[j], vertices[k]);
                trace!("testing triple ({}, {}, {})", u, v, w);
                if is_asteroidal(graph, u, v, w) {
                    return Some(AsteroidalTriple {
                        u: u.to_string(),
                        v: v.to_string(),
                        w: w.to_string(),
                    });
                }
            }
        }
    }
    None
}

/// Checks the asteroidal property for one triple.
pub fn is_asteroidal(graph: &Graph, u: &str, v: &str, w: &str) -> bool {
    avoids_neighborhood(graph, u, v, w)
        && avoids_neighborhood(graph, u, w, v)
        && avoids_neighborhood(graph, v, w, u)
}

/// Reports whether `a` and `b` are connected once the neighbors of `far` are
/// deleted.
///
/// If `a` or `b` is itself a neighbor of `far` it disappears with the
/// neighborhood and the answer is `false`.
pub fn avoids_neighborhood(graph: &Graph, a: &str, b: &str, far: &str) -> bool {
    let derived = graph.without_vertices(graph.neighbors(far));
    derived.has_path(a, b)
}
