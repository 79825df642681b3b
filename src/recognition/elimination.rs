//! Perfect elimination ordering search.

use super::verdict::EliminationFailure;
use crate::graph::{Graph, Label};
use log::trace;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// Peels simplicial vertices until the graph is empty.
///
/// At each step the first simplicial vertex, in insertion order, among the
/// remaining ones is eliminated. A graph is chordal exactly when this never
/// gets stuck, so greedy choice is safe.
///
/// # Errors
///
/// Returns the peeled prefix and the remaining vertices when none of them is
/// simplicial.
pub fn perfect_elimination_ordering(graph: &Graph) -> Result<Vec<Label>, EliminationFailure> {
    let g = graph.graph();
    let mut remaining: Vec<NodeIndex> = g.node_indices().collect();
    let mut alive: HashSet<NodeIndex> = remaining.iter().copied().collect();
    let mut ordering = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let Some(pos) = remaining
            .iter()
            .position(|&node| is_simplicial_among(graph, node, &alive))
        else {
            let label = |n: &NodeIndex| g[*n].clone();
            return Err(EliminationFailure {
                eliminated: ordering,
                stuck: remaining.iter().map(label).collect(),
            });
        };

        let node = remaining.remove(pos);
        alive.remove(&node);
        trace!("eliminated {}", g[node]);
        ordering.push(g[node].clone());
    }
    Ok(ordering)
}

/// Reports whether the neighbors of `label` form a clique.
///
/// Unknown vertices are not simplicial.
pub fn is_simplicial(graph: &Graph, label: &str) -> bool {
    let Some(node) = graph.node_of(label) else {
        return false;
    };
    let alive: HashSet<NodeIndex> = graph.graph().node_indices().collect();
    is_simplicial_among(graph, node, &alive)
}

/// Checks that `ordering` is a perfect elimination ordering of `graph`.
///
/// Every vertex must appear exactly once and its later neighbors must be
/// pairwise adjacent.
pub fn is_perfect_elimination_ordering<S: AsRef<str>>(graph: &Graph, ordering: &[S]) -> bool {
    if ordering.len() != graph.vertex_count() {
        return false;
    }
    let mut alive: HashSet<NodeIndex> = graph.graph().node_indices().collect();
    for label in ordering {
        let Some(node) = graph.node_of(label.as_ref()) else {
            return false;
        };
        if !alive.contains(&node) || !is_simplicial_among(graph, node, &alive) {
            return false;
        }
        alive.remove(&node);
    }
    true
}

fn is_simplicial_among(graph: &Graph, node: NodeIndex, alive: &HashSet<NodeIndex>) -> bool {
    let g = graph.graph();
    let around: Vec<NodeIndex> = g.neighbors(node).filter(|n| alive.contains(n)).collect();
    around.iter().enumerate().all(|(i, &a)| {
        around[i + 1..].iter().all(|&b| g.find_edge(a, b).is_some())
    })
}
