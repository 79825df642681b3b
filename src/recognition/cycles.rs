//! Long-cycle detection.
//!
//! Two strategies are available:
//!
//! - [`CycleCheck::Induced`] finds a chordless cycle on at least four vertices.
//!   For a vertex `v` and two non-adjacent neighbors `a`, `b`, any `a`-`b` path
//!   that avoids `v` and the rest of `N(v)` closes a cycle through `v`. Taking
//!   the shortest such path makes the cycle chordless. Every chordless cycle
//!   of length four or more arises this way, so the search is exact.
//! - [`CycleCheck::LegacyBasis`] builds a fundamental cycle basis from a BFS
//!   spanning forest and flags the first basis cycle with more than three
//!   vertices. It can miss induced cycles that are not in the basis and it can
//!   flag cycles that have chords.

use super::verdict::{CycleCheck, LongCycle};
use crate::graph::Graph;
use log::trace;
use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::visit::NodeFiltered;
use std::collections::{HashMap, HashSet, VecDeque};

/// Minimum number of vertices for a cycle to count as long.
pub const LONG_CYCLE_MIN: usize = 4;

/// Returns a cycle longer than three found by `strategy`, if any.
pub fn find_long_cycle(graph: &Graph, strategy: CycleCheck) -> Option<LongCycle> {
    let cycle = match strategy {
        CycleCheck::Induced => find_chordless_cycle(graph)?,
        CycleCheck::LegacyBasis => cycle_basis(graph)
            .into_iter()
            .find(|c| c.len() >= LONG_CYCLE_MIN)?,
    };
    Some(LongCycle { cycle, strategy })
}

/// Returns a chordless cycle on at least four vertices, if any.
pub fn find_chordless_cycle(graph: &Graph) -> Option<Vec<String>> {
    let g = graph.graph();

    for v in g.node_indices() {
        let mut around: Vec<NodeIndex> = g.neighbors(v).collect();
        around.sort();

        for (i, &a) in around.iter().enumerate() {
            for &b in &around[i + 1..] {
                if g.find_edge(a, b).is_some() {
                    continue;
                }

                let blocked: HashSet<NodeIndex> = around
                    .iter()
                    .copied()
                    .filter(|&n| n != a && n != b)
                    .chain(std::iter::once(v))
                    .collect();
                let view = NodeFiltered::from_fn(g, |n: NodeIndex| !blocked.contains(&n));

                if let Some((_, path)) = astar(&view, a, |n| n == b, |_| 1usize, |_| 0) {
                    trace!("chordless cycle through {:?} via {:?}", v, path);
                    let cycle = std::iter::once(v)
                        .chain(path)
                        .map(|n| g[n].clone())
                        .collect();
                    return Some(cycle);
                }
            }
        }
    }
    None
}

/// Computes a fundamental cycle basis.
///
/// A BFS spanning forest is grown from each unvisited vertex in insertion
/// order. Each non-tree edge then closes one cycle with the tree path between
/// its endpoints. Cycles are returned in edge order, each starting at the
/// first endpoint of its closing edge.
pub fn cycle_basis(graph: &Graph) -> Vec<Vec<String>> {
    let g = graph.graph();
    let mut parent: HashMap<NodeIndex, Option<NodeIndex>> = HashMap::new();
    let mut depth: HashMap<NodeIndex, usize> = HashMap::new();

    for root in g.node_indices() {
        if parent.contains_key(&root) {
            continue;
        }
        parent.insert(root, None);
        depth.insert(root, 0);

        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let d = depth[&node];
            for next in g.neighbors(node) {
                if !parent.contains_key(&next) {
                    parent.insert(next, Some(node));
                    depth.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
    }

    let is_tree_edge = |x: NodeIndex, y: NodeIndex| parent[&y] == Some(x) || parent[&x] == Some(y);

    let mut basis = Vec::new();
    for edge in g.edge_indices() {
        let Some((x, y)) = g.edge_endpoints(edge) else {
            continue;
        };
        if is_tree_edge(x, y) {
            continue;
        }

        // Climb both endpoints to their lowest common ancestor.
        let (mut left, mut right) = (vec![x], vec![y]);
        let (mut a, mut b) = (x, y);
        while a != b {
            if depth[&a] >= depth[&b] {
                if let Some(up) = parent[&a] {
                    a = up;
                    left.push(a);
                }
            } else if let Some(up) = parent[&b] {
                b = up;
                right.push(b);
            }
        }
        // `left` ends at the ancestor; drop it from `right` before joining.
        right.pop();
        right.reverse();
        left.extend(right);

        basis.push(left.into_iter().map(|n| g[n].clone()).collect());
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_graph(labels: &[&str]) -> Graph {
        let n = labels.len();
        Graph::from_edges((0..n).map(|i| (labels[i], labels[(i + 1) % n]))).unwrap()
    }

    fn assert_is_cycle(graph: &Graph, cycle: &[String]) {
        let n = cycle.len();
        for i in 0..n {
            assert!(
                graph.are_adjacent(&cycle[i], &cycle[(i + 1) % n]),
                "{} and {} are not adjacent",
                cycle[i],
                cycle[(i + 1) % n]
            );
        }
        let distinct: HashSet<&String> = cycle.iter().collect();
        assert_eq!(distinct.len(), n);
    }

    fn assert_chordless(graph: &Graph, cycle: &[String]) {
        let n = cycle.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                assert!(
                    !graph.are_adjacent(&cycle[i], &cycle[j]),
                    "chord {} -- {}",
                    cycle[i],
                    cycle[j]
                );
            }
        }
    }

    #[test]
    fn square_is_a_chordless_cycle() {
        let g = cycle_graph(&["a", "b", "c", "d"]);
        let cycle = find_chordless_cycle(&g).expect("C4 is chordless");
        assert_eq!(cycle.len(), 4);
        assert_is_cycle(&g, &cycle);
        assert_chordless(&g, &cycle);
    }

    #[test]
    fn triangle_has_no_long_cycle() {
        let g = cycle_graph(&["a", "b", "c"]);
        assert_eq!(find_chordless_cycle(&g), None);
        assert_eq!(find_long_cycle(&g, CycleCheck::LegacyBasis), None);
    }

    #[test]
    fn chorded_square_is_chordal() {
        let mut g = cycle_graph(&["a", "b", "c", "d"]);
        g.add_edge("a", "c").unwrap();
        assert_eq!(find_chordless_cycle(&g), None);
    }

    #[test]
    fn hexagon_with_pendant_tail_finds_full_cycle() {
        let mut g = cycle_graph(&["1", "2", "3", "4", "5", "6"]);
        g.add_edge("6", "tail").unwrap();
        let cycle = find_chordless_cycle(&g).unwrap();
        assert_eq!(cycle.len(), 6);
        assert_is_cycle(&g, &cycle);
        assert_chordless(&g, &cycle);
    }

    #[test]
    fn fan_has_no_long_cycle() {
        // Hub joined to every vertex of a path: chordal.
        let g = Graph::from_edges([
            ("p1", "p2"),
            ("p2", "p3"),
            ("p3", "p4"),
            ("h", "p1"),
            ("h", "p2"),
            ("h", "p3"),
            ("h", "p4"),
        ])
        .unwrap();
        assert_eq!(find_chordless_cycle(&g), None);
    }

    #[test]
    fn basis_size_is_cyclomatic_number() {
        // Two triangles sharing an edge plus a separate square.
        let g = Graph::from_edges([
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "a"),
            ("w", "x"),
            ("x", "y"),
            ("y", "z"),
            ("z", "w"),
        ])
        .unwrap();
        let basis = cycle_basis(&g);
        // m - n + components = 9 - 8 + 2
        assert_eq!(basis.len(), 3);
        for cycle in &basis {
            assert_is_cycle(&g, cycle);
        }
    }

    #[test]
    fn basis_of_forest_is_empty() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("x", "y")]).unwrap();
        assert!(cycle_basis(&g).is_empty());
    }

    #[test]
    fn legacy_basis_sees_only_triangles_under_a_hub() {
        let g = Graph::from_edges([("r", "a"), ("r", "b"), ("a", "c"), ("b", "c"), ("r", "c")])
            .unwrap();
        // Exact check sees the chords.
        assert_eq!(find_long_cycle(&g, CycleCheck::Induced), None);
        // BFS from `r` makes a, b, c tree children of `r`; every basis cycle is
        // a triangle here.
        assert_eq!(find_long_cycle(&g, CycleCheck::LegacyBasis), None);
    }

    #[test]
    fn legacy_basis_flags_square() {
        let g = cycle_graph(&["a", "b", "c", "d"]);
        let found = find_long_cycle(&g, CycleCheck::LegacyBasis).unwrap();
        assert_eq!(found.strategy, CycleCheck::LegacyBasis);
        assert_eq!(found.len(), 4);
        assert_is_cycle(&g, &found.cycle);
    }

    #[test]
    fn legacy_basis_can_flag_a_chorded_cycle() {
        // Square a-b-c-d with chord b-d. The BFS tree from `a` holds a-b and
        // a-d, so the edge closing through `c` yields a 4-vertex basis cycle.
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("b", "d")])
            .unwrap();
        assert_eq!(find_long_cycle(&g, CycleCheck::Induced), None);
        let legacy = find_long_cycle(&g, CycleCheck::LegacyBasis).unwrap();
        assert_eq!(legacy.len(), 4);
    }
}
