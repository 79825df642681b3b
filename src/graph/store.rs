use super::error::GraphError;
use super::Label;
use petgraph::algo::has_path_connecting;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableUnGraph;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

/// Undirected simple graph keyed by string labels.
///
/// # Invariants
///
/// - No self-loops; [`add_edge`](Self::add_edge) rejects them
/// - At most one edge per unordered vertex pair
/// - Every edge endpoint is a vertex of the graph
/// - Vertex handles are stable `NodeIndex` values that survive removals, so a
///   derived subgraph keeps the indices of its parent
///
/// # Example
///
/// ```
/// use interval_check::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b").unwrap();
/// graph.add_edge("b", "c").unwrap();
///
/// assert!(graph.has_path("a", "c"));
/// let split = graph.without_vertices(["b"]);
/// assert!(!split.has_path("a", "c"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: StableUnGraph<Label, ()>,
    /// Maps label → node index for lookups by name.
    node_by_label: HashMap<Label, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of edges.
    ///
    /// # Errors
    ///
    /// Returns `SelfLoop` on the first edge whose endpoints coincide.
    pub fn from_edges<I, A, B>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref())?;
        }
        Ok(graph)
    }

    /// Adds an isolated vertex, or returns the existing handle.
    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        if let Some(&node) = self.node_by_label.get(label) {
            return node;
        }
        let node = self.graph.add_node(label.to_string());
        self.node_by_label.insert(label.to_string(), node);
        node
    }

    /// Records the edge `u -- v`, inserting missing endpoints.
    ///
    /// Returns `true` if the edge is new and `false` if it was already present.
    ///
    /// # Errors
    ///
    /// - `SelfLoop` if `u == v`
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<bool, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u.to_string()));
        }
        let a = self.add_vertex(u);
        let b = self.add_vertex(v);
        if self.graph.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(a, b, ());
        Ok(true)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_by_label.contains_key(label)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns vertex labels in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .filter_map(move |n| self.graph.node_weight(n).map(|l| l.as_str()))
    }

    /// Returns edges as label pairs, in the order the store holds them.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((self.graph[a].as_str(), self.graph[b].as_str()))
        })
    }

    pub fn are_adjacent(&self, u: &str, v: &str) -> bool {
        match (self.node_of(u), self.node_of(v)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Returns the labels adjacent to `label`.
    ///
    /// Unknown and isolated vertices both yield an empty set; use
    /// [`contains`](Self::contains) to tell them apart.
    pub fn neighbors(&self, label: &str) -> BTreeSet<&str> {
        match self.node_of(label) {
            Some(node) => self
                .graph
                .neighbors(node)
                .map(|n| self.graph[n].as_str())
                .collect(),
            None => BTreeSet::new(),
        }
    }

    /// Returns the induced subgraph on every vertex not listed in `removed`.
    ///
    /// Labels that are not in the graph are ignored. `self` is left untouched.
    pub fn without_vertices<I, S>(&self, removed: I) -> Graph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut derived = self.clone();
        for label in removed {
            if let Some(node) = derived.node_by_label.remove(label.as_ref()) {
                derived.graph.remove_node(node);
            }
        }
        derived
    }

    /// Reports whether `u` and `v` are joined by a path.
    ///
    /// Returns `false` when either endpoint is missing.
    pub fn has_path(&self, u: &str, v: &str) -> bool {
        match (self.node_of(u), self.node_of(v)) {
            (Some(a), Some(b)) => has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }

    /// Returns the node index for a label, if it exists.
    pub fn node_of(&self, label: &str) -> Option<NodeIndex> {
        self.node_by_label.get(label).copied()
    }

    /// Returns the label stored at a node index, if it exists.
    pub fn label_of(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(|l| l.as_str())
    }

    /// Returns reference to the underlying graph.
    pub fn graph(&self) -> &StableUnGraph<Label, ()> {
        &self.graph
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph {{ vertices: {}, edges: {} }}",
            self.vertex_count(),
            self.edge_count()
        )
    }
}
