//! Immutable graph snapshot

use crate::graph::model::{Edge, Node};
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Collaboration graph snapshot.
///
/// Nodes keep their insertion order and edges their input order. The
/// undirected adjacency is derived once at construction; node weights are
/// positions in `nodes`, edge weights are positions in `edges`. A snapshot
/// is never mutated: filtering produces a new one.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: UnGraph<usize, usize>,
}

impl Graph {
    /// Assemble a snapshot from records that are already known to be valid.
    ///
    /// Callers go through [`crate::graph::GraphBuilder`] for raw input; the
    /// filter uses this directly since a subgraph of a valid graph is valid.
    pub(crate) fn assemble(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut adjacency = UnGraph::with_capacity(nodes.len(), edges.len());
        let mut index = HashMap::with_capacity(nodes.len());

        for (i, node) in nodes.iter().enumerate() {
            let idx = adjacency.add_node(i);
            debug_assert_eq!(idx.index(), i);
            index.insert(node.id.clone(), i);
        }

        for (i, edge) in edges.iter().enumerate() {
            if let (Some(&a), Some(&b)) = (index.get(&edge.endpoint_a), index.get(&edge.endpoint_b)) {
                adjacency.add_edge(NodeIndex::new(a), NodeIndex::new(b), i);
            }
        }

        Self {
            nodes,
            index,
            edges,
            adjacency,
        }
    }

    /// Graph with no nodes and no edges
    pub fn empty() -> Self {
        Self::assemble(Vec::new(), Vec::new())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolve both endpoints of an edge against this snapshot
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(&edge.endpoint_a)?, self.node(&edge.endpoint_b)?))
    }

    /// Number of incident edges; parallel edges count separately
    pub fn degree(&self, id: &str) -> usize {
        self.node_index(id)
            .map_or(0, |idx| self.adjacency.edges(idx).count())
    }

    /// Distinct neighbors of `id`, in node insertion order
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let Some(idx) = self.node_index(id) else {
            return Vec::new();
        };

        self.adjacency
            .neighbors(idx)
            .map(|n| self.adjacency[n])
            .sorted_unstable()
            .dedup()
            .map(|i| self.nodes[i].id.as_str())
            .collect()
    }

    /// Whether at least one edge joins `a` and `b`
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(ia), Some(ib)) => self.adjacency.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Edges incident to `id`, in input order
    pub fn incident_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).map(|&i| NodeIndex::new(i))
    }
}

// Two snapshots are equal when they hold the same nodes and edges in the
// same order; the adjacency is derived and not compared.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
