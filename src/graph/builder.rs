//! Graph construction module

use crate::error::{AnalyzerError, Result};
use crate::graph::model::{Edge, Node, STRENGTH_MAX, STRENGTH_MIN};
use crate::graph::Graph;
use std::collections::HashMap;

/// Builder for incrementally constructing a validated [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from string IDs to node positions
    id_to_index: HashMap<String, usize>,

    /// Nodes in insertion order
    nodes: Vec<Node>,

    /// Edges in insertion order, validated on build
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(node_capacity),
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Add a node, rejecting a repeated id
    pub fn add_node(&mut self, node: Node) -> Result<&mut Self> {
        if self.id_to_index.contains_key(&node.id) {
            return Err(AnalyzerError::DuplicateNode(node.id));
        }

        self.id_to_index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);

        Ok(self)
    }

    /// Queue an edge; endpoints may refer to nodes added later
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Validate every edge and build the graph
    pub fn build(self) -> Result<Graph> {
        for edge in &self.edges {
            self.validate_edge(edge)?;
        }

        log::debug!(
            "Built graph with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );

        Ok(Graph::assemble(self.nodes, self.edges))
    }

    fn validate_edge(&self, edge: &Edge) -> Result<()> {
        let invalid = |reason: &str| AnalyzerError::InvalidEdge {
            a: edge.endpoint_a.clone(),
            b: edge.endpoint_b.clone(),
            reason: reason.to_string(),
        };

        if edge.endpoint_a == edge.endpoint_b {
            return Err(invalid("self-loop"));
        }
        if !self.id_to_index.contains_key(&edge.endpoint_a) {
            return Err(invalid(&format!("unknown node {}", edge.endpoint_a)));
        }
        if !self.id_to_index.contains_key(&edge.endpoint_b) {
            return Err(invalid(&format!("unknown node {}", edge.endpoint_b)));
        }
        if !(STRENGTH_MIN..=STRENGTH_MAX).contains(&edge.strength) {
            return Err(AnalyzerError::InvalidStrength {
                a: edge.endpoint_a.clone(),
                b: edge.endpoint_b.clone(),
                strength: edge.strength,
            });
        }
        if edge.first_collaboration > edge.last_collaboration {
            return Err(AnalyzerError::InvalidCollaborationWindow {
                a: edge.endpoint_a.clone(),
                b: edge.endpoint_b.clone(),
            });
        }

        Ok(())
    }
}

impl Graph {
    /// Build a graph from raw node and edge collections
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Graph> {
        let mut builder = GraphBuilder::with_capacity(nodes.len(), edges.len());
        for node in nodes {
            builder.add_node(node)?;
        }
        for edge in edges {
            builder.add_edge(edge);
        }
        builder.build()
    }
}
