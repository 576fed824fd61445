//! Cluster statistics and metrics

use crate::cluster::Cluster;
use crate::graph::Graph;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Graph-side summary of a spatial cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub id: u32,

    pub size: usize,

    /// Internal edges / potential undirected edges
    pub density: f64,

    /// Members with the most collaborations inside the cluster
    pub central_members: Vec<String>,

    /// Fraction of the graph's nodes held by this cluster
    pub share: f64,
}

/// Summarize a cluster against the graph it was computed from
pub fn summarize(graph: &Graph, cluster: &Cluster, central_count: usize) -> ClusterSummary {
    ClusterSummary {
        id: cluster.id,
        size: cluster.size,
        density: calculate_density(graph, &cluster.members),
        central_members: central_members(graph, &cluster.members, central_count),
        share: share(cluster, graph.node_count()),
    }
}

/// Calculate density (internal edges / potential undirected edges).
///
/// Clusters with at most one member have density 0.
pub fn calculate_density(graph: &Graph, members: &[String]) -> f64 {
    let n = members.len();
    if n <= 1 {
        return 0.0;
    }

    let potential_edges = n * (n - 1) / 2;

    let member_set: HashSet<&str> = members.iter().map(String::as_str).collect();
    let actual_edges = graph
        .edges()
        .iter()
        .filter(|e| member_set.contains(e.endpoint_a.as_str()) && member_set.contains(e.endpoint_b.as_str()))
        .count();

    actual_edges as f64 / potential_edges as f64
}

/// Up to `top_n` members ranked by collaborations with other members.
///
/// Equal degrees keep member order.
pub fn central_members(graph: &Graph, members: &[String], top_n: usize) -> Vec<String> {
    let mut internal_degree: HashMap<&str, usize> =
        members.iter().map(|m| (m.as_str(), 0)).collect();

    for edge in graph.edges() {
        let a = edge.endpoint_a.as_str();
        let b = edge.endpoint_b.as_str();
        if internal_degree.contains_key(a) && internal_degree.contains_key(b) {
            for endpoint in [a, b] {
                if let Some(d) = internal_degree.get_mut(endpoint) {
                    *d += 1;
                }
            }
        }
    }

    let mut ranked: Vec<(&String, usize)> = members
        .iter()
        .map(|m| (m, internal_degree[m.as_str()]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(m, _)| m.clone())
        .collect()
}

/// Fraction of `total_nodes` held by the cluster, 0 for an empty graph
pub fn share(cluster: &Cluster, total_nodes: usize) -> f64 {
    if total_nodes == 0 {
        return 0.0;
    }
    cluster.size as f64 / total_nodes as f64
}
