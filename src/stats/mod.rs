//! Aggregate network statistics

use crate::config::Config;
use crate::graph::{Category, Graph, Node};
use serde::Serialize;
use std::collections::HashMap;

/// Whole-network metrics for one graph snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub node_count: usize,

    pub edge_count: usize,

    /// Sum of degrees / node count, full precision
    pub avg_degree: f64,

    /// Edge count / n(n-1)/2, 0 when n <= 1
    pub density: f64,

    /// Cluster count tracked by the caller
    pub clusters: usize,

    /// Highest h-index first, ties in node order
    pub top_researchers: Vec<Node>,

    /// Node count per category, in fixed category order
    pub category_breakdown: Vec<(Category, usize)>,
}

impl NetworkStats {
    /// Average degree rounded to 2 decimals
    pub fn avg_degree_display(&self) -> f64 {
        round_to(self.avg_degree, 2)
    }

    /// Density rounded to 4 decimals
    pub fn density_display(&self) -> f64 {
        round_to(self.density, 4)
    }

    /// Density as a percentage, rounded to 2 decimals
    pub fn density_percent(&self) -> f64 {
        round_to(self.density * 100.0, 2)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Degree of every node; each edge adds one to both endpoints
pub fn degree_map(graph: &Graph) -> HashMap<&str, usize> {
    let mut degrees: HashMap<&str, usize> = graph
        .nodes()
        .iter()
        .map(|n| (n.id.as_str(), 0))
        .collect();

    for edge in graph.edges() {
        for endpoint in [&edge.endpoint_a, &edge.endpoint_b] {
            if let Some(d) = degrees.get_mut(endpoint.as_str()) {
                *d += 1;
            }
        }
    }

    degrees
}

/// Network density: connected pairs over the maximum possible undirected
/// edges. Parallel edges between one pair count once, so the value stays in
/// `[0, 1]`; on a graph without parallel edges this is `edges / (n(n-1)/2)`.
pub fn density(graph: &Graph) -> f64 {
    let n = graph.node_count();
    if n <= 1 {
        return 0.0;
    }
    let possible = n * (n - 1) / 2;
    connected_pairs(graph) as f64 / possible as f64
}

/// Number of distinct unordered node pairs joined by at least one edge
pub fn connected_pairs(graph: &Graph) -> usize {
    let endpoint_slots: usize = graph
        .nodes()
        .iter()
        .map(|n| graph.neighbors(&n.id).len())
        .sum();
    endpoint_slots / 2
}

/// Compute stats with the default top-researchers length.
///
/// Returns `None` for a graph without nodes.
pub fn compute_stats(graph: &Graph, cluster_count: usize) -> Option<NetworkStats> {
    compute_stats_with(graph, cluster_count, Config::default().top_researchers)
}

/// Compute stats keeping the `top_n` researchers with the highest h-index
pub fn compute_stats_with(graph: &Graph, cluster_count: usize, top_n: usize) -> Option<NetworkStats> {
    if graph.is_empty() {
        log::info!("No nodes left after filtering, no stats to compute");
        return None;
    }

    let node_count = graph.node_count();
    let total_degree: usize = degree_map(graph).values().sum();
    let avg_degree = total_degree as f64 / node_count as f64;

    // Stable sort keeps node order among equal h-indices
    let mut ranked: Vec<&Node> = graph.nodes().iter().collect();
    ranked.sort_by(|a, b| b.h_index.cmp(&a.h_index));
    let top_researchers = ranked.into_iter().take(top_n).cloned().collect();

    let mut counts = [0usize; Category::COUNT];
    for node in graph.nodes() {
        counts[node.category.index()] += 1;
    }
    let category_breakdown = Category::ALL.into_iter().zip(counts).collect();

    let stats = NetworkStats {
        node_count,
        edge_count: graph.edge_count(),
        avg_degree,
        density: density(graph),
        clusters: cluster_count,
        top_researchers,
        category_breakdown,
    };

    log::info!(
        "Computed stats: {} nodes, {} edges, avg degree {:.2}, density {:.4}",
        stats.node_count,
        stats.edge_count,
        stats.avg_degree,
        stats.density
    );

    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn node(id: &str, h_index: u32) -> Node {
        Node {
            id: id.to_string(),
            name: id.to_string(),
            category: Category::ComputerScience,
            publication_count: 0,
            h_index,
            institution: String::new(),
            keywords: Vec::new(),
            join_date: date("2015-01-01"),
        }
    }

    fn edge(a: &str, b: &str) -> Edge {
        Edge {
            endpoint_a: a.to_string(),
            endpoint_b: b.to_string(),
            strength: 5,
            co_authored_publications: 1,
            first_collaboration: date("2010-01-01"),
            last_collaboration: date("2020-01-01"),
        }
    }

    #[test]
    fn empty_graph_has_no_stats() {
        assert_eq!(compute_stats(&Graph::empty(), 3), None);
    }

    #[test]
    fn path_of_three() {
        let graph = Graph::from_parts(
            vec![node("A", 1), node("B", 2), node("C", 3)],
            vec![edge("A", "B"), edge("B", "C")],
        )
        .unwrap();

        let stats = compute_stats(&graph, 2).unwrap();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert!((stats.avg_degree - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.avg_degree_display(), 1.33);
        assert_eq!(stats.density_display(), 0.6667);
        assert_eq!(stats.density_percent(), 66.67);
        assert_eq!(stats.clusters, 2);
        assert_eq!(
            stats.category_breakdown[0],
            (Category::ComputerScience, 3)
        );
    }

    #[test]
    fn parallel_edges_count_once_in_density() {
        let graph = Graph::from_parts(
            vec![node("a", 1), node("b", 1)],
            vec![edge("a", "b"), edge("b", "a")],
        )
        .unwrap();

        assert_eq!(connected_pairs(&graph), 1);
        assert_eq!(density(&graph), 1.0);

        // Degrees and edge count still see both edges
        let stats = compute_stats(&graph, 0).unwrap();
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.avg_degree, 2.0);
        assert_eq!(stats.density, 1.0);
    }

    #[test]
    fn single_node_has_zero_density() {
        let graph = Graph::from_parts(vec![node("solo", 4)], Vec::new()).unwrap();
        let stats = compute_stats(&graph, 0).unwrap();
        assert_eq!(stats.density, 0.0);
        assert_eq!(stats.avg_degree, 0.0);
    }

    #[test]
    fn top_researchers_are_stable_and_truncated() {
        let graph = Graph::from_parts(
            (0..8).map(|i| node(&format!("n{i}"), if i % 2 == 0 { 10 } else { 20 })).collect(),
            Vec::new(),
        )
        .unwrap();

        let stats = compute_stats(&graph, 0).unwrap();
        let ids: Vec<&str> = stats.top_researchers.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3", "n5", "n7", "n0"]);

        let stats = compute_stats_with(&graph, 0, 2).unwrap();
        assert_eq!(stats.top_researchers.len(), 2);
    }

    #[test]
    fn degrees_satisfy_handshake() {
        let graph = Graph::from_parts(
            vec![node("a", 0), node("b", 0), node("c", 0)],
            vec![edge("a", "b"), edge("b", "a"), edge("c", "a")],
        )
        .unwrap();

        let degrees = degree_map(&graph);
        assert_eq!(degrees["a"], 3);
        assert_eq!(degrees["b"], 2);
        assert_eq!(degrees.values().sum::<usize>(), 2 * graph.edge_count());
    }
}
