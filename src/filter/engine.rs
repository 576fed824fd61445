//! Filter engine: graph + predicates -> subgraph

use crate::config::Config;
use crate::filter::FilterSpec;
use crate::graph::{Graph, Node};
use rayon::prelude::*;
use std::collections::HashSet;

/// Filter a graph with the default parallel threshold
pub fn filter_graph(graph: &Graph, spec: &FilterSpec) -> Graph {
    filter_graph_with(graph, spec, Config::default().parallel_threshold)
}

/// Filter a graph, evaluating node predicates on the rayon pool when the
/// graph has more than `parallel_threshold` nodes.
///
/// Node and edge order are preserved. An empty result is a valid graph.
pub fn filter_graph_with(graph: &Graph, spec: &FilterSpec, parallel_threshold: usize) -> Graph {
    let nodes: Vec<Node> = if graph.node_count() > parallel_threshold {
        graph
            .nodes()
            .par_iter()
            .filter(|node| spec.accepts_node(node))
            .cloned()
            .collect()
    } else {
        graph
            .nodes()
            .iter()
            .filter(|node| spec.accepts_node(node))
            .cloned()
            .collect()
    };

    let kept: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    // Both endpoints must survive the node filter
    let edges = graph
        .edges()
        .iter()
        .filter(|edge| {
            kept.contains(edge.endpoint_a.as_str())
                && kept.contains(edge.endpoint_b.as_str())
                && spec.accepts_edge(edge)
        })
        .cloned()
        .collect();

    let filtered = Graph::assemble(nodes, edges);

    log::info!(
        "Filter kept {}/{} nodes and {}/{} edges",
        filtered.node_count(),
        graph.node_count(),
        filtered.edge_count(),
        graph.edge_count()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Category, Edge};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn node(id: &str, category: Category, pubs: u32, h: u32, joined: &str) -> Node {
        Node {
            id: id.to_string(),
            name: format!("Dr. {id}"),
            category,
            publication_count: pubs,
            h_index: h,
            institution: "Institute".to_string(),
            keywords: vec!["Graphs".to_string()],
            join_date: date(joined),
        }
    }

    fn edge(a: &str, b: &str, strength: u8, first: &str, last: &str) -> Edge {
        Edge {
            endpoint_a: a.to_string(),
            endpoint_b: b.to_string(),
            strength,
            co_authored_publications: 1,
            first_collaboration: date(first),
            last_collaboration: date(last),
        }
    }

    fn triangle_path() -> Graph {
        Graph::from_parts(
            vec![
                node("A", Category::ComputerScience, 10, 5, "2012-01-01"),
                node("B", Category::ComputerScience, 20, 8, "2013-01-01"),
                node("C", Category::ComputerScience, 30, 12, "2014-01-01"),
            ],
            vec![
                edge("A", "B", 5, "2010-01-01", "2020-01-01"),
                edge("B", "C", 2, "2015-01-01", "2021-01-01"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn strength_range_drops_weak_edges_only() {
        let graph = triangle_path();
        let spec = FilterSpec::default().with_strength_range(3, 10).unwrap();
        let filtered = filter_graph(&graph, &spec);

        assert_eq!(filtered.node_count(), 3);
        assert_eq!(filtered.edges(), &[edge("A", "B", 5, "2010-01-01", "2020-01-01")]);
    }

    #[test]
    fn removing_a_node_removes_its_edges() {
        let graph = triangle_path();
        let spec = FilterSpec::default().with_min_h_index(6);
        let filtered = filter_graph(&graph, &spec);

        let ids: Vec<&str> = filtered.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C"]);
        assert_eq!(filtered.edge_count(), 1);
        assert!(filtered.are_connected("B", "C"));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let graph = triangle_path();
        let spec = FilterSpec::default().with_min_publications(20);
        let filtered = filter_graph(&graph, &spec);
        assert!(filtered.contains("B"));
        assert!(!filtered.contains("A"));
    }

    #[test]
    fn category_filter() {
        let graph = Graph::from_parts(
            vec![
                node("x", Category::Biology, 1, 1, "2015-01-01"),
                node("y", Category::Chemistry, 1, 1, "2015-01-01"),
            ],
            Vec::new(),
        )
        .unwrap();
        let spec = FilterSpec::default().with_categories([Category::Chemistry]);
        let filtered = filter_graph(&graph, &spec);
        assert_eq!(filtered.nodes().len(), 1);
        assert_eq!(filtered.nodes()[0].id, "y");
    }

    #[test]
    fn join_date_window_is_inclusive() {
        let graph = triangle_path();
        let spec = FilterSpec::default()
            .with_date_range(date("2012-01-01"), date("2013-01-01"))
            .unwrap();
        let filtered = filter_graph(&graph, &spec);
        assert_eq!(filtered.node_count(), 2);
        assert!(!filtered.contains("C"));
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let graph = triangle_path();
        let filtered = filter_graph(&graph, &FilterSpec::default().with_query("dr. c"));
        assert_eq!(filtered.node_count(), 1);
        assert!(filtered.contains("C"));
        assert_eq!(filtered.edge_count(), 0);
    }

    #[test]
    fn no_match_yields_empty_graph() {
        let graph = triangle_path();
        let filtered = filter_graph(&graph, &FilterSpec::default().with_query("zzz"));
        assert!(filtered.is_empty());
        assert_eq!(filtered.edge_count(), 0);
    }

    #[test]
    fn parallel_path_preserves_order() {
        let graph = triangle_path();
        let spec = FilterSpec::default().with_min_h_index(6);
        assert_eq!(filter_graph_with(&graph, &spec, 0), filter_graph(&graph, &spec));
    }

    #[test]
    fn filtering_is_idempotent() {
        let graph = triangle_path();
        let spec = FilterSpec::default()
            .with_strength_range(3, 10)
            .unwrap()
            .with_min_publications(15);
        let once = filter_graph(&graph, &spec);
        assert_eq!(filter_graph(&once, &spec), once);
    }
}
