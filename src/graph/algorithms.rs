//! Graph algorithms for analysis

use crate::graph::model::{Edge, Node};
use crate::graph::Graph;

/// Local clustering coefficient of a node.
///
/// Fraction of unordered neighbor pairs that are themselves connected.
/// Nodes with fewer than two distinct neighbors (including unknown ids) get 0.
pub fn clustering_coefficient(graph: &Graph, node_id: &str) -> f64 {
    let neighbors = graph.neighbors(node_id);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut connected_pairs = 0usize;
    for (i, a) in neighbors.iter().enumerate() {
        for b in &neighbors[i + 1..] {
            if graph.are_connected(a, b) {
                connected_pairs += 1;
            }
        }
    }

    let possible_pairs = k * (k - 1) / 2;
    connected_pairs as f64 / possible_pairs as f64
}

/// A collaboration seen from one researcher's side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collaboration<'g> {
    pub edge: &'g Edge,
    pub collaborator: &'g Node,
}

/// Every collaboration of `node_id`, strongest first.
///
/// Equal strengths keep edge input order.
pub fn collaborations<'g>(graph: &'g Graph, node_id: &str) -> Vec<Collaboration<'g>> {
    let mut found: Vec<Collaboration<'g>> = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let other = edge.other(node_id)?;
            let collaborator = graph.node(other)?;
            Some(Collaboration { edge, collaborator })
        })
        .collect();

    found.sort_by(|a, b| b.edge.strength.cmp(&a.edge.strength));
    found
}

/// Co-authored publications summed over every collaboration of `node_id`
pub fn total_coauthored(graph: &Graph, node_id: &str) -> u32 {
    graph
        .incident_edges(node_id)
        .map(|e| e.co_authored_publications)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Category;
    use chrono::NaiveDate;

    fn node(id: &str) -> Node {
        Node {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::ComputerScience,
            publication_count: 0,
            h_index: 0,
            institution: String::new(),
            keywords: Vec::new(),
            join_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
        }
    }

    fn edge(a: &str, b: &str, strength: u8, pubs: u32) -> Edge {
        Edge {
            endpoint_a: a.to_string(),
            endpoint_b: b.to_string(),
            strength,
            co_authored_publications: pubs,
            first_collaboration: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            last_collaboration: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    fn graph(ids: &[&str], edges: Vec<Edge>) -> Graph {
        Graph::from_parts(ids.iter().map(|id| node(id)).collect(), edges).unwrap()
    }

    #[test]
    fn path_center_has_zero_coefficient() {
        let g = graph(&["a", "b", "c"], vec![edge("a", "b", 5, 1), edge("b", "c", 2, 1)]);
        assert_eq!(clustering_coefficient(&g, "b"), 0.0);
        assert_eq!(clustering_coefficient(&g, "a"), 0.0);
    }

    #[test]
    fn complete_neighborhood_has_coefficient_one() {
        let g = graph(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b", 1, 1),
                edge("a", "c", 1, 1),
                edge("a", "d", 1, 1),
                edge("b", "c", 1, 1),
                edge("c", "d", 1, 1),
                edge("d", "b", 1, 1),
            ],
        );
        assert_eq!(clustering_coefficient(&g, "a"), 1.0);
    }

    #[test]
    fn partial_neighborhood() {
        // a has neighbors b, c, d; only b-c is connected
        let g = graph(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b", 1, 1),
                edge("a", "c", 1, 1),
                edge("a", "d", 1, 1),
                edge("b", "c", 1, 1),
            ],
        );
        assert!((clustering_coefficient(&g, "a") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_edges_do_not_inflate_neighbors() {
        let g = graph(&["a", "b"], vec![edge("a", "b", 1, 1), edge("b", "a", 1, 1)]);
        assert_eq!(clustering_coefficient(&g, "a"), 0.0);
    }

    #[test]
    fn unknown_node_has_zero_coefficient() {
        let g = graph(&["a"], Vec::new());
        assert_eq!(clustering_coefficient(&g, "missing"), 0.0);
    }

    #[test]
    fn collaborations_sorted_by_strength() {
        let g = graph(
            &["a", "b", "c", "d"],
            vec![
                edge("a", "b", 3, 4),
                edge("c", "a", 9, 10),
                edge("a", "d", 3, 2),
                edge("b", "c", 10, 1),
            ],
        );

        let ids: Vec<&str> = collaborations(&g, "a")
            .iter()
            .map(|c| c.collaborator.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b", "d"]);
        assert_eq!(total_coauthored(&g, "a"), 16);
    }
}
