//! Results persistence module

use crate::cluster::metrics::{summarize, ClusterSummary};
use crate::cluster::Cluster;
use crate::data::RawNetwork;
use crate::error::Result;
use crate::graph::Graph;
use crate::stats::NetworkStats;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Central members listed per cluster in `clusters.json`
const CENTRAL_MEMBERS: usize = 5;

/// Save analysis results to the specified directory
pub fn save_results(
    output_dir: impl AsRef<Path>,
    graph: &Graph,
    stats: Option<&NetworkStats>,
    clusters: &[Cluster],
) -> Result<()> {
    let output_dir = output_dir.as_ref();
    log::info!("Saving {} clusters to {}", clusters.len(), output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(output_dir, stats)?;
    save_clusters(output_dir, graph, clusters)?;
    save_graph(output_dir, graph)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save network statistics; `null` stats means the filter left no nodes
fn save_summary(output_dir: &Path, stats: Option<&NetworkStats>) -> Result<()> {
    let path = output_dir.join("summary.json");
    let mut file = File::create(path)?;

    let summary = match stats {
        Some(stats) => json!({
            "has_data": true,
            "node_count": stats.node_count,
            "edge_count": stats.edge_count,
            "avg_degree": stats.avg_degree_display(),
            "density": stats.density_display(),
            "clusters": stats.clusters,
            "top_researchers": stats.top_researchers.iter().map(|n| {
                json!({ "id": n.id, "name": n.name, "h_index": n.h_index })
            }).collect::<Vec<_>>(),
            "category_breakdown": stats.category_breakdown.iter().map(|(category, count)| {
                json!({ "category": category, "count": count })
            }).collect::<Vec<_>>(),
        }),
        None => json!({ "has_data": false }),
    };

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save every cluster with its graph-side summary
fn save_clusters(output_dir: &Path, graph: &Graph, clusters: &[Cluster]) -> Result<()> {
    let path = output_dir.join("clusters.json");
    let mut file = File::create(path)?;

    let entries: Vec<_> = clusters
        .iter()
        .map(|cluster| {
            let summary: ClusterSummary = summarize(graph, cluster, CENTRAL_MEMBERS);
            json!({
                "id": cluster.id,
                "size": cluster.size,
                "centroid": cluster.centroid,
                "dominant_category": cluster.dominant_category,
                "density": summary.density,
                "share": summary.share,
                "central_members": summary.central_members,
                "members": cluster.members,
            })
        })
        .collect();

    file.write_all(to_string_pretty(&json!({ "clusters": entries }))?.as_bytes())?;

    Ok(())
}

/// Save the filtered graph in the raw input shape
fn save_graph(output_dir: &Path, graph: &Graph) -> Result<()> {
    let path = output_dir.join("graph.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(&RawNetwork::from(graph))?.as_bytes())?;

    Ok(())
}
