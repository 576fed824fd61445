//! Cluster analysis module

pub mod kmeans;
pub mod metrics;
pub mod worker;

pub use kmeans::{cluster, Clustering, KMeans};
pub use worker::{ClusteringRequest, ClusteringWorker};

use crate::graph::{Category, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node id -> layout position, owned by the layout engine
pub type PositionMap = HashMap<String, Position>;

/// Source of node positions for clustering.
///
/// Positions may be partial or stale: nodes without one are left out.
pub trait PositionProvider {
    fn position(&self, node_id: &str) -> Option<Position>;
}

impl PositionProvider for PositionMap {
    fn position(&self, node_id: &str) -> Option<Position> {
        self.get(node_id).copied()
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn position(&self, node_id: &str) -> Option<Position> {
        (**self).position(node_id)
    }
}

/// A spatial cluster of positioned nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Index of the centroid this cluster grew from
    pub id: u32,

    /// Member node ids, in graph node order
    pub members: Vec<String>,

    /// Mean position of the members
    pub centroid: Position,

    /// Most frequent member category, ties to the earlier category
    pub dominant_category: Category,

    /// Number of members
    pub size: usize,
}
