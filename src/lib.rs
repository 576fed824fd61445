//! Core library functions for the collaboration network analyzer

pub mod config;
pub mod error;
pub mod graph;
pub mod filter;
pub mod stats;
pub mod cluster;
pub mod data;
pub mod storage;

pub use config::Config;
pub use error::{AnalyzerError, Result};
pub use filter::{filter_graph, FilterSpec};
pub use graph::algorithms::clustering_coefficient;
pub use graph::{Category, Edge, Graph, GraphBuilder, Node, Position};
pub use stats::{compute_stats, NetworkStats};
pub use cluster::{cluster, Cluster, KMeans, PositionMap, PositionProvider};
