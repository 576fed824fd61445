//! Built-in sample dataset: 20 researchers across 5 disciplines

use crate::data::loader::parse_dataset;
use crate::error::Result;
use crate::graph::Graph;

const SAMPLE_NETWORK: &str = include_str!("../../data/sample_network.json");

/// Build the sample collaboration graph
pub fn sample_graph() -> Result<Graph> {
    parse_dataset(SAMPLE_NETWORK)
}
