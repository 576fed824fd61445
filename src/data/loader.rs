//! JSON loading for the raw dataset and layout positions

use crate::cluster::PositionMap;
use crate::error::Result;
use crate::graph::{Edge, Graph, Node};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw dataset shape: `{ "nodes": [...], "links": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNetwork {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Edge>,
}

impl RawNetwork {
    /// Validate into a graph snapshot
    pub fn into_graph(self) -> Result<Graph> {
        Graph::from_parts(self.nodes, self.links)
    }
}

impl From<&Graph> for RawNetwork {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            links: graph.edges().to_vec(),
        }
    }
}

/// Parse and validate a dataset from a JSON string
pub fn parse_dataset(json: &str) -> Result<Graph> {
    let raw: RawNetwork = serde_json::from_str(json)?;
    raw.into_graph()
}

/// Load and validate a dataset from a JSON file
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading dataset: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let raw: RawNetwork = serde_json::from_reader(reader)?;
    log::info!("Loaded {} nodes and {} links", raw.nodes.len(), raw.links.len());

    raw.into_graph()
}

/// Load layout positions: `{ "<node id>": [x, y], ... }`
pub fn load_positions(path: impl AsRef<Path>) -> Result<PositionMap> {
    let path = path.as_ref();
    log::info!("Reading positions: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let positions: PositionMap = serde_json::from_reader(reader)?;
    log::info!("Loaded {} node positions", positions.len());

    Ok(positions)
}
