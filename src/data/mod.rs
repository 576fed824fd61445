//! Raw dataset and layout input

pub mod loader;
pub mod sample;

pub use loader::{load_dataset, load_positions, parse_dataset, RawNetwork};
pub use sample::sample_graph;
