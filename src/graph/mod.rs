//! Graph representation and algorithms module

pub mod model;
pub mod network;
pub mod builder;
pub mod algorithms;

pub use builder::GraphBuilder;
pub use model::{Category, Edge, Node, Position};
pub use network::Graph;
