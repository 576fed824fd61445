//! Error types for the collaboration network analyzer

use thiserror::Error;

/// Errors raised while building graphs, validating filters, or loading data.
///
/// An empty filter result is not an error: downstream operations branch on
/// it explicitly (`compute_stats` returns `None`, clustering returns no clusters).
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A filter specification with an inverted or out-of-bounds range
    #[error("Invalid filter specification: {0}")]
    InvalidSpec(String),

    /// An edge with a dangling endpoint or a self-loop
    #[error("Invalid edge {a} - {b}: {reason}")]
    InvalidEdge {
        a: String,
        b: String,
        reason: String,
    },

    /// Two nodes sharing the same identity
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    /// Collaboration strength outside 1-10
    #[error("Edge {a} - {b} has strength {strength}, expected 1-10")]
    InvalidStrength { a: String, b: String, strength: u8 },

    /// First collaboration date after the last one
    #[error("Edge {a} - {b} has a first collaboration after its last")]
    InvalidCollaborationWindow { a: String, b: String },

    /// Category label outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the analyzer library
pub type Result<T> = std::result::Result<T, AnalyzerError>;
