//! Researcher and collaboration records

use crate::error::AnalyzerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the collaboration strength scale
pub const STRENGTH_MIN: u8 = 1;
/// Upper bound of the collaboration strength scale
pub const STRENGTH_MAX: u8 = 10;

/// Research discipline of a node, from a fixed closed set.
///
/// Declaration order is the tie-break order used wherever categories are
/// ranked (dominant category of a cluster, category breakdowns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Biology")]
    Biology,
    #[serde(rename = "Physics")]
    Physics,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Chemistry")]
    Chemistry,
}

impl Category {
    pub const COUNT: usize = 5;

    /// Every category, in tie-break order
    pub const ALL: [Category; Category::COUNT] = [
        Category::ComputerScience,
        Category::Biology,
        Category::Physics,
        Category::Mathematics,
        Category::Chemistry,
    ];

    /// Position in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::Biology => "Biology",
            Category::Physics => "Physics",
            Category::Mathematics => "Mathematics",
            Category::Chemistry => "Chemistry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalyzerError::UnknownCategory(s.to_string()))
    }
}

/// 2D layout coordinates supplied by the external layout engine.
///
/// Deserializes from either `{"x": .., "y": ..}` or `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A researcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identity within a graph snapshot
    pub id: String,

    pub name: String,

    pub category: Category,

    #[serde(rename = "publications")]
    pub publication_count: u32,

    pub h_index: u32,

    pub institution: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub join_date: NaiveDate,
}

impl Node {
    /// Case-insensitive substring match against name, institution and keywords
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let needle = needle.as_str();
        self.name.to_lowercase().contains(needle)
            || self.institution.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// An undirected collaboration between two researchers.
///
/// Endpoints are always stored as raw node ids; resolving them to nodes is
/// a lookup on the owning [`crate::graph::Graph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    #[serde(rename = "source")]
    pub endpoint_a: String,

    #[serde(rename = "target")]
    pub endpoint_b: String,

    /// Collaboration strength, 1-10
    pub strength: u8,

    #[serde(rename = "publications")]
    pub co_authored_publications: u32,

    pub first_collaboration: NaiveDate,

    pub last_collaboration: NaiveDate,
}

impl Edge {
    /// Whether this edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.endpoint_a == a && self.endpoint_b == b)
            || (self.endpoint_a == b && self.endpoint_b == a)
    }

    /// Whether `id` is one of the endpoints
    pub fn touches(&self, id: &str) -> bool {
        self.endpoint_a == id || self.endpoint_b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.endpoint_a == id {
            Some(&self.endpoint_b)
        } else if self.endpoint_b == id {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }
}

// Endpoint order does not matter for equality.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.endpoint_a, &other.endpoint_b)
            && self.strength == other.strength
            && self.co_authored_publications == other.co_authored_publications
            && self.first_collaboration == other.first_collaboration
            && self.last_collaboration == other.last_collaboration
    }
}
