//! Facet filtering of the collaboration graph

pub mod engine;

pub use engine::{filter_graph, filter_graph_with};

use crate::error::{AnalyzerError, Result};
pub use crate::graph::model::{STRENGTH_MAX, STRENGTH_MIN};

use crate::graph::{Category, Edge, Node};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Validated set of filter predicates.
///
/// Ranges are checked when set, so a `FilterSpec` value is always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    categories: BTreeSet<Category>,
    strength_min: u8,
    strength_max: u8,
    min_publications: u32,
    min_h_index: u32,
    date_from: NaiveDate,
    date_to: NaiveDate,
    /// Lower-cased, `None` when empty
    query: Option<String>,
}

impl Default for FilterSpec {
    /// Every category, full strength scale, no thresholds, 2010-01-01 to 2025-12-31
    fn default() -> Self {
        Self {
            categories: Category::ALL.into_iter().collect(),
            strength_min: STRENGTH_MIN,
            strength_max: STRENGTH_MAX,
            min_publications: 0,
            min_h_index: 0,
            date_from: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or(NaiveDate::MIN),
            date_to: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
            query: None,
        }
    }
}

impl FilterSpec {
    /// Restrict to the given categories
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Inclusive strength range; requires `1 <= min <= max <= 10`
    pub fn with_strength_range(mut self, min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(AnalyzerError::InvalidSpec(format!(
                "strength range [{min}, {max}] is inverted"
            )));
        }
        if min < STRENGTH_MIN || max > STRENGTH_MAX {
            return Err(AnalyzerError::InvalidSpec(format!(
                "strength range [{min}, {max}] outside [{STRENGTH_MIN}, {STRENGTH_MAX}]"
            )));
        }
        self.strength_min = min;
        self.strength_max = max;
        Ok(self)
    }

    /// Inclusive date window; requires `from <= to`
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(AnalyzerError::InvalidSpec(format!(
                "date range [{from}, {to}] is inverted"
            )));
        }
        self.date_from = from;
        self.date_to = to;
        Ok(self)
    }

    pub fn with_min_publications(mut self, min: u32) -> Self {
        self.min_publications = min;
        self
    }

    pub fn with_min_h_index(mut self, min: u32) -> Self {
        self.min_h_index = min;
        self
    }

    /// Free-text query; an empty string clears it
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        let query = query.as_ref();
        self.query = (!query.is_empty()).then(|| query.to_lowercase());
        self
    }

    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    pub fn strength_range(&self) -> (u8, u8) {
        (self.strength_min, self.strength_max)
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.date_from, self.date_to)
    }

    pub fn min_publications(&self) -> u32 {
        self.min_publications
    }

    pub fn min_h_index(&self) -> u32 {
        self.min_h_index
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Node predicate: category, publications, h-index, join date, and query
    pub fn accepts_node(&self, node: &Node) -> bool {
        self.categories.contains(&node.category)
            && node.publication_count >= self.min_publications
            && node.h_index >= self.min_h_index
            && node.join_date >= self.date_from
            && node.join_date <= self.date_to
            && self.query.as_deref().map_or(true, |q| node.matches_query(q))
    }

    /// Edge predicate, without the endpoint membership check.
    ///
    /// The collaboration interval only has to overlap the date window.
    pub fn accepts_edge(&self, edge: &Edge) -> bool {
        edge.strength >= self.strength_min
            && edge.strength <= self.strength_max
            && edge.last_collaboration >= self.date_from
            && edge.first_collaboration <= self.date_to
    }
}
