//! In-memory search and faceted filtering over the Olivetta catalog.
//!
//! This crate provides:
//! - An inverted-index [`SearchEngine`] built from a catalog snapshot
//! - Weighted relevance scoring over titles, body text and tags
//! - Facet filters with OR-within-facet, AND-across-facet semantics
//! - Pure facet projections for storefront filter UIs
//!
//! The engine is read-only after construction, so a single instance can
//! serve any number of concurrent queries.

mod engine;
mod error;
mod facets;
mod filters;
mod relevance;
mod tokenize;

pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use facets::{distinct_tags, facet_counts, Facet, FacetCount};
pub use filters::{RangeFilter, SearchFilters};
pub use relevance::{
    score_item, WEIGHT_BODY_TOKEN, WEIGHT_EXACT_TITLE, WEIGHT_TAG_EXACT, WEIGHT_TITLE_TOKEN,
};
pub use tokenize::{tokenize, MIN_INDEXED_TOKEN_LEN};

use olivetta_catalog::ContentItem;

/// Search result with relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ScoredItem<'a> {
    /// The matched catalog item
    pub item: &'a ContentItem,
    /// Relevance score (higher is better)
    pub score: u32,
}
