//! Facet projections for storefront filter UIs.
//!
//! These are pure functions over a collection, independent of any active
//! filter selection: facet chips show collection-wide totals, not totals
//! after the current filters.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use olivetta_catalog::ContentItem;

/// Facet dimensions the storefront can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    /// Tag labels
    Tags,
    /// Recipe difficulty or product category
    Classification,
}

/// A facet option with its collection-wide count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    /// Facet value as displayed
    pub value: String,
    /// Number of items carrying the value
    pub count: usize,
}

/// Distinct tags across a collection.
///
/// Case-insensitive union in first-seen order, no duplicates; the first
/// spelling encountered wins for display.
pub fn distinct_tags(items: &[ContentItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for item in items {
        for tag in item.tags() {
            if seen.insert(tag.to_lowercase()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Counts per facet value over the full, unfiltered collection.
///
/// Sorted by descending count, then value, so display order is
/// deterministic.
pub fn facet_counts(items: &[ContentItem], facet: Facet) -> Vec<FacetCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        match facet {
            Facet::Tags => {
                for tag in item.tags() {
                    *counts.entry(tag.to_lowercase()).or_default() += 1;
                }
            }
            Facet::Classification => {
                if let Some(classification) = item.classification() {
                    *counts.entry(classification.to_string()).or_default() += 1;
                }
            }
        }
    }

    let mut counts: Vec<FacetCount> = counts
        .into_iter()
        .map(|(value, count)| FacetCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    counts
}
