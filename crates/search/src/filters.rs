//! Query-time facet filters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use olivetta_catalog::ContentItem;

/// Inclusive numeric bounds for a range facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    /// Inclusive lower bound
    pub min: Option<u64>,
    /// Inclusive upper bound
    pub max: Option<u64>,
}

impl RangeFilter {
    /// Create a range from optional bounds.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// True if the value falls inside the bounds.
    pub fn contains(&self, value: u64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// Facet selection for one query; constructed per request, then discarded.
///
/// Semantics, applied by [`crate::SearchEngine`]:
/// - `tags` is OR within the facet: an item needs at least one of the
///   requested tags, so selecting more tags widens the result set
/// - `classification` is a single exact-match value
/// - numeric ranges are inclusive and only match items carrying the field
/// - distinct facets combine with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Requested tags (OR semantics)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Recipe difficulty or product category, exact match
    #[serde(default)]
    pub classification: Option<String>,
    /// Price bounds in cents
    #[serde(default)]
    pub price_cents: Option<RangeFilter>,
    /// Total preparation time bounds in minutes
    #[serde(default)]
    pub total_minutes: Option<RangeFilter>,
}

impl SearchFilters {
    /// A filter that matches everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a tag to the OR set.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Require an exact classification value.
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Constrain the price facet.
    pub fn with_price_cents(mut self, range: RangeFilter) -> Self {
        self.price_cents = Some(range);
        self
    }

    /// Constrain the preparation-time facet.
    pub fn with_total_minutes(mut self, range: RangeFilter) -> Self {
        self.total_minutes = Some(range);
        self
    }

    /// True if no facet is set.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.classification.is_none()
            && self.price_cents.is_none()
            && self.total_minutes.is_none()
    }

    /// Reject malformed filter values before they can skew results.
    ///
    /// # Errors
    /// [`SearchError::InvalidFilter`] for blank tag or classification
    /// strings and for ranges with `min > max`.
    pub fn validate(&self) -> Result<()> {
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(SearchError::InvalidFilter(
                "tags must not be blank".to_string(),
            ));
        }
        if let Some(classification) = &self.classification {
            if classification.trim().is_empty() {
                return Err(SearchError::InvalidFilter(
                    "classification must not be blank".to_string(),
                ));
            }
        }
        if self.price_cents.is_some_and(|range| range.is_inverted()) {
            return Err(SearchError::InvalidFilter(
                "price range has min greater than max".to_string(),
            ));
        }
        if self.total_minutes.is_some_and(|range| range.is_inverted()) {
            return Err(SearchError::InvalidFilter(
                "minutes range has min greater than max".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an item satisfies every set facet.
    pub(crate) fn matches(&self, item: &ContentItem) -> bool {
        if !self.tags.is_empty() {
            let has_any = self.tags.iter().any(|wanted| {
                item.tags().iter().any(|tag| tag.eq_ignore_ascii_case(wanted))
            });
            if !has_any {
                return false;
            }
        }

        if let Some(wanted) = &self.classification {
            if item.classification() != Some(wanted.as_str()) {
                return false;
            }
        }

        if let Some(range) = &self.price_cents {
            match item.price_cents() {
                Some(price) if range.contains(price) => {}
                _ => return false,
            }
        }

        if let Some(range) = &self.total_minutes {
            match item.total_minutes() {
                Some(minutes) if range.contains(u64::from(minutes)) => {}
                _ => return false,
            }
        }

        true
    }
}
