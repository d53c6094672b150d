//! The catalog search engine.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::filters::SearchFilters;
use crate::relevance::score_item;
use crate::tokenize::{is_indexable, tokenize};
use crate::ScoredItem;
use olivetta_catalog::ContentItem;

/// Searches a fixed snapshot of catalog items.
///
/// The engine indexes the collection once at construction and never
/// mutates it afterwards; every query reads the same immutable snapshot,
/// so shared instances are safe across threads. Rebuild the engine when
/// the underlying collection changes.
#[derive(Debug)]
pub struct SearchEngine {
    items: Vec<ContentItem>,
    index: HashMap<String, Vec<usize>>,
}

impl SearchEngine {
    /// Build an engine over a snapshot of catalog items.
    ///
    /// Indexes every token of each item's searchable text. An empty
    /// collection is valid and yields empty results for every query.
    pub fn new(items: Vec<ContentItem>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, item) in items.iter().enumerate() {
            for token in tokenize(item.searchable_text()) {
                if !is_indexable(&token) {
                    continue;
                }
                let postings = index.entry(token).or_default();
                // tokens repeat within one item; postings stay sorted and unique
                if postings.last() != Some(&position) {
                    postings.push(position);
                }
            }
        }
        debug!(items = items.len(), tokens = index.len(), "built search index");
        Self { items, index }
    }

    /// The indexed snapshot, in original collection order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Free-text search combined with facet filters.
    ///
    /// A blank query degenerates to [`SearchEngine::filter`]: items come
    /// back in collection order with score 0. Otherwise items are scored
    /// by [`score_item`], zero scores are dropped, facets are applied as a
    /// hard AND-filter, and survivors are sorted by descending score with
    /// ties keeping collection order.
    ///
    /// # Errors
    /// [`crate::SearchError::InvalidFilter`] if `filters` fails validation.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Result<Vec<ScoredItem<'_>>> {
        filters.validate()?;

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            let mut results = Vec::new();
            for item in &self.items {
                if filters.matches(item) {
                    results.push(ScoredItem { item, score: 0 });
                }
            }
            return Ok(results);
        }

        let tokens = tokenize(&query);
        let mut results = Vec::new();
        for position in self.candidates(&query, &tokens) {
            let item = &self.items[position];
            let score = score_item(item, &query, &tokens);
            if score > 0 && filters.matches(item) {
                results.push(ScoredItem { item, score });
            }
        }

        // stable sort: equal scores keep collection order
        results.sort_by_key(|result| std::cmp::Reverse(result.score));
        debug!(query = %query, results = results.len(), "search complete");
        Ok(results)
    }

    /// Pure faceting: no query, no scoring, collection order preserved.
    ///
    /// Tag selections widen (OR within the facet); distinct facets narrow
    /// (AND across facets). No matches is an empty vec, not an error.
    ///
    /// # Errors
    /// [`crate::SearchError::InvalidFilter`] if `filters` fails validation.
    pub fn filter(&self, filters: &SearchFilters) -> Result<Vec<&ContentItem>> {
        filters.validate()?;

        let mut matched = Vec::new();
        for item in &self.items {
            if filters.matches(item) {
                matched.push(item);
            }
        }
        Ok(matched)
    }

    /// Candidate positions in collection order.
    ///
    /// Whole-token hits come straight from the inverted index; a substring
    /// sweep then widens the set so partial-word and sub-2-character
    /// tokens are not lost. Anything that can score above zero is in here.
    fn candidates(&self, query: &str, tokens: &[String]) -> Vec<usize> {
        let mut marked = vec![false; self.items.len()];

        for token in tokens {
            if let Some(postings) = self.index.get(token.as_str()) {
                for &position in postings {
                    marked[position] = true;
                }
            }
        }

        for (position, item) in self.items.iter().enumerate() {
            if marked[position] {
                continue;
            }
            let text = item.searchable_text();
            if tokens.iter().any(|token| text.contains(token.as_str()))
                || item.title().eq_ignore_ascii_case(query)
            {
                marked[position] = true;
            }
        }

        marked
            .iter()
            .enumerate()
            .filter_map(|(position, &hit)| hit.then_some(position))
            .collect()
    }
}
