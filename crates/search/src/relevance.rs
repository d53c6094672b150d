//! Relevance scoring for catalog queries.
//!
//! Weights are data, not logic: relevance tuning happens by editing the
//! constants below, never by changing the scoring shape.

use olivetta_catalog::ContentItem;

/// Exact case-insensitive match of the whole query against the title.
pub const WEIGHT_EXACT_TITLE: u32 = 10;

/// Awarded per query token when the title contains every token.
pub const WEIGHT_TITLE_TOKEN: u32 = 5;

/// Awarded per query token found in the description or excerpt.
pub const WEIGHT_BODY_TOKEN: u32 = 2;

/// Awarded per query token that exactly equals one of the item's tags.
pub const WEIGHT_TAG_EXACT: u32 = 3;

/// Score one item against a query.
///
/// # Arguments
/// * `item` - The catalog item to score
/// * `query` - The full query, already trimmed and lower-cased
/// * `tokens` - The query's tokens, as produced by [`crate::tokenize`]
///
/// # Returns
/// The summed relevance weight; 0 means the item does not match.
pub fn score_item(item: &ContentItem, query: &str, tokens: &[String]) -> u32 {
    let title = item.title().to_lowercase();
    let mut score = 0;

    if title == query {
        score += WEIGHT_EXACT_TITLE;
    }

    if !tokens.is_empty() && tokens.iter().all(|token| title.contains(token.as_str())) {
        score += WEIGHT_TITLE_TOKEN * tokens.len() as u32;
    }

    let mut body = item.description().to_lowercase();
    if let Some(excerpt) = item.excerpt() {
        body.push(' ');
        body.push_str(&excerpt.to_lowercase());
    }

    for token in tokens {
        if body.contains(token.as_str()) {
            score += WEIGHT_BODY_TOKEN;
        }
        if item.tags().iter().any(|tag| tag.to_lowercase() == *token) {
            score += WEIGHT_TAG_EXACT;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;
    use olivetta_catalog::{ContentKind, Slug};

    fn item(title: &str, description: &str, tags: &[&str]) -> ContentItem {
        ContentItem::new(
            "t-1",
            Slug::parse("test-item").unwrap(),
            ContentKind::Recipe,
            title,
        )
        .with_description(description)
        .with_tags(tags.iter().copied())
    }

    fn score(item: &ContentItem, query: &str) -> u32 {
        let query = query.trim().to_lowercase();
        let tokens = tokenize(&query);
        score_item(item, &query, &tokens)
    }

    #[test]
    fn test_exact_title_outranks_everything() {
        let exact = item("Olive Oil Pasta", "", &[]);
        let partial = item("Olive Oil Pasta Salad", "", &[]);
        assert!(score(&exact, "olive oil pasta") > score(&partial, "olive oil pasta"));
    }

    #[test]
    fn test_exact_title_is_case_insensitive() {
        let it = item("Olive Oil Pasta", "", &[]);
        assert_eq!(
            score(&it, "OLIVE OIL PASTA"),
            WEIGHT_EXACT_TITLE + 3 * WEIGHT_TITLE_TOKEN
        );
    }

    #[test]
    fn test_title_tokens_scored_per_token() {
        let it = item("Grilled Summer Vegetables", "", &[]);
        assert_eq!(score(&it, "grilled vegetables"), 2 * WEIGHT_TITLE_TOKEN);
    }

    #[test]
    fn test_title_requires_all_tokens() {
        let it = item("Grilled Summer Vegetables", "", &[]);
        assert_eq!(score(&it, "grilled pasta"), 0);
    }

    #[test]
    fn test_body_tokens_scored_independently() {
        let it = item("House Blend", "A peppery oil for grilled dishes.", &[]);
        assert_eq!(score(&it, "peppery grilled"), 2 * WEIGHT_BODY_TOKEN);
    }

    #[test]
    fn test_tag_exact_match() {
        let it = item("House Blend", "", &["pasta"]);
        assert_eq!(score(&it, "pasta"), WEIGHT_TAG_EXACT);
    }

    #[test]
    fn test_tag_substring_does_not_match() {
        let it = item("House Blend", "", &["pasta"]);
        assert_eq!(score(&it, "past"), 0);
    }

    #[test]
    fn test_weights_accumulate() {
        let it = item("Olive Oil Pasta", "Pasta with good oil.", &["pasta"]);
        assert_eq!(
            score(&it, "pasta"),
            WEIGHT_TITLE_TOKEN + WEIGHT_BODY_TOKEN + WEIGHT_TAG_EXACT
        );
    }

    #[test]
    fn test_no_match_scores_zero() {
        let it = item("Olive Oil Pasta", "Simple and bright.", &["pasta"]);
        assert_eq!(score(&it, "chocolate"), 0);
    }
}
