//! Unicode-aware tokenization shared by the index and query paths.

use unicode_segmentation::UnicodeSegmentation;

/// Minimum token length admitted to the inverted index.
///
/// Shorter tokens are still produced by [`tokenize`] so the query path can
/// substring-match them; they just never get a posting list of their own.
pub const MIN_INDEXED_TOKEN_LEN: usize = 2;

/// Split text into lower-cased word tokens.
///
/// Word-boundary segmentation drops punctuation; tokens of every length
/// are returned.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|word| word.to_lowercase()).collect()
}

/// True if a token is long enough to carry a posting list.
pub fn is_indexable(token: &str) -> bool {
    token.chars().count() >= MIN_INDEXED_TOKEN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Olive Oil Pasta"), ["olive", "oil", "pasta"]);
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            tokenize("Grilled, peppery vegetables!"),
            ["grilled", "peppery", "vegetables"]
        );
    }

    #[test]
    fn test_hyphenated_tags_split() {
        assert_eq!(tokenize("gluten-free"), ["gluten", "free"]);
    }

    #[test]
    fn test_short_tokens_kept_for_query_matching() {
        assert_eq!(tokenize("a la carte"), ["a", "la", "carte"]);
        assert!(!is_indexable("a"));
        assert!(is_indexable("la"));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("crème brûlée"), ["crème", "brûlée"]);
    }
}
