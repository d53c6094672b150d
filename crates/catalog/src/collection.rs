//! Collection-level invariant checks.

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::item::ContentItem;

/// Validate a catalog collection before handing it to consumers.
///
/// Checks the invariants that the hosted store is supposed to guarantee
/// but that imported or hand-edited catalogs can break:
/// - every item has a non-blank title
/// - ids are unique
/// - slugs are unique
///
/// # Errors
/// Returns the first violation found.
pub fn validate_collection(items: &[ContentItem]) -> Result<()> {
    let mut ids = HashSet::with_capacity(items.len());
    let mut slugs = HashSet::with_capacity(items.len());

    for item in items {
        if item.title().trim().is_empty() {
            return Err(CatalogError::EmptyTitle(item.id().to_string()));
        }
        if !ids.insert(item.id()) {
            return Err(CatalogError::DuplicateId(item.id().to_string()));
        }
        if !slugs.insert(item.slug().as_str()) {
            return Err(CatalogError::DuplicateSlug(item.slug().to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ContentKind;
    use crate::slug::Slug;

    fn item(id: &str, slug: &str, title: &str) -> ContentItem {
        ContentItem::new(id, Slug::parse(slug).unwrap(), ContentKind::Product, title)
    }

    #[test]
    fn test_valid_collection() {
        let items = vec![
            item("p-1", "extra-virgin", "Extra Virgin Olive Oil"),
            item("p-2", "lemon-infused", "Lemon Infused Oil"),
        ];
        assert!(validate_collection(&items).is_ok());
    }

    #[test]
    fn test_empty_collection_is_valid() {
        assert!(validate_collection(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let items = vec![
            item("p-1", "extra-virgin", "Extra Virgin Olive Oil"),
            item("p-1", "lemon-infused", "Lemon Infused Oil"),
        ];
        assert_eq!(
            validate_collection(&items),
            Err(CatalogError::DuplicateId("p-1".to_string()))
        );
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let items = vec![
            item("p-1", "extra-virgin", "Extra Virgin Olive Oil"),
            item("p-2", "extra-virgin", "Another Oil"),
        ];
        assert_eq!(
            validate_collection(&items),
            Err(CatalogError::DuplicateSlug("extra-virgin".to_string()))
        );
    }

    #[test]
    fn test_blank_title_rejected() {
        let items = vec![item("p-1", "extra-virgin", "   ")];
        assert_eq!(
            validate_collection(&items),
            Err(CatalogError::EmptyTitle("p-1".to_string()))
        );
    }
}
