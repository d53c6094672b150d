//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building or validating catalog data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Slug is not URL-safe
    #[error("Invalid slug {0:?}: expected lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    /// Two items share an id
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    /// Two items share a slug
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// Item has no displayable title
    #[error("Item {0} has an empty title")]
    EmptyTitle(String),

    /// Unknown difficulty label
    #[error("Unknown difficulty {0:?}: expected easy, medium or hard")]
    UnknownDifficulty(String),
}
