//! Catalog content model for Olivetta.
//!
//! This crate provides:
//! - The [`ContentItem`] record shared by products and recipes
//! - Validated URL slugs
//! - Collection-level invariant checks (unique ids and slugs)
//! - The static tag-to-icon mapping used by storefront views

mod collection;
mod error;
mod icons;
mod item;
mod slug;

pub use collection::validate_collection;
pub use error::{CatalogError, Result};
pub use icons::{tag_icon, TagIcon};
pub use item::{ContentItem, ContentKind, Difficulty};
pub use slug::Slug;
