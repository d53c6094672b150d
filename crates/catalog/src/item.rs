//! Catalog content items.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;
use crate::slug::Slug;

/// What kind of catalog entry an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Storefront product
    Product,
    /// Recipe page
    Recipe,
}

/// Recipe difficulty levels used as classification values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The classification string stored on items.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(CatalogError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A single catalog entry: a product or a recipe.
///
/// Text fields are private so the derived searchable text can never go
/// stale: every mutator resets the cached derivation, and the cache is
/// rebuilt on the next [`ContentItem::searchable_text`] call. The cache is
/// never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    id: String,
    slug: Slug,
    kind: ContentKind,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_cents: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_minutes: Option<u32>,
    #[serde(skip)]
    searchable: OnceCell<String>,
}

impl ContentItem {
    /// Create a new item with the required identity fields.
    pub fn new(
        id: impl Into<String>,
        slug: Slug,
        kind: ContentKind,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug,
            kind,
            title: title.into(),
            description: String::new(),
            excerpt: None,
            tags: Vec::new(),
            classification: None,
            price_cents: None,
            total_minutes: None,
            searchable: OnceCell::new(),
        }
    }

    /// Set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the short excerpt shown on listing pages.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the tag list. Duplicates are removed case-insensitively,
    /// keeping the first occurrence for display order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_tags(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the classification facet (recipe difficulty or product category).
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Set the price in cents (products).
    pub fn with_price_cents(mut self, price_cents: u64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Set the total preparation time in minutes (recipes).
    pub fn with_total_minutes(mut self, total_minutes: u32) -> Self {
        self.total_minutes = Some(total_minutes);
        self
    }

    /// Unique stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL slug.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Product or recipe.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Display title, the primary match field.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Long description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Listing-page excerpt, if any.
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    /// Tags in display order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Classification facet value, if any.
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    /// Price in cents, if priced.
    pub fn price_cents(&self) -> Option<u64> {
        self.price_cents
    }

    /// Total preparation time in minutes, if timed.
    pub fn total_minutes(&self) -> Option<u32> {
        self.total_minutes
    }

    /// Replace the title and invalidate the derived text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.searchable.take();
    }

    /// Replace the description and invalidate the derived text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.searchable.take();
    }

    /// Replace the excerpt and invalidate the derived text.
    pub fn set_excerpt(&mut self, excerpt: Option<String>) {
        self.excerpt = excerpt;
        self.searchable.take();
    }

    /// Replace the tags (deduplicated) and invalidate the derived text.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_tags(tags.into_iter().map(Into::into).collect());
        self.searchable.take();
    }

    /// Lower-cased concatenation of title, description, excerpt and tags.
    ///
    /// Computed lazily on first use and cached until a mutator touches one
    /// of the source fields.
    pub fn searchable_text(&self) -> &str {
        self.searchable.get_or_init(|| {
            let mut text = String::with_capacity(
                self.title.len() + self.description.len() + 64,
            );
            text.push_str(&self.title);
            text.push(' ');
            text.push_str(&self.description);
            if let Some(excerpt) = &self.excerpt {
                text.push(' ');
                text.push_str(excerpt);
            }
            for tag in &self.tags {
                text.push(' ');
                text.push_str(tag);
            }
            text.to_lowercase()
        })
    }
}

// The derivation cache is excluded from equality.
impl PartialEq for ContentItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.slug == other.slug
            && self.kind == other.kind
            && self.title == other.title
            && self.description == other.description
            && self.excerpt == other.excerpt
            && self.tags == other.tags
            && self.classification == other.classification
            && self.price_cents == other.price_cents
            && self.total_minutes == other.total_minutes
    }
}

impl Eq for ContentItem {}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter()
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .collect()
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(dedup_tags(tags))
}
