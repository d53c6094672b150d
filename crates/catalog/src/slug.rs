//! Validated URL slugs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, Result};

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// A URL-safe identifier, immutable once published.
///
/// Slugs are lowercase ASCII alphanumerics separated by single hyphens,
/// e.g. `olive-oil-pasta`. Construction always validates; deserialization
/// goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidSlug`] if the input is empty or
    /// contains anything other than lowercase alphanumerics and single
    /// interior hyphens.
    pub fn parse(input: impl Into<String>) -> Result<Self> {
        let input = input.into();
        if SLUG_PATTERN.is_match(&input) {
            Ok(Self(input))
        } else {
            Err(CatalogError::InvalidSlug(input))
        }
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl std::str::FromStr for Slug {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
