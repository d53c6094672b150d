//! Static tag-to-icon mapping for storefront facet chips.

use serde::{Deserialize, Serialize};

/// Display icons for the closed set of curated catalog tags.
///
/// The mapping is intentionally exhaustive over known tags: unknown tags
/// get no icon rather than a silent fallback, so new tags force a
/// deliberate decision here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagIcon {
    Pasta,
    Grill,
    Salad,
    Dessert,
    Breakfast,
    Pantry,
    Easy,
    Quick,
    Vegan,
    GlutenFree,
    Spicy,
}

impl TagIcon {
    /// Asset name used by the storefront sprite sheet.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Pasta => "icon-pasta",
            Self::Grill => "icon-grill",
            Self::Salad => "icon-salad",
            Self::Dessert => "icon-dessert",
            Self::Breakfast => "icon-breakfast",
            Self::Pantry => "icon-pantry",
            Self::Easy => "icon-easy",
            Self::Quick => "icon-quick",
            Self::Vegan => "icon-vegan",
            Self::GlutenFree => "icon-gluten-free",
            Self::Spicy => "icon-spicy",
        }
    }
}

/// Look up the icon for a tag, if it is one of the curated tags.
pub fn tag_icon(tag: &str) -> Option<TagIcon> {
    match tag.to_lowercase().as_str() {
        "pasta" => Some(TagIcon::Pasta),
        "grill" => Some(TagIcon::Grill),
        "salad" => Some(TagIcon::Salad),
        "dessert" => Some(TagIcon::Dessert),
        "breakfast" => Some(TagIcon::Breakfast),
        "pantry" => Some(TagIcon::Pantry),
        "easy" => Some(TagIcon::Easy),
        "quick" => Some(TagIcon::Quick),
        "vegan" => Some(TagIcon::Vegan),
        "gluten-free" => Some(TagIcon::GlutenFree),
        "spicy" => Some(TagIcon::Spicy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_have_icons() {
        assert_eq!(tag_icon("pasta"), Some(TagIcon::Pasta));
        assert_eq!(tag_icon("gluten-free"), Some(TagIcon::GlutenFree));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(tag_icon("Pasta"), Some(TagIcon::Pasta));
        assert_eq!(tag_icon("VEGAN"), Some(TagIcon::Vegan));
    }

    #[test]
    fn test_unknown_tag_has_no_icon() {
        assert_eq!(tag_icon("umami"), None);
        assert_eq!(tag_icon(""), None);
    }

    #[test]
    fn test_asset_names_are_unique() {
        let icons = [
            TagIcon::Pasta,
            TagIcon::Grill,
            TagIcon::Salad,
            TagIcon::Dessert,
            TagIcon::Breakfast,
            TagIcon::Pantry,
            TagIcon::Easy,
            TagIcon::Quick,
            TagIcon::Vegan,
            TagIcon::GlutenFree,
            TagIcon::Spicy,
        ];
        let names: std::collections::HashSet<_> =
            icons.iter().map(|i| i.asset_name()).collect();
        assert_eq!(names.len(), icons.len());
    }
}
