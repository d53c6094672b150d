//! Terminal rendering for catalog query results.

use owo_colors::OwoColorize;
use serde::Serialize;

use olivetta_catalog::{tag_icon, ContentItem};
use olivetta_search::{distinct_tags, facet_counts, Facet, FacetCount, ScoredItem};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }
}

/// Render scored search results.
pub fn print_scored(query: &str, results: &[ScoredItem<'_>]) {
    if results.is_empty() {
        Status::info(&format!("no matches for {query:?}"));
        return;
    }
    for result in results {
        println!(
            "{:>4}  {}",
            result.score.to_string().bold(),
            summary_line(result.item)
        );
    }
    println!("{}", format_count(results.len(), "result", "results").dimmed());
}

/// Render filtered items in collection order.
pub fn print_items(items: &[&ContentItem]) {
    if items.is_empty() {
        Status::info("no items match the selected facets");
        return;
    }
    for item in items {
        println!("{}", summary_line(item));
    }
    println!("{}", format_count(items.len(), "item", "items").dimmed());
}

/// A tag with its collection-wide count and storefront icon.
#[derive(Debug, Serialize)]
pub struct TagRow {
    /// Tag as displayed
    pub tag: String,
    /// Items carrying the tag
    pub count: usize,
    /// Sprite-sheet asset, if the tag is curated
    pub icon: Option<&'static str>,
}

/// Join distinct tags with their counts and icons.
pub fn tag_rows(items: &[ContentItem]) -> Vec<TagRow> {
    let counts: std::collections::HashMap<String, usize> = facet_counts(items, Facet::Tags)
        .into_iter()
        .map(|facet| (facet.value, facet.count))
        .collect();

    distinct_tags(items)
        .into_iter()
        .map(|tag| {
            let count = counts.get(&tag.to_lowercase()).copied().unwrap_or(0);
            let icon = tag_icon(&tag).map(|icon| icon.asset_name());
            TagRow { tag, count, icon }
        })
        .collect()
}

/// Render the tag listing.
pub fn print_tags(rows: &[TagRow]) {
    if rows.is_empty() {
        Status::info("catalog has no tags");
        return;
    }
    for row in rows {
        let icon = row.icon.unwrap_or("-");
        println!("{:<20} {:>4}  {}", row.tag, row.count, icon.dimmed());
    }
}

/// Render facet counts.
pub fn print_counts(counts: &[FacetCount]) {
    if counts.is_empty() {
        Status::info("no values for this facet");
        return;
    }
    for facet in counts {
        println!("{:<20} {:>4}", facet.value, facet.count);
    }
}

fn summary_line(item: &ContentItem) -> String {
    let mut line = format!("{}  ({})", item.title(), item.slug());
    if let Some(classification) = item.classification() {
        line.push_str(&format!("  [{classification}]"));
    }
    if let Some(price) = item.price_cents() {
        line.push_str(&format!("  {}", format_price(price)));
    }
    if let Some(minutes) = item.total_minutes() {
        line.push_str(&format!("  {minutes} min"));
    }
    if !item.tags().is_empty() {
        line.push_str(&format!("  #{}", item.tags().join(" #")));
    }
    line
}

fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Format a count with singular/plural
fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olivetta_catalog::{ContentKind, Slug};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1850), "$18.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(100), "$1.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "result", "results"), "1 result");
        assert_eq!(format_count(3, "result", "results"), "3 results");
    }

    #[test]
    fn test_tag_rows_join_counts_and_icons() {
        let items = vec![
            ContentItem::new(
                "r-1",
                Slug::parse("olive-oil-pasta").unwrap(),
                ContentKind::Recipe,
                "Olive Oil Pasta",
            )
            .with_tags(["pasta", "weeknight"]),
            ContentItem::new(
                "r-2",
                Slug::parse("pasta-salad").unwrap(),
                ContentKind::Recipe,
                "Pasta Salad",
            )
            .with_tags(["pasta"]),
        ];

        let rows = tag_rows(&items);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, "pasta");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].icon, Some("icon-pasta"));
        assert_eq!(rows[1].tag, "weeknight");
        assert_eq!(rows[1].count, 1);
        assert_eq!(rows[1].icon, None);
    }
}
