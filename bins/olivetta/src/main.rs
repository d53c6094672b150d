//! olivetta: search and facet the Olivetta catalog from the terminal.
//!
//! The catalog is a JSON array of content items, typically an export from
//! the hosted store. The CLI owns fetching and rendering; the engine only
//! ever sees the in-memory snapshot.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use olivetta_catalog::{validate_collection, ContentItem};
use olivetta_search::{
    distinct_tags, facet_counts, Facet, RangeFilter, SearchEngine, SearchFilters,
};

mod output;

/// Catalog search CLI for the Olivetta storefront
#[derive(Parser)]
#[command(name = "olivetta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(
        long,
        global = true,
        env = "OLIVETTA_CATALOG",
        default_value = "catalog.json"
    )]
    catalog: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Free-text search with optional facet filters
    Search {
        /// Query text
        query: String,

        #[command(flatten)]
        facets: FacetArgs,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Facet filtering without a query (collection order preserved)
    Filter {
        #[command(flatten)]
        facets: FacetArgs,
    },

    /// List distinct tags with counts and storefront icons
    Tags,

    /// Show collection-wide counts for a facet dimension
    Facets {
        /// Facet to count
        #[arg(value_enum)]
        facet: FacetArg,
    },

    /// Check catalog invariants (non-blank titles, unique ids and slugs)
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FacetArg {
    Tags,
    Classification,
}

impl From<FacetArg> for Facet {
    fn from(facet: FacetArg) -> Self {
        match facet {
            FacetArg::Tags => Facet::Tags,
            FacetArg::Classification => Facet::Classification,
        }
    }
}

/// Facet flags shared by `search` and `filter`.
#[derive(Args)]
struct FacetArgs {
    /// Require a tag (repeatable; extra tags widen the result set)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Exact classification value (recipe difficulty or product category)
    #[arg(short, long)]
    classification: Option<String>,

    /// Minimum price in cents
    #[arg(long)]
    min_price: Option<u64>,

    /// Maximum price in cents
    #[arg(long)]
    max_price: Option<u64>,

    /// Minimum total preparation time in minutes
    #[arg(long)]
    min_minutes: Option<u64>,

    /// Maximum total preparation time in minutes
    #[arg(long)]
    max_minutes: Option<u64>,
}

impl FacetArgs {
    fn into_filters(self) -> SearchFilters {
        let mut filters = SearchFilters::none();
        for tag in self.tags {
            filters = filters.with_tag(tag);
        }
        if let Some(classification) = self.classification {
            filters = filters.with_classification(classification);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            filters = filters.with_price_cents(RangeFilter::new(self.min_price, self.max_price));
        }
        if self.min_minutes.is_some() || self.max_minutes.is_some() {
            filters =
                filters.with_total_minutes(RangeFilter::new(self.min_minutes, self.max_minutes));
        }
        filters
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::Status::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let items = load_catalog(&cli.catalog)?;
    tracing::info!(items = items.len(), catalog = %cli.catalog.display(), "catalog loaded");

    match cli.command {
        Commands::Search { query, facets, limit } => {
            let engine = SearchEngine::new(items);
            let mut results = engine.search(&query, &facets.into_filters())?;
            if let Some(limit) = limit {
                results.truncate(limit);
            }
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
                Format::Text => output::print_scored(&query, &results),
            }
        }

        Commands::Filter { facets } => {
            let engine = SearchEngine::new(items);
            let matched = engine.filter(&facets.into_filters())?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&matched)?),
                Format::Text => output::print_items(&matched),
            }
        }

        Commands::Tags => {
            let rows = output::tag_rows(&items);
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                Format::Text => output::print_tags(&rows),
            }
        }

        Commands::Facets { facet } => {
            let counts = facet_counts(&items, facet.into());
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
                Format::Text => output::print_counts(&counts),
            }
        }

        Commands::Validate => {
            validate_collection(&items)?;
            let tags = distinct_tags(&items);
            output::Status::success(&format!(
                "{} items, {} distinct tags, ids and slugs unique",
                items.len(),
                tags.len()
            ));
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Vec<ContentItem>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening catalog {}", path.display()))?;
    let items: Vec<ContentItem> = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(items)
}
