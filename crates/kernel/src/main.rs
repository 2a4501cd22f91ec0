//! Shelf CLI
//!
//! Loads a product catalog and prints the product list for the given
//! owner, category, and search filters.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shelf_kernel::catalog::Catalog;
use shelf_kernel::config::Config;
use shelf_kernel::gather::{
    FilterSpec, QueryService, SearchScope, SortDirection, SortKey, SortSpec,
};
use shelf_kernel::render::{render_json, render_table};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog document (.json, .yaml, .yml, .toml). Overrides SHELF_CATALOG_PATH.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Only products whose category is owned by this user id.
    #[arg(long)]
    owner: Option<i64>,

    /// Only products in this category id (repeatable).
    #[arg(long = "category")]
    categories: Vec<i64>,

    /// Case-insensitive search text.
    #[arg(long, default_value = "")]
    query: String,

    /// Fields searched by --query: name or all. Overrides SHELF_SEARCH_SCOPE.
    #[arg(long)]
    search_scope: Option<SearchScope>,

    /// Column to sort by: id, name, category, owner.
    #[arg(long, default_value = "id")]
    sort: SortKey,

    /// Sort direction: ascending, descending, none.
    #[arg(long, default_value = "none")]
    direction: SortDirection,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let catalog_path = args.catalog.unwrap_or(config.catalog_path);
    let catalog = Catalog::from_path(&catalog_path)
        .with_context(|| format!("failed to load catalog from {}", catalog_path.display()))?;

    let service = QueryService::new(Arc::new(catalog), config.query_cache_capacity)
        .context("failed to prepare catalog")?;

    let catalog = service.catalog();
    if catalog.is_empty() {
        warn!(path = %catalog_path.display(), "catalog has no products");
    }
    if let Some(owner) = args.owner.filter(|&id| catalog.user(id).is_none()) {
        warn!(owner, "owner filter names an unknown user");
    }
    for &category in &args.categories {
        if catalog.category(category).is_none() {
            warn!(category, "category filter names an unknown category");
        }
    }

    let mut filter = FilterSpec::new()
        .with_query(args.query)
        .with_categories(args.categories)
        .with_search_scope(args.search_scope.unwrap_or(config.search_scope));
    filter.select_owner(args.owner);

    let sort = SortSpec::new(args.sort, args.direction);

    let outcome = service.execute(&filter, &sort);
    info!(matched = outcome.len(), total = outcome.total(), "query complete");

    let output = match args.format {
        OutputFormat::Table => render_table(&outcome, &sort),
        OutputFormat::Json => render_json(&outcome)?,
    };
    print!("{output}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shelf=info,shelf_kernel=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
