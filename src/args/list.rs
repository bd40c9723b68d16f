//! Command-line catalog listing.

use std::io::{self, Write};

use crate::args::Args;
use crate::logic::query;
use crate::sources::{CatalogSource, load_catalog};
use crate::state::{FilterCriteria, Product};
use crate::theme::Settings;
use crate::util::format_money;

/// What: Build filter criteria from `--category`, `--price` and the resolved sort.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings with overrides applied
///
/// Output:
/// - Criteria for [`query::apply`]
#[must_use]
pub fn criteria_from_args(args: &Args, settings: &Settings) -> FilterCriteria {
    FilterCriteria {
        category: args
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        price_range: args.price,
        sort: settings.sort_mode,
    }
}

/// Render one product as a tab-separated listing line.
#[must_use]
pub fn format_line(product: &Product) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.category,
        format_money(product.price)
    )
}

/// What: Load the catalog, print the filtered listing and report the count.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings with overrides applied
///
/// Output:
/// - Number of products printed
///
/// # Errors
/// - Catalog load failures and stdout write failures.
pub async fn handle_list(
    args: &Args,
    settings: &Settings,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let source = CatalogSource::parse(&settings.catalog_source);
    let store = load_catalog(&source).await?;
    let criteria = criteria_from_args(args, settings);
    tracing::info!(
        category = ?criteria.category,
        price = ?criteria.price_range,
        sort = criteria.sort.as_config_key(),
        "listing catalog from CLI"
    );
    let rows = query::apply(store.products(), &criteria);
    let mut out = io::stdout().lock();
    for p in &rows {
        writeln!(out, "{}", format_line(p))?;
    }
    out.flush()?;
    Ok(rows.len())
}
