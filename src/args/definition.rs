//! Command-line argument definition.

use clap::Parser;

use crate::state::{PriceRange, SortMode};

/// Boutik - browse the RedGreen Boutik catalog from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "boutik")]
#[command(version)]
#[command(about = "Browse the RedGreen Boutik catalog from the terminal", long_about = None)]
pub struct Args {
    /// Catalog file path or http(s) URL (overrides `catalog_source`)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Endpoint returning the interactive map key as `{"key": "..."}`
    #[arg(long)]
    pub map_key_endpoint: Option<String>,

    /// Number of products in the featured pane (overrides `featured_count`)
    #[arg(long)]
    pub featured: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the filtered catalog to stdout and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Category filter for --list
    #[arg(long)]
    pub category: Option<String>,

    /// Price bracket for --list, e.g. `10000-25000` or `50000+`
    #[arg(long)]
    pub price: Option<PriceRange>,

    /// Sort mode (newest, price-low, price-high, popular)
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortMode>,
}

/// Clap value parser for `--sort`.
fn parse_sort(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s).ok_or_else(|| {
        let known: Vec<&str> = SortMode::ALL.iter().map(|m| m.as_config_key()).collect();
        format!("unknown sort mode '{s}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into typed values
    ///
    /// - Input: `--list --category sacs --price 10000-25000 --sort price-low`
    /// - Output: Typed range and sort mode
    fn parses_list_flags() {
        let args = Args::try_parse_from([
            "boutik",
            "--list",
            "--category",
            "sacs",
            "--price",
            "10000-25000",
            "--sort",
            "price-low",
        ])
        .unwrap();
        assert!(args.list);
        assert_eq!(args.category.as_deref(), Some("sacs"));
        let price = args.price.unwrap();
        assert!((price.min - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(args.sort, Some(SortMode::PriceLow));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: Bad values are rejected by clap
    ///
    /// - Input: Unknown sort and inverted price
    /// - Output: Parse errors
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["boutik", "--sort", "cheapest"]).is_err());
        assert!(Args::try_parse_from(["boutik", "--price", "5000-10"]).is_err());
    }
}
