//! Shared utilities for argument processing.

use crate::args::Args;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `log_level` argument.
/// - `BOUTIK_TRACE=1` enables TRACE level.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("BOUTIK_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Layer command-line overrides on top of file settings.
///
/// Inputs:
/// - `settings`: Settings loaded from `settings.conf` (or defaults)
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Settings where every flag that was given wins.
#[must_use]
pub fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(src) = args.catalog.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        settings.catalog_source = src.to_string();
    }
    if let Some(ep) = &args.map_key_endpoint {
        settings.map_key_endpoint = Some(ep.clone());
    }
    if let Some(n) = args.featured {
        settings.featured_count = n;
    }
    if let Some(sort) = args.sort {
        settings.sort_mode = sort;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortMode;

    #[test]
    /// What: Given flags win over settings; absent flags keep settings
    ///
    /// - Input: Settings with a custom catalog; args overriding featured and sort
    /// - Output: Catalog kept, featured and sort overridden
    fn overrides_only_given_flags() {
        let settings = Settings {
            catalog_source: "shop.json".into(),
            ..Settings::default()
        };
        let args = Args {
            featured: Some(2),
            sort: Some(SortMode::PriceHigh),
            log_level: "info".into(),
            ..Args::default()
        };
        let out = apply_overrides(settings, &args);
        assert_eq!(out.catalog_source, "shop.json");
        assert_eq!(out.featured_count, 2);
        assert_eq!(out.sort_mode, SortMode::PriceHigh);
    }

    #[test]
    /// What: Verbose forces debug logging
    ///
    /// - Input: `verbose = true`
    /// - Output: "debug"
    fn verbose_means_debug() {
        let args = Args {
            verbose: true,
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }
}
