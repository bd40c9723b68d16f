use std::fs;

use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::state::{PriceRange, SortMode};
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Load user settings from `settings.conf`.
/// Falls back to `Settings::default()` when missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    let Some(path) = resolve_settings_config_path() else {
        return Settings::default();
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` settings text on top of the defaults.
///
/// Inputs:
/// - `content`: Full settings file text
///
/// Output:
/// - Settings with every recognized, valid key applied
///
/// Details:
/// - Unknown keys and invalid values are logged and ignored.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "catalog_source" | "catalog" | "products" => {
                if !val.is_empty() {
                    out.catalog_source = val;
                }
            }
            "map_key_endpoint" | "map_endpoint" => {
                out.map_key_endpoint = (!val.is_empty()).then_some(val);
            }
            "featured_count" | "featured" => match val.parse::<usize>() {
                Ok(n) => out.featured_count = n,
                Err(_) => tracing::warn!(value = %val, "invalid featured_count"),
            },
            "sort_mode" | "default_sort" => {
                if let Some(sm) = SortMode::from_config_key(&val) {
                    out.sort_mode = sm;
                } else {
                    tracing::warn!(value = %val, "unknown sort_mode");
                }
            }
            "price_brackets" => {
                let brackets = parse_price_brackets(&val);
                if !brackets.is_empty() {
                    out.price_brackets = brackets;
                }
            }
            "whatsapp_number" | "whatsapp" => {
                out.whatsapp_number = val.trim_start_matches('+').to_string();
            }
            "store_name" => out.store_name = val,
            "store_address" => out.store_address = val,
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

/// What: Parse a comma-separated bracket list such as `0-10000, 50000+`.
///
/// Inputs:
/// - `val`: Raw setting value
///
/// Output:
/// - Valid brackets in order; malformed entries are skipped with a warning.
#[must_use]
pub fn parse_price_brackets(val: &str) -> Vec<PriceRange> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<PriceRange>() {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::warn!(bracket = %s, error = %e, "skipping price bracket");
                None
            }
        })
        .collect()
}
