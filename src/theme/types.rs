use ratatui::style::Color;

use crate::state::{PriceRange, SortMode};

/// Application palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind modals.
    pub mantle: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Muted caption color.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Brand red: prices and primary actions.
    pub brand_red: Color,
    /// Brand green: headings and secondary actions.
    pub brand_green: Color,
    /// Selection and focus highlight.
    pub accent: Color,
    /// Warning/attention state color.
    pub yellow: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Catalog file path or URL.
    pub catalog_source: String,
    /// Endpoint returning `{"key": "..."}` for the interactive map.
    pub map_key_endpoint: Option<String>,
    /// Number of products in the featured pane.
    pub featured_count: usize,
    /// Initial sort mode for the results list.
    pub sort_mode: SortMode,
    /// Brackets offered by the price selector, in cycle order.
    pub price_brackets: Vec<PriceRange>,
    /// WhatsApp number (international, no `+`) for product enquiries.
    pub whatsapp_number: String,
    /// Shop display name.
    pub store_name: String,
    /// Address used for the directions link.
    pub store_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: "data/products.json".to_string(),
            map_key_endpoint: None,
            featured_count: 4,
            sort_mode: SortMode::Newest,
            price_brackets: default_price_brackets(),
            whatsapp_number: "2250712623814".to_string(),
            store_name: "RedGreen Boutik".to_string(),
            store_address: "RedGreen Boutik, Abidjan Côte d'Ivoire".to_string(),
        }
    }
}

/// Price selector brackets used when `price_brackets` is unset.
#[must_use]
pub fn default_price_brackets() -> Vec<PriceRange> {
    vec![
        PriceRange {
            min: 0.0,
            max: 10_000.0,
        },
        PriceRange {
            min: 10_000.0,
            max: 25_000.0,
        },
        PriceRange {
            min: 25_000.0,
            max: 50_000.0,
        },
        PriceRange::at_least(50_000.0),
    ]
}
