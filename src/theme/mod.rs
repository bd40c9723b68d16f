//! Configuration and presentation settings for Boutik.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API
//! stable.

/// Path resolution for config directories.
mod paths;
/// Settings file parsing.
mod settings;
/// Palette and settings type definitions.
mod types;

use ratatui::style::Color;

pub use paths::{config_dir, logs_dir};
pub use settings::{parse_price_brackets, parse_settings, settings};
pub use types::{Settings, Theme, default_price_brackets};

/// Fixed storefront palette (dark background, brand red and green).
const PALETTE: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    brand_red: Color::Rgb(0xe6, 0x39, 0x46),
    brand_green: Color::Rgb(0x2a, 0x9d, 0x5c),
    accent: Color::Rgb(0x74, 0xc7, 0xec),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
};

/// Return the application palette.
#[must_use]
pub const fn theme() -> Theme {
    PALETTE
}
