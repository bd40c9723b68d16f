//! Core value types used by Boutik state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PriceRangeError;

/// Opaque product identifier, unique within a catalog snapshot.
///
/// Catalog feeds use either JSON strings or numbers for ids; both are
/// normalized to their textual form so lookups never depend on the encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawProductId", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Borrow the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Wire form of a product id as found in catalog JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    /// `"id": "sku-12"`
    Text(String),
    /// `"id": 12`
    Number(serde_json::Number),
}

impl From<RawProductId> for ProductId {
    fn from(raw: RawProductId) -> Self {
        match raw {
            RawProductId::Text(s) => Self(s),
            RawProductId::Number(n) => Self(n.to_string()),
        }
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// A catalog product as supplied by the catalog source.
///
/// Read-only to the core: the query engine only reorders and filters
/// references to these records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, unique within a snapshot.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Stock keeping unit; empty when the feed omits it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    /// Long description; empty when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Price in whole currency units. Validated non-negative at load.
    pub price: f64,
    /// Category tag from an open set (e.g. "chaussures").
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Ordered image URIs; may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Available sizes; may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
    /// Available colors; may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    /// Member of the "custom" (made-to-order) subset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_custom: bool,
}

/// Cart line recorded by the demo ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: f64,
}

impl From<&Product> for CartItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
        }
    }
}

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Catalog order (no recency field is modeled).
    #[default]
    Newest,
    /// Ascending price, stable on ties.
    PriceLow,
    /// Descending price, stable on ties.
    PriceHigh,
    /// Catalog order (no popularity field is modeled).
    Popular,
}

impl SortMode {
    /// Every mode in selector order.
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceLow, Self::PriceHigh, Self::Popular];

    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Popular => "popular",
        }
    }

    /// Parse a sort mode from its key or an alias (case-insensitive).
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "newest" | "new" | "recent" => Some(Self::Newest),
            "price-low" | "price-asc" | "cheapest" => Some(Self::PriceLow),
            "price-high" | "price-desc" => Some(Self::PriceHigh),
            "popular" | "popularity" => Some(Self::Popular),
            _ => None,
        }
    }

    /// Label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Nouveautés",
            Self::PriceLow => "Prix croissant",
            Self::PriceHigh => "Prix décroissant",
            Self::Popular => "Populaires",
        }
    }

    /// Cycle to the next mode, wrapping after the last one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Newest => Self::PriceLow,
            Self::PriceLow => Self::PriceHigh,
            Self::PriceHigh => Self::Popular,
            Self::Popular => Self::Newest,
        }
    }
}

/// Inclusive price bracket; `max` may be infinite for open-ended brackets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive; `f64::INFINITY` when open-ended.
    pub max: f64,
}

impl PriceRange {
    /// Build a range, rejecting `min > max`.
    ///
    /// # Errors
    /// Returns [`PriceRangeError::Inverted`] when the bounds are reversed.
    pub fn new(min: f64, max: f64) -> Result<Self, PriceRangeError> {
        if min > max {
            return Err(PriceRangeError::Inverted(format!("{min}-{max}")));
        }
        Ok(Self { min, max })
    }

    /// Open-ended bracket `[min, ∞)`.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// Whether `price` falls inside the bracket (both ends inclusive).
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Parse a bound, treating an empty string as "unspecified".
fn parse_bound(raw: &str, whole: &str) -> Result<Option<f64>, PriceRangeError> {
    let t = raw.trim();
    if t.is_empty() {
        return Ok(None);
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(PriceRangeError::Bound(whole.to_string())),
    }
}

impl FromStr for PriceRange {
    type Err = PriceRangeError;

    /// Brackets look like `"10000-25000"`, `"25000+"` or `"-5000"`.
    /// A missing minimum is 0, a missing maximum is unbounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('+', "-");
        let (min_raw, max_raw) = normalized
            .split_once('-')
            .unwrap_or((normalized.as_str(), ""));
        if max_raw.contains('-') {
            return Err(PriceRangeError::Bound(s.to_string()));
        }
        let min = parse_bound(min_raw, s)?.unwrap_or(0.0);
        let max = parse_bound(max_raw, s)?.unwrap_or(f64::INFINITY);
        Self::new(min, max).map_err(|_| PriceRangeError::Inverted(s.to_string()))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max.is_infinite() {
            write!(f, "{}+", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// User-selected constraints applied to the catalog.
///
/// Every field defaults to "no constraint"; sort defaults to catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Keep only products of this category.
    pub category: Option<String>,
    /// Keep only products priced inside this bracket.
    pub price_range: Option<PriceRange>,
    /// Ordering of the result.
    pub sort: SortMode,
}

impl FilterCriteria {
    /// Reset every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any filter (not sort) is active.
    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        self.category.is_some() || self.price_range.is_some()
    }
}

/// Which list pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Center pane: filtered and sorted catalog.
    #[default]
    Results,
    /// Right pane, top: featured products.
    Featured,
    /// Right pane, bottom: custom-made products.
    Custom,
}

impl Focus {
    /// Cycle to the next pane.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Results => Self::Featured,
            Self::Featured => Self::Custom,
            Self::Custom => Self::Results,
        }
    }
}

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Load in flight.
    #[default]
    Loading,
    /// Snapshot installed.
    Ready,
    /// Load failed; the message is shown instead of the results.
    Failed(String),
}
