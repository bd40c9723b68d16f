//! Error types for the catalog core and its load boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::ProductId;

/// Errors raised by the view-state machines (detail view and gallery).
///
/// All of them are local and recoverable: the session keeps running and the
/// caller's visible state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Gallery opened with an empty image set or an out-of-range start index.
    #[error("invalid gallery: {len} image(s), start index {start}")]
    InvalidGallery {
        /// Number of images offered.
        len: usize,
        /// Requested start index.
        start: usize,
    },

    /// Navigation attempted while the gallery or detail view is closed.
    #[error("invalid state: {0} is closed")]
    InvalidState(&'static str),

    /// Detail view opened on a product that is not in the current catalog.
    #[error("product not found: {id}")]
    ProductNotFound {
        /// Requested product.
        id: ProductId,
    },
}

/// Failure to obtain a usable catalog snapshot.
///
/// Every variant displays as "catalog unavailable"; the session renders a
/// static failure message and keeps whatever snapshot it already had.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file from disk.
    #[error("catalog unavailable: failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// HTTP request for the catalog could not be performed.
    #[error("catalog unavailable: request to {url} failed: {source}")]
    Fetch {
        /// Catalog endpoint.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Catalog endpoint answered with a non-success status.
    #[error("catalog unavailable: {url} returned HTTP {status}")]
    Status {
        /// Catalog endpoint.
        url: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// Payload is not a JSON array of product records.
    #[error("catalog unavailable: malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product record violates the schema (e.g. negative price).
    #[error("catalog unavailable: product {id} is invalid: {reason}")]
    InvalidProduct {
        /// Offending product.
        id: ProductId,
        /// Which constraint was violated.
        reason: String,
    },

    /// Two product records share the same identifier.
    #[error("catalog unavailable: duplicate product id {id}")]
    DuplicateId {
        /// Identifier seen more than once.
        id: ProductId,
    },
}

/// Malformed price bracket such as `"abc"` or `"500-100"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceRangeError {
    /// A bound is not a non-negative number.
    #[error("invalid price bound '{0}'")]
    Bound(String),

    /// Lower bound exceeds the upper bound.
    #[error("price range minimum exceeds maximum in '{0}'")]
    Inverted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Catalog errors all surface as "catalog unavailable"
    ///
    /// - Input: A status and a duplicate-id error
    /// - Output: Display strings share the common prefix
    fn catalog_errors_share_unavailable_prefix() {
        let status = CatalogError::Status {
            url: "https://shop.test/products.json".into(),
            status: 404,
        };
        let dup = CatalogError::DuplicateId {
            id: ProductId::from("p1"),
        };
        assert!(status.to_string().starts_with("catalog unavailable"));
        assert!(status.to_string().contains("404"));
        assert!(dup.to_string().starts_with("catalog unavailable"));
    }

    #[test]
    /// What: View errors name the offending component or product
    ///
    /// - Input: `InvalidState` for the gallery, `ProductNotFound` for "x9"
    /// - Output: Messages mention "gallery" and "x9"
    fn view_error_messages() {
        assert_eq!(
            ViewError::InvalidState("gallery").to_string(),
            "invalid state: gallery is closed"
        );
        let nf = ViewError::ProductNotFound {
            id: ProductId::from("x9"),
        };
        assert!(nf.to_string().contains("x9"));
    }
}
