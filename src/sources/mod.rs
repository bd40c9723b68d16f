//! External collaborators: catalog source and map credential source.

use std::sync::LazyLock;
use std::time::Duration;

pub mod catalog;
pub mod map;

pub use catalog::{CatalogSource, load_catalog, parse_catalog};
pub use map::{MapEmbed, resolve_map};

/// Shared HTTP client with connection pooling and conservative timeouts.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(20))
        .user_agent(format!("Boutik/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Borrow the shared HTTP client.
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}
