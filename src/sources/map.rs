//! Store map: resolve a short-lived map credential, or fall back to a static embed.

use std::fmt;

use serde::Deserialize;

use crate::sources::http_client;
use crate::util::percent_encode;

/// Store location (Abidjan), latitude.
pub const STORE_LAT: f64 = 5.348;
/// Store location (Abidjan), longitude.
pub const STORE_LNG: f64 = -4.027;

/// Credential-free OpenStreetMap embed centered on the store.
pub const STATIC_MAP_URL: &str = "https://www.openstreetmap.org/export/embed.html?bbox=-4.137%2C5.26%2C-3.93%2C5.4&layer=mapnik&marker=5.348%2C-4.027";

/// Map panel content.
#[derive(Clone, PartialEq, Eq)]
pub enum MapEmbed {
    /// Interactive map backed by a credential from the key endpoint.
    Interactive {
        /// Map provider key. Never logged.
        key: String,
    },
    /// Static fallback that needs no credential.
    Static,
}

impl MapEmbed {
    /// URL to show or open for this map.
    #[must_use]
    pub fn url(&self) -> String {
        match self {
            Self::Interactive { key } => format!(
                "https://www.google.com/maps/embed/v1/view?key={}&center={STORE_LAT},{STORE_LNG}&zoom=12",
                percent_encode(key)
            ),
            Self::Static => STATIC_MAP_URL.to_string(),
        }
    }

    /// Short label for the map panel.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Interactive { .. } => "Carte interactive",
            Self::Static => "Carte (OpenStreetMap)",
        }
    }
}

impl fmt::Debug for MapEmbed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive { .. } => f
                .debug_struct("Interactive")
                .field("key", &"<redacted>")
                .finish(),
            Self::Static => f.write_str("Static"),
        }
    }
}

/// Body returned by the credential endpoint.
#[derive(Deserialize)]
struct KeyResponse {
    /// Provider key.
    key: String,
}

/// What: Resolve the map panel, falling back to the static embed.
///
/// Inputs:
/// - `endpoint`: Credential endpoint returning `{"key": "..."}`, if configured
///
/// Output:
/// - `Interactive` with the key on success, `Static` on absence or any failure
///
/// Details:
/// - One attempt, no retry. The fallback is unconditional on failure.
pub async fn resolve_map(endpoint: Option<&str>) -> MapEmbed {
    let Some(url) = endpoint.map(str::trim).filter(|u| !u.is_empty()) else {
        tracing::info!("no map key endpoint configured; using static map");
        return MapEmbed::Static;
    };
    match fetch_key(url).await {
        Ok(key) if !key.trim().is_empty() => {
            tracing::info!("map credential resolved");
            MapEmbed::Interactive { key }
        }
        Ok(_) => {
            tracing::warn!(url = %url, "map key endpoint returned an empty key; using static map");
            MapEmbed::Static
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "map key endpoint unavailable; using static map");
            MapEmbed::Static
        }
    }
}

/// Fetch the credential; any transport, status or decode failure is an error.
async fn fetch_key(url: &str) -> Result<String, reqwest::Error> {
    let resp = http_client()
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await?
        .error_for_status()?;
    Ok(resp.json::<KeyResponse>().await?.key)
}
