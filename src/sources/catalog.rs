//! Catalog source: load a product snapshot from a file or an HTTP endpoint.

use std::fmt;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::sources::http_client;
use crate::state::{CatalogStore, Product};

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file.
    File(PathBuf),
    /// Remote JSON endpoint.
    Url(String),
}

impl CatalogSource {
    /// What: Classify a `--catalog`/`catalog_source` value.
    ///
    /// Inputs:
    /// - `raw`: Path or URL text
    ///
    /// Output:
    /// - `Url` for `http://`/`https://` values, `File` otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.starts_with("http://") || t.starts_with("https://") {
            Self::Url(t.to_string())
        } else {
            Self::File(PathBuf::from(t))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

/// What: Parse and validate a catalog JSON document.
///
/// Inputs:
/// - `body`: JSON array of product records
///
/// Output:
/// - A validated [`CatalogStore`]
///
/// # Errors
/// - [`CatalogError::Parse`] for malformed JSON or records missing `id`,
///   `name` or `price`
/// - Validation errors from [`CatalogStore::new`]
pub fn parse_catalog(body: &str) -> Result<CatalogStore, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    CatalogStore::new(products)
}

/// What: Load the catalog once from `source`; no retry.
///
/// Inputs:
/// - `source`: File path or URL
///
/// Output:
/// - A validated snapshot
///
/// # Errors
/// - Any [`CatalogError`]; callers show the static failure message.
pub async fn load_catalog(source: &CatalogSource) -> Result<CatalogStore, CatalogError> {
    tracing::info!(source = %source, "loading catalog");
    let body = match source {
        CatalogSource::File(path) => read_file(path.clone()).await?,
        CatalogSource::Url(url) => fetch_text(url).await?,
    };
    let store = parse_catalog(&body)?;
    tracing::info!(count = store.len(), "catalog loaded");
    Ok(store)
}

/// Read `path` on the blocking pool so the runtime thread stays free.
async fn read_file(path: PathBuf) -> Result<String, CatalogError> {
    let target = path.clone();
    tokio::task::spawn_blocking(move || std::fs::read_to_string(&target))
        .await
        .map_err(|e| CatalogError::Read {
            path: path.clone(),
            source: std::io::Error::other(format!("spawn failed: {e}")),
        })?
        .map_err(|e| CatalogError::Read { path, source: e })
}

/// GET `url` with caching disabled and return the body.
async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let resp = http_client()
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| CatalogError::Fetch {
            url: url.to_string(),
            source: e,
        })?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    resp.text().await.map_err(|e| CatalogError::Fetch {
        url: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Baskets", "sku": "BK-1", "price": 25000, "category": "chaussures",
         "images": ["img/bk1.jpg", "img/bk2.jpg"], "sizes": ["40", "41"], "colors": ["noir"]},
        {"id": "2", "name": "Sac", "price": 15000, "category": "sacs", "isCustom": true}
    ]"#;

    #[test]
    /// What: Source classification by scheme
    ///
    /// - Input: https URL and relative path
    /// - Output: `Url` and `File`
    fn classifies_sources() {
        assert_eq!(
            CatalogSource::parse("https://shop.test/products.json"),
            CatalogSource::Url("https://shop.test/products.json".into())
        );
        assert_eq!(
            CatalogSource::parse("data/products.json"),
            CatalogSource::File(PathBuf::from("data/products.json"))
        );
    }

    #[test]
    /// What: Parsing validates schema and rejects bad snapshots
    ///
    /// - Input: Sample feed; non-array JSON; record without price
    /// - Output: Two products; `Parse` errors for the others
    fn parses_and_validates() {
        let store = parse_catalog(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.products()[0].id.as_str(), "1");
        assert!(store.products()[1].is_custom);

        assert!(matches!(
            parse_catalog(r#"{"products": []}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            parse_catalog(r#"[{"id": 1, "name": "x"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[tokio::test]
    /// What: File sources load; missing files fail with `Read`
    ///
    /// - Input: Temp file with the sample; a path that does not exist
    /// - Output: Snapshot of two; `CatalogError::Read`
    async fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let store = load_catalog(&CatalogSource::File(f.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(store.len(), 2);

        let missing = load_catalog(&CatalogSource::File(PathBuf::from(
            "/nonexistent/boutik/products.json",
        )))
        .await;
        assert!(matches!(missing, Err(CatalogError::Read { .. })));
    }

    #[tokio::test(flavor = "current_thread")]
    /// What: File reads stay off the single runtime thread
    ///
    /// - Input: Temp catalog loaded while a sibling task runs on a current-thread runtime
    /// - Output: Both complete; the snapshot has two products
    async fn file_load_runs_on_blocking_pool() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let source = CatalogSource::File(f.path().to_path_buf());
        let ticker = tokio::spawn(async { tokio::task::yield_now().await });
        let (store, ticked) = tokio::join!(load_catalog(&source), ticker);
        assert_eq!(store.unwrap().len(), 2);
        assert!(ticked.is_ok());
    }
}
