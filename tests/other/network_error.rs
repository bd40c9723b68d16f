//! Collaborator failures: the catalog reports `CatalogUnavailable`, the map
//! falls back to the static embed, and the session keeps running.

use boutik::logic::{CATALOG_FAILURE_MESSAGE, catalog_failed, install_catalog};
use boutik::sources::{CatalogSource, MapEmbed, load_catalog, parse_catalog, resolve_map};
use boutik::state::{AppState, CatalogStatus};

#[tokio::test]
/// What: Unreachable catalog URL yields a "catalog unavailable" error
///
/// - Input: URL on a closed local port
/// - Output: Error whose display starts with "catalog unavailable"
async fn unreachable_catalog_is_unavailable() {
    let err = load_catalog(&CatalogSource::Url("http://127.0.0.1:9/products.json".into()))
        .await
        .expect_err("closed port must fail");
    assert!(err.to_string().starts_with("catalog unavailable"));
}

#[tokio::test]
/// What: Unreachable map key endpoint falls back to the static map
///
/// - Input: Endpoint on a closed local port
/// - Output: `MapEmbed::Static`
async fn unreachable_map_endpoint_falls_back() {
    let map = resolve_map(Some("http://127.0.0.1:9/api/google-maps-key")).await;
    assert_eq!(map, MapEmbed::Static);
    assert!(map.url().contains("openstreetmap.org"));
}

#[test]
/// What: A failed reload keeps the previous snapshot
///
/// - Input: Installed catalog, then a failure
/// - Output: `Failed` status with the static message; products still present
fn failed_reload_keeps_snapshot() {
    let mut app = AppState::default();
    let store = parse_catalog(r#"[{"id":1,"name":"Sac","price":15000}]"#).expect("valid");
    install_catalog(&mut app, store);
    let err = parse_catalog("not json").expect_err("invalid json");
    catalog_failed(&mut app, &err);
    assert_eq!(
        app.catalog_status,
        CatalogStatus::Failed(CATALOG_FAILURE_MESSAGE.to_string())
    );
    assert_eq!(app.catalog.len(), 1);
    assert_eq!(app.results.len(), 1);
}

#[test]
/// What: Duplicate ids and negative prices reject the whole snapshot
///
/// - Input: Two records sharing an id; a record with a negative price
/// - Output: Both fail with "catalog unavailable" errors
fn invalid_snapshots_rejected() {
    let dup = parse_catalog(
        r#"[{"id":1,"name":"A","price":1},{"id":"1","name":"B","price":2}]"#,
    )
    .expect_err("duplicate ids");
    assert!(dup.to_string().starts_with("catalog unavailable"));
    let neg = parse_catalog(r#"[{"id":1,"name":"A","price":-5}]"#).expect_err("negative price");
    assert!(neg.to_string().starts_with("catalog unavailable"));
}
