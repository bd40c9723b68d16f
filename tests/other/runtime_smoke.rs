#![cfg(test)]
//! End-to-end runtime smoke test (headless)
//!
//! Tests cover:
//! - Application initialization without panicking
//! - Headless mode operation with `BOUTIK_TEST_HEADLESS=1`
//! - Task cancellation handling
//! - The failed first load the headless run starts with

use std::time::Duration;

use boutik::logic::{CATALOG_FAILURE_MESSAGE, catalog_failed};
use boutik::sources::{CatalogSource, load_catalog};
use boutik::state::{AppState, CatalogStatus};
use boutik::theme::Settings;

/// Catalog path used by the headless run; it never exists.
const MISSING_CATALOG: &str = "/nonexistent/boutik/products.json";

#[tokio::test]
/// What: Test end-to-end runtime initialization and execution in headless mode.
///
/// Inputs:
/// - `BOUTIK_TEST_HEADLESS=1` environment variable to bypass raw TTY setup/restore.
/// - A catalog path that does not exist.
///
/// Output:
/// - Application initializes without panicking and can be cleanly cancelled.
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("BOUTIK_TEST_HEADLESS", "1");
    }
    let settings = Settings {
        catalog_source: MISSING_CATALOG.into(),
        ..Settings::default()
    };

    let handle = tokio::spawn(async move { boutik::app::run(settings).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}

#[tokio::test]
/// What: The headless run's first load fails and lands as a failed status.
///
/// Inputs:
/// - The same missing catalog path, loaded and applied the way the runtime does.
///
/// Output:
/// - `CatalogUnavailable` error; `CatalogStatus::Failed` with the static message,
///   an empty snapshot and no results.
async fn missing_catalog_first_load_marks_session_failed() {
    let source = CatalogSource::parse(MISSING_CATALOG);
    let err = load_catalog(&source)
        .await
        .expect_err("missing file must fail");
    assert!(err.to_string().starts_with("catalog unavailable"));

    let mut app = AppState::default();
    catalog_failed(&mut app, &err);
    assert_eq!(
        app.catalog_status,
        CatalogStatus::Failed(CATALOG_FAILURE_MESSAGE.to_string())
    );
    assert!(app.catalog.is_empty());
    assert!(app.results.is_empty());
}
