use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::sources::CatalogSource;
use crate::state::{AppState, CatalogStatus};
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod cleanup;
mod handlers;

use background::{Channels, spawn_catalog_load, spawn_event_thread, spawn_map_resolve};
use cleanup::cleanup_on_exit;
use handlers::{handle_catalog_result, handle_map};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the Boutik TUI end-to-end: initialize terminal and state, start the
/// catalog load and map resolution, drive the event loop and restore the
/// terminal on exit.
///
/// Inputs:
/// - `settings`: Settings with command-line overrides applied
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Catalog and map are one-shot loads; a catalog failure shows the static
///   failure message and a map failure falls back to the static embed.
/// - Reload requests from the event layer start a new catalog load unless one
///   is already in flight.
/// - `BOUTIK_TEST_HEADLESS=1` skips terminal setup and the event thread.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("BOUTIK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::with_settings(&settings);
    let source = CatalogSource::parse(&settings.catalog_source);
    tracing::info!(source = %source, headless, "session starting");

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_catalog_load(source.clone(), channels.catalog_tx.clone());
    spawn_map_resolve(settings.map_key_endpoint.clone(), channels.map_tx.clone());

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.reload_tx) {
                    break;
                }
            }
            Some(result) = channels.catalog_rx.recv() => {
                handle_catalog_result(&mut app, result);
            }
            Some(map) = channels.map_rx.recv() => {
                handle_map(&mut app, map);
            }
            Some(()) = channels.reload_rx.recv() => {
                if app.catalog_status == CatalogStatus::Loading {
                    tracing::debug!("[Runtime] reload ignored; load in flight");
                } else {
                    app.catalog_status = CatalogStatus::Loading;
                    app.status = "Chargement…".to_string();
                    spawn_catalog_load(source.clone(), channels.catalog_tx.clone());
                }
            }
            else => break,
        }
    }

    cleanup_on_exit(&mut app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
