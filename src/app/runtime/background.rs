use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::error::CatalogError;
use crate::sources::{self, CatalogSource, MapEmbed};
use crate::state::CatalogStore;

/// Outcome of one catalog load.
pub type CatalogResult = Result<CatalogStore, CatalogError>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used between the main event
///   loop, the terminal event thread and the one-shot loaders.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Catalog reload requests (`R`).
    pub reload_tx: mpsc::UnboundedSender<()>,
    /// Receiver side of `reload_tx`.
    pub reload_rx: mpsc::UnboundedReceiver<()>,
    /// Catalog load outcomes.
    pub catalog_tx: mpsc::UnboundedSender<CatalogResult>,
    /// Receiver side of `catalog_tx`.
    pub catalog_rx: mpsc::UnboundedReceiver<CatalogResult>,
    /// Resolved store map.
    pub map_tx: mpsc::UnboundedSender<MapEmbed>,
    /// Receiver side of `map_tx`.
    pub map_rx: mpsc::UnboundedReceiver<MapEmbed>,
}

impl Channels {
    /// Create all channels used for runtime communication.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (reload_tx, reload_rx) = mpsc::unbounded_channel::<()>();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel::<CatalogResult>();
        let (map_tx, map_rx) = mpsc::unbounded_channel::<MapEmbed>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            reload_tx,
            reload_rx,
            catalog_tx,
            catalog_rx,
            map_tx,
            map_rx,
        }
    }
}

/// What: Load the catalog once in the background and report the outcome.
///
/// Inputs:
/// - `source`: Catalog file or URL
/// - `tx`: Channel receiving the load result
///
/// Details:
/// - No retry; a failed load is reported and the session keeps running.
pub fn spawn_catalog_load(source: CatalogSource, tx: mpsc::UnboundedSender<CatalogResult>) {
    tokio::spawn(async move {
        let res = sources::load_catalog(&source).await;
        let _ = tx.send(res);
    });
}

/// Resolve the map panel once in the background; always yields a map.
pub fn spawn_map_resolve(endpoint: Option<String>, tx: mpsc::UnboundedSender<MapEmbed>) {
    tokio::spawn(async move {
        let map = sources::resolve_map(endpoint.as_deref()).await;
        let _ = tx.send(map);
    });
}

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel receiving crossterm events
/// - `event_thread_cancelled`: Flag the thread polls to exit promptly
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed without a pending key.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    // ignore transient read errors
                    if let Ok(ev) = crossterm::event::read()
                        && (event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
