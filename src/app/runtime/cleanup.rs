use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::background::Channels;

/// What: Clean up application state on exit.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Details:
/// - Signals the event reading thread to exit.
/// - Cart contents are session-only and are dropped here.
pub fn cleanup_on_exit(app: &mut AppState, channels: &Channels) {
    tracing::debug!(cart = app.cart.len(), "[Runtime] main loop exited");
    app.detail.close();
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
