//! Overlay dialogs that sit above the detail and gallery views.

/// What: Non-navigational overlays shown on top of everything else.
///
/// - Input: Set by event handlers (cart notice, cart summary, help key).
///   Catalog load failures are not modal; they render in the results pane.
/// - Output: Drives the alert/help renderer and swallows keys until closed.
/// - Details: Detail and gallery views are separate state machines with their
///   own invariants; only transient notices live here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Informational notice with a single message.
    Alert {
        /// Text to show.
        message: String,
    },
    /// Key binding reference.
    Help,
}

impl Modal {
    /// Whether an overlay is showing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}
