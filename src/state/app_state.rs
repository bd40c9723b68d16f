//! Central `AppState` container owned by the session.

use ratatui::widgets::ListState;

use crate::sources::MapEmbed;
use crate::state::cart::CartLedger;
use crate::state::catalog::CatalogStore;
use crate::state::detail::DetailView;
use crate::state::modal::Modal;
use crate::state::types::{CatalogStatus, FilterCriteria, Focus, PriceRange, ProductId};
use crate::theme::Settings;

/// Session state shared by the event, loading and UI layers.
///
/// There is exactly one instance per session; it is mutated only by the
/// event loop and never persisted.
#[derive(Debug)]
pub struct AppState {
    /// Current catalog snapshot (empty until the first load succeeds).
    pub catalog: CatalogStore,
    /// Outcome of the last catalog load.
    pub catalog_status: CatalogStatus,
    /// Active filter and sort selection.
    pub criteria: FilterCriteria,
    /// Category choices derived from the catalog.
    pub categories: Vec<String>,
    /// Price brackets offered by the price selector.
    pub price_brackets: Vec<PriceRange>,
    /// Derived view: ids of the filtered, sorted products.
    pub results: Vec<ProductId>,
    /// Index into `results` that is highlighted.
    pub selected: usize,
    /// List selection state for the results pane.
    pub list_state: ListState,
    /// List selection state for the featured pane.
    pub featured_state: ListState,
    /// List selection state for the custom pane.
    pub custom_state: ListState,
    /// How many products the featured pane shows.
    pub featured_count: usize,
    /// Which pane has focus.
    pub focus: Focus,
    /// Product detail modal and its gallery.
    pub detail: DetailView,
    /// Demo cart.
    pub cart: CartLedger,
    /// Active overlay, if any.
    pub modal: Modal,
    /// Resolved map panel (interactive or static fallback).
    pub map: Option<MapEmbed>,
    /// Shop display name.
    pub store_name: String,
    /// Street address used for directions.
    pub store_address: String,
    /// WhatsApp number used for product enquiries.
    pub whatsapp_number: String,
    /// Status line text.
    pub status: String,
}

impl AppState {
    /// What: Build a fresh session from loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed settings with CLI overrides applied
    ///
    /// Output:
    /// - A session with an empty catalog in `Loading` state and default
    ///   criteria using the configured sort.
    #[must_use]
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            criteria: FilterCriteria {
                sort: settings.sort_mode,
                ..FilterCriteria::default()
            },
            price_brackets: settings.price_brackets.clone(),
            featured_count: settings.featured_count,
            store_name: settings.store_name.clone(),
            store_address: settings.store_address.clone(),
            whatsapp_number: settings.whatsapp_number.clone(),
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            catalog: CatalogStore::default(),
            catalog_status: CatalogStatus::Loading,
            criteria: FilterCriteria::default(),
            categories: Vec::new(),
            price_brackets: settings.price_brackets,
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            featured_state: ListState::default(),
            custom_state: ListState::default(),
            featured_count: settings.featured_count,
            focus: Focus::Results,
            detail: DetailView::new(),
            cart: CartLedger::default(),
            modal: Modal::None,
            map: None,
            store_name: settings.store_name,
            store_address: settings.store_address,
            whatsapp_number: settings.whatsapp_number,
            status: String::new(),
        }
    }
}
