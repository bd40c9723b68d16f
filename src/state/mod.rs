//! Session state: data model, catalog store and view-state machines.
//!
//! Everything here is owned by a single [`AppState`] and mutated only from the
//! event loop; nothing is shared between threads.

pub mod app_state;
pub mod cart;
pub mod catalog;
pub mod detail;
pub mod gallery;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use cart::CartLedger;
pub use catalog::CatalogStore;
pub use detail::DetailView;
pub use gallery::{GalleryNavigator, Position};
pub use modal::Modal;
pub use types::{
    CartItem, CatalogStatus, FilterCriteria, Focus, PriceRange, Product, ProductId, SortMode,
};
