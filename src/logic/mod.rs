//! Core non-UI logic: the query engine and session transitions.

pub mod criteria;
pub mod filter;
pub mod query;
pub mod selection;
pub mod view;

// Re-export public APIs (crate::logic::...)
pub use criteria::{cycle_category, cycle_price, cycle_sort, reset_criteria, set_price};
pub use filter::apply_filters_preserve_selection;
pub use query::{apply, custom, featured};
pub use selection::{focus_next, move_sel, selected_product_id};
pub use view::{
    CATALOG_FAILURE_MESSAGE, add_current_to_cart, add_to_cart, catalog_failed, gallery_next,
    gallery_previous, install_catalog, open_detail, open_gallery, open_selected_detail, show_cart,
};
