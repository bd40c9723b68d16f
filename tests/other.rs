//! Miscellaneous tests (smoke tests, rendering, collaborator failures).

#[path = "other/network_error.rs"]
mod network_error;
#[path = "other/runtime_smoke.rs"]
mod runtime_smoke;
#[path = "other/ui_integration.rs"]
mod ui_integration;
