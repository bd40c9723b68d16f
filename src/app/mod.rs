//! Boutik application module.
//!
//! Terminal setup, background loaders and the interactive event loop.

/// Runtime event loop and background loaders.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
