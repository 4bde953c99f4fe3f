//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! evaluator is stateless per-request — history lives client-side in
//! localStorage — so the state carries only process configuration.

use std::path::PathBuf;

/// Process-level configuration shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory holding the static client shell, served as the fallback.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Build state from the environment. `STATIC_DIR` defaults to `static`.
    #[must_use]
    pub fn from_env() -> Self {
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
        Self { static_dir: PathBuf::from(static_dir) }
    }
}
