//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One JSON endpoint does the real work: `POST /api/check` classifies a point
//! against the region and returns a verdict record. Everything else is the
//! static client shell (form, canvas, wasm engine), served as the fallback.

pub mod check;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/check", post(check::check))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
