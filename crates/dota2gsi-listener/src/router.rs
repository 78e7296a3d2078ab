//! Axum router construction for the listener.

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router for the listener.
///
/// The router includes:
/// - `ANY /` -- game state update
/// - fallback -- every other path is handled the same way
///
/// The client's configured URI may carry a path, so nothing is rejected
/// on routing grounds.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(handlers::receive_update))
        .fallback(handlers::receive_update)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
