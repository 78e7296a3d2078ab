//! Request handler for game state updates.
//!
//! There is exactly one handler. It serves `/` and is also the router's
//! fallback, so any request that reaches the server is treated as an
//! update regardless of path or method.
//!
//! The response is always `200 OK` with an empty body. The game client
//! does not read it, so failures are reported through `tracing` only.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::state::AppState;

/// Read, decode, and deliver one game state update.
pub async fn receive_update(State(state): State<Arc<AppState>>, body: Body) -> StatusCode {
    let limit = state.max_body_bytes();
    let read_timeout = state.read_timeout();
    let bytes = match tokio::time::timeout(read_timeout, axum::body::to_bytes(body, limit)).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            warn!(error = %e, limit, "failed to read game state body, update dropped");
            return StatusCode::OK;
        }
        Err(_) => {
            warn!(
                timeout_ms = read_timeout.as_millis(),
                "game state body not received in time, update dropped"
            );
            return StatusCode::OK;
        }
    };

    let snapshot = match dota2gsi_types::decode(&bytes) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(
                error = %e,
                kind = e.kind(),
                bytes = bytes.len(),
                "failed to decode game state, update dropped"
            );
            return StatusCode::OK;
        }
    };

    debug!(
        bytes = bytes.len(),
        match_id = snapshot.map.match_id,
        clock_time = snapshot.map.clock_time,
        "game state decoded"
    );

    if let Err(e) = state.deliver(snapshot) {
        warn!(error = %e, "consumer unavailable, update dropped");
    }

    StatusCode::OK
}
