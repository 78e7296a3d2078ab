//! Listener startup helpers for embedding in a larger application.
//!
//! [`start`] launches the listener on a background Tokio task and returns
//! the [`Updates`] stream; [`start_with_sink`] does the same with a
//! caller-supplied [`SnapshotSink`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use dota2gsi_listener::{CallbackSink, ListenerConfig, start_with_sink};
//!
//! let sink = CallbackSink::new(|snapshot| println!("{snapshot}"));
//! let handle = start_with_sink(&ListenerConfig::with_port(4000), sink).await?;
//! handle.wait().await?;
//! ```

use std::sync::Arc;

use crate::config::ListenerConfig;
use crate::error::ListenerError;
use crate::router::build_router;
use crate::server::{self, ListenerHandle};
use crate::sink::{self, SnapshotSink, Updates};
use crate::state::AppState;

/// Start the listener and return its handle plus the stream of updates.
///
/// Updates are buffered without bound; see [`crate::sink`].
///
/// # Errors
///
/// Returns [`ListenerError::Bind`] if the configured address cannot be
/// bound. Nothing is spawned in that case.
pub async fn start(config: &ListenerConfig) -> Result<(ListenerHandle, Updates), ListenerError> {
    let (tx, updates) = sink::channel();
    let handle = start_with_sink(config, tx).await?;
    Ok((handle, updates))
}

/// Start the listener, delivering every decoded update to `sink`.
///
/// # Errors
///
/// Returns [`ListenerError::Bind`] if the configured address cannot be
/// bound.
pub async fn start_with_sink(
    config: &ListenerConfig,
    sink: impl SnapshotSink,
) -> Result<ListenerHandle, ListenerError> {
    let listener = server::bind(config).await?;

    let state = AppState::with_body_limit(sink, config.max_body_bytes)
        .with_read_timeout(config.read_timeout());
    let router = build_router(Arc::new(state));

    let handle = server::spawn(listener, router, config.shutdown_grace())?;
    tracing::info!(
        requested = %config.address(),
        max_body_bytes = config.max_body_bytes,
        "game state listener started"
    );

    Ok(handle)
}
