//! Shared application state for the listener.
//!
//! [`AppState`] holds the consumer's sink and the body read limits. It is
//! wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor. The sink is the only thing request handlers share.

use std::time::Duration;

use dota2gsi_types::Snapshot;

use crate::config::{DEFAULT_MAX_BODY_BYTES, DEFAULT_READ_TIMEOUT_MS};
use crate::sink::{DeliveryError, SnapshotSink};

/// Shared state for the Axum application.
pub struct AppState {
    /// Where decoded snapshots go.
    sink: Box<dyn SnapshotSink>,
    /// Bodies larger than this are discarded.
    max_body_bytes: usize,
    /// Bodies not received within this long are discarded.
    read_timeout: Duration,
}

impl AppState {
    /// Create state that delivers to `sink` with the default body limit.
    pub fn new(sink: impl SnapshotSink) -> Self {
        Self::with_body_limit(sink, DEFAULT_MAX_BODY_BYTES)
    }

    /// Create state that delivers to `sink` and accepts bodies up to
    /// `max_body_bytes`.
    pub fn with_body_limit(sink: impl SnapshotSink, max_body_bytes: usize) -> Self {
        Self {
            sink: Box::new(sink),
            max_body_bytes,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        }
    }

    /// Replace the body read deadline.
    #[must_use]
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// The configured body size limit.
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// The configured body read deadline.
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Hand a decoded snapshot to the consumer.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`DeliveryError`].
    pub fn deliver(&self, snapshot: Snapshot) -> Result<(), DeliveryError> {
        self.sink.deliver(snapshot)
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("max_body_bytes", &self.max_body_bytes)
            .field("read_timeout", &self.read_timeout)
            .finish_non_exhaustive()
    }
}
