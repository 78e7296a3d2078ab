//! Listener configuration.
//!
//! [`ListenerConfig`] is passed explicitly to [`start`](crate::start); there
//! is no process-wide state. It deserializes with defaults for every field
//! so embedders can load it from their own configuration files.

use std::time::Duration;

use serde::Deserialize;

/// Port the game client is conventionally configured to post to.
pub const DEFAULT_PORT: u16 = 4000;

/// Host the listener binds to by default.
pub const DEFAULT_HOST: &str = "localhost";

/// Largest request body accepted by default (1 MiB).
///
/// A full update with every component enabled is a few tens of kilobytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// How long a handler waits for a complete request body by default.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// How long shutdown waits for in-flight connections by default.
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 5_000;

/// Configuration for the game state listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host name or address to bind to (e.g. `localhost`, `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on. `0` binds an ephemeral port.
    pub port: u16,
    /// Request bodies larger than this are discarded unread.
    pub max_body_bytes: usize,
    /// A body not fully received within this many milliseconds is
    /// discarded and the request answered.
    pub read_timeout_ms: u64,
    /// Milliseconds [`shutdown`](crate::ListenerHandle::shutdown) waits for
    /// open connections before aborting the server.
    pub shutdown_grace_ms: u64,
}

impl ListenerConfig {
    /// Configuration for `port` on the default host.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Body read deadline as a [`Duration`].
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Shutdown grace period as a [`Duration`].
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }

    /// The `host:port` string used in logs and errors.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
        }
    }
}
