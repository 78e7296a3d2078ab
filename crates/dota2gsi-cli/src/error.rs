//! Error types for the `dota2gsi` binary.
//!
//! [`CliError`] wraps every failure mode of the harness so `main` can
//! propagate with `?`.

/// Top-level error for the `dota2gsi` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The listener failed to start or stopped with an error.
    #[error("listener error: {source}")]
    Listener {
        /// The underlying listener error.
        #[from]
        source: dota2gsi_listener::ListenerError,
    },

    /// Shutdown signal handlers could not be registered.
    #[error("signal handler error: {source}")]
    Signal {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An update could not be encoded for printing.
    #[error("encode error: {source}")]
    Encode {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Writing an update to stdout failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
