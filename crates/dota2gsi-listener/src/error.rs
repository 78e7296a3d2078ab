//! Error types for the listener lifecycle.
//!
//! Only startup and server-loop failures surface here. Per-request
//! problems (undecodable bodies, a departed consumer) are logged by the
//! handler and never terminate the server.

/// Errors that can occur when starting or running the listener.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind the listening socket. Fatal at startup.
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// The `host:port` that was requested.
        addr: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The server loop failed after startup.
    #[error("serve error: {0}")]
    Serve(#[source] std::io::Error),

    /// The bound address could not be read back from the socket.
    #[error("failed to read bound address: {0}")]
    LocalAddr(#[source] std::io::Error),

    /// The background server task panicked or was cancelled.
    #[error("server task failed: {0}")]
    Task(#[source] tokio::task::JoinError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[tokio::test]
    async fn task_error_keeps_join_error_as_source() {
        let join_error = tokio::spawn(async { panic!("server panicked") })
            .await
            .unwrap_err();
        let err = ListenerError::Task(join_error);

        let source = err.source().unwrap();
        assert!(source.downcast_ref::<tokio::task::JoinError>().unwrap().is_panic());
        assert!(err.to_string().starts_with("server task failed:"));
    }
}
