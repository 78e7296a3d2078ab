//! Listener HTTP server lifecycle management.
//!
//! The socket is bound eagerly so bind failures surface to the caller of
//! [`start`](crate::start) rather than inside the background task. The
//! server then runs on its own Tokio task until [`ListenerHandle`] asks it
//! to stop or is dropped.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::ListenerConfig;
use crate::error::ListenerError;

/// Handle to a running listener.
///
/// Dropping the handle closes the shutdown channel, which stops the
/// server the same way [`shutdown`](Self::shutdown) does.
#[derive(Debug)]
pub struct ListenerHandle {
    local_addr: SocketAddr,
    shutdown_grace: Duration,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), ListenerError>>,
}

impl ListenerHandle {
    /// The address the listener is actually bound to.
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, let in-flight requests finish, and wait
    /// for the server task to exit.
    ///
    /// Connections still open after the configured grace period (e.g. a
    /// client that stalled mid-request) are abandoned and the server task
    /// is aborted, so this always returns.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Serve`] if the server loop failed, or
    /// [`ListenerError::Task`] if the task panicked.
    pub async fn shutdown(self) -> Result<(), ListenerError> {
        let Self {
            local_addr,
            shutdown_grace,
            shutdown_tx,
            mut task,
        } = self;

        info!(addr = %local_addr, "stopping game state listener");
        // The receiver is gone only if the server already exited.
        shutdown_tx.send(()).ok();

        if let Ok(joined) = tokio::time::timeout(shutdown_grace, &mut task).await {
            return joined.map_err(ListenerError::Task)?;
        }

        warn!(
            addr = %local_addr,
            grace_ms = shutdown_grace.as_millis(),
            "connections still open after grace period, aborting listener"
        );
        task.abort();
        Ok(())
    }

    /// Wait for the server task to exit without requesting shutdown.
    ///
    /// # Errors
    ///
    /// Same as [`shutdown`](Self::shutdown).
    pub async fn wait(self) -> Result<(), ListenerError> {
        let Self {
            shutdown_tx, task, ..
        } = self;
        let result = task.await.map_err(ListenerError::Task)?;
        drop(shutdown_tx);
        result
    }
}

/// Bind the configured address.
///
/// # Errors
///
/// Returns [`ListenerError::Bind`] if the host cannot be resolved or the
/// port cannot be bound (e.g. already in use).
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ListenerError::Bind {
            addr: config.address(),
            source,
        })
}

/// Serve `router` on an already bound `listener` from a background task.
///
/// `shutdown_grace` bounds how long [`ListenerHandle::shutdown`] waits for
/// open connections. Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns [`ListenerError::LocalAddr`] if the bound address cannot be
/// read back from the socket.
pub fn spawn(
    listener: TcpListener,
    router: Router,
    shutdown_grace: Duration,
) -> Result<ListenerHandle, ListenerError> {
    let local_addr = listener.local_addr().map_err(ListenerError::LocalAddr)?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Resolves on an explicit send or when the handle is dropped.
                shutdown_rx.await.ok();
            })
            .await
            .map_err(ListenerError::Serve)?;

        info!(addr = %local_addr, "game state listener stopped");
        Ok(())
    });

    info!(addr = %local_addr, "game state listener listening");

    Ok(ListenerHandle {
        local_addr,
        shutdown_grace,
        shutdown_tx,
        task,
    })
}
