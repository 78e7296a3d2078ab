//! Process shutdown signals.
//!
//! SIGHUP, SIGINT, SIGTERM, and SIGQUIT each end the consumer loop. Handlers
//! are installed before the listener starts so an early signal is not
//! lost. Non-Unix targets only have Ctrl-C.

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

/// Registered shutdown signal handlers.
#[cfg(unix)]
pub struct ShutdownSignals {
    hangup: Signal,
    interrupt: Signal,
    terminate: Signal,
    quit: Signal,
}

#[cfg(unix)]
impl ShutdownSignals {
    /// Register handlers for all shutdown signals.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the runtime if a handler cannot be
    /// registered.
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            hangup: signal(SignalKind::hangup())?,
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Wait for the next shutdown signal and return its name.
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.hangup.recv() => "SIGHUP",
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.quit.recv() => "SIGQUIT",
        }
    }
}

/// Registered shutdown signal handlers.
#[cfg(not(unix))]
pub struct ShutdownSignals;

#[cfg(not(unix))]
impl ShutdownSignals {
    /// Nothing to register ahead of time on this platform.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the Unix variant.
    #[allow(clippy::unnecessary_wraps)]
    pub const fn install() -> std::io::Result<Self> {
        Ok(Self)
    }

    /// Wait for Ctrl-C.
    pub async fn recv(&mut self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        "ctrl-c"
    }
}
