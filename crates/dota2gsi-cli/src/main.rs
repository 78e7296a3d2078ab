//! Command-line listener for Dota 2 Game State Integration.
//!
//! Binds the game state listener and prints every update it receives
//! until the process is told to stop.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments (invalid or zero port prints usage and exits)
//! 2. Initialize structured logging (tracing)
//! 3. Register shutdown signal handlers
//! 4. Start the listener (bind failure is fatal)
//! 5. Print updates until a signal arrives or the listener stops
//! 6. Shut the listener down gracefully

mod cli;
mod error;
mod output;
mod signal;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogFormat};
use crate::error::CliError;
use crate::signal::ShutdownSignals;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the listener cannot bind, signal handlers cannot be
/// registered, or stdout becomes unwritable.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Parse arguments.
    let cli = Cli::parse();

    // 2. Initialize structured logging.
    init_tracing(cli.log_format);
    info!("dota2gsi starting");

    // 3. Register shutdown signal handlers.
    let mut signals = ShutdownSignals::install().map_err(|source| CliError::Signal { source })?;

    // 4. Start the listener.
    let config = cli.listener_config();
    let (handle, mut updates) = match dota2gsi_listener::start(&config).await {
        Ok(started) => started,
        Err(e) => {
            error!(error = %e, address = %config.address(), "failed to start game state listener");
            return Err(CliError::from(e).into());
        }
    };
    info!(
        address = %handle.local_addr(),
        output = ?cli.output,
        "listening for game state updates"
    );

    // 5. Consume updates until a shutdown signal arrives.
    let mut stdout = std::io::stdout();
    let mut received: u64 = 0;
    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(snapshot) = update else {
                    warn!(received, "update stream ended, listener stopped");
                    handle.wait().await.map_err(CliError::from)?;
                    return Ok(());
                };
                received = received.saturating_add(1);
                output::print_update(&mut stdout, &snapshot, cli.output)?;
            }
            name = signals.recv() => {
                info!(signal = name, "shutdown signal received");
                break;
            }
        }
    }

    // 6. Graceful shutdown.
    handle.shutdown().await.map_err(CliError::from)?;
    info!(received, "dota2gsi shutdown complete");

    Ok(())
}

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Logs go to stderr so stdout
/// carries only updates.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
    }
}
