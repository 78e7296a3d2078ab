//! Game State Integration listener for Dota 2.
//!
//! This crate provides an Axum HTTP server that accepts the game client's
//! periodic `POST /` updates, decodes each body into a
//! [`Snapshot`](dota2gsi_types::Snapshot), and delivers it to a consumer.
//!
//! # Architecture
//!
//! ```text
//! game client --POST--> handler --decode--> SnapshotSink --> consumer
//! ```
//!
//! The server runs on a background Tokio task. The default consumer
//! surface is [`Updates`], an unbounded FIFO stream: the request handler
//! never waits on a slow consumer and no update is dropped while the
//! consumer is alive. Any [`SnapshotSink`] (including a closure wrapped in
//! [`CallbackSink`]) can be plugged in instead.
//!
//! Every request is answered with `200 OK` and an empty body. The game
//! client ignores the response, so decode failures are only visible in
//! the logs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dota2gsi_listener::{ListenerConfig, start};
//!
//! let (handle, mut updates) = start(&ListenerConfig::default()).await?;
//! while let Some(snapshot) = updates.recv().await {
//!     println!("{snapshot}");
//! }
//! handle.shutdown().await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod sink;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use config::ListenerConfig;
pub use error::ListenerError;
pub use router::build_router;
pub use server::ListenerHandle;
pub use sink::{CallbackSink, DeliveryError, SnapshotSender, SnapshotSink, Updates, channel};
pub use startup::{start, start_with_sink};
pub use state::AppState;
