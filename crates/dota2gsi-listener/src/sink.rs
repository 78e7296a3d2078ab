//! Delivery of decoded snapshots to the consumer.
//!
//! [`SnapshotSink`] is the seam between the request handler and whatever
//! consumes updates. Two implementations ship with the crate:
//!
//! - [`SnapshotSender`] -- the sending half of an unbounded FIFO channel
//!   whose receiving half is [`Updates`]. Delivery never waits, so a slow
//!   consumer cannot stall the HTTP side; the cost is unbounded memory
//!   growth while the consumer lags.
//! - [`CallbackSink`] -- invokes a closure synchronously on the handler's
//!   task for every update.
//!
//! Channel order is send order, so the consumer observes updates in the
//! order their requests finished decoding.

use core::pin::Pin;
use core::task::{Context, Poll};

use dota2gsi_types::Snapshot;
use futures::Stream;
use tokio::sync::mpsc;

/// Sending half of the unbounded delivery channel.
pub type SnapshotSender = mpsc::UnboundedSender<Snapshot>;

/// Errors that can occur when handing a snapshot to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The consumer has gone away; the snapshot was not delivered.
    #[error("consumer is no longer receiving updates")]
    ConsumerGone,
}

/// Destination for decoded snapshots.
///
/// Called once per successfully decoded request, possibly from several
/// request tasks at the same time.
pub trait SnapshotSink: Send + Sync + 'static {
    /// Deliver one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::ConsumerGone`] if the consumer can no
    /// longer accept updates.
    fn deliver(&self, snapshot: Snapshot) -> Result<(), DeliveryError>;
}

impl SnapshotSink for SnapshotSender {
    fn deliver(&self, snapshot: Snapshot) -> Result<(), DeliveryError> {
        self.send(snapshot)
            .map_err(|mpsc::error::SendError(_)| DeliveryError::ConsumerGone)
    }
}

/// Adapts a closure into a [`SnapshotSink`].
///
/// The closure runs on the request handler's task, so a slow closure
/// delays that request's response.
pub struct CallbackSink<F>(F);

impl<F> CallbackSink<F>
where
    F: Fn(Snapshot) + Send + Sync + 'static,
{
    /// Wrap `callback`.
    pub const fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> SnapshotSink for CallbackSink<F>
where
    F: Fn(Snapshot) + Send + Sync + 'static,
{
    fn deliver(&self, snapshot: Snapshot) -> Result<(), DeliveryError> {
        (self.0)(snapshot);
        Ok(())
    }
}

/// Create an unbounded delivery channel.
pub fn channel() -> (SnapshotSender, Updates) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Updates { rx })
}

/// Stream of decoded snapshots, in arrival order.
///
/// Ends (yields `None`) once every sender is gone, i.e. after the
/// listener has shut down, and every queued snapshot has been received.
#[derive(Debug)]
pub struct Updates {
    rx: mpsc::UnboundedReceiver<Snapshot>,
}

impl Updates {
    /// Wait for the next snapshot.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    /// Take the next snapshot if one is already queued.
    pub fn try_recv(&mut self) -> Option<Snapshot> {
        self.rx.try_recv().ok()
    }

    /// Number of snapshots queued and not yet received.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether no snapshots are queued.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Stream for Updates {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Snapshot>> {
        self.rx.poll_recv(cx)
    }
}
