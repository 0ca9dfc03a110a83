//! Round event sink posting onto an unbounded channel.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::ports::{RoundEvent, RoundEventSink};

/// Forwards every [`RoundEvent`] to a channel drained by the UI loop.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<RoundEvent>,
}

impl ChannelEventSink {
    /// Creates a sink and its receiving end.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RoundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RoundEventSink for ChannelEventSink {
    fn publish(&self, event: RoundEvent) {
        if let Err(e) = self.tx.send(event) {
            debug!(event = ?e.0, "Round event receiver closed");
        }
    }
}
