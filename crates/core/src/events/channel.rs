// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forward events into a tokio channel

use super::bus::EventBus;
use super::listener::Listener;
use super::subscription::Subscription;
use tokio::sync::mpsc;
use tracing::trace;

/// Sender side of a forwarding subscription
pub type EventSender<A> = mpsc::UnboundedSender<A>;
/// Receiver for payloads forwarded by [`EventBus::subscribe_channel`]
pub type EventReceiver<A> = mpsc::UnboundedReceiver<A>;

impl<A: Clone + Send + 'static> EventBus<A> {
    /// Subscribe a listener that clones each payload into an unbounded
    /// channel.
    ///
    /// The send happens inside `emit`, so dispatch stays synchronous; the
    /// receiver side can be drained from async code. Payloads emitted after
    /// the receiver is dropped are discarded.
    pub fn subscribe_channel(
        &self,
        event: impl Into<String>,
    ) -> (Subscription<A>, EventReceiver<A>) {
        let event = event.into();
        let (tx, rx) = mpsc::unbounded_channel();
        let name = event.clone();
        let listener = Listener::new(move |args: &A| {
            if tx.send(args.clone()).is_err() {
                trace!(event = %name, "channel receiver dropped");
            }
        });
        (self.subscribe(event, &listener), rx)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
