// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unsubscribe handles returned by `EventBus::subscribe`

use super::bus::WeakEventBus;
use super::listener::Listener;
use super::Args;

/// Token for one (event, listener) registration.
///
/// Dropping a `Subscription` leaves the listener registered; call
/// [`Subscription::unsubscribe`] or convert it with [`Subscription::guard`]
/// for scoped cleanup. The token only holds a weak handle, so it never keeps
/// the bus alive.
#[derive(Debug)]
pub struct Subscription<A: 'static = Args> {
    bus: WeakEventBus<A>,
    event: String,
    listener: Listener<A>,
}

impl<A: 'static> Subscription<A> {
    pub(crate) fn new(bus: WeakEventBus<A>, event: String, listener: Listener<A>) -> Self {
        Self {
            bus,
            event,
            listener,
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn listener(&self) -> &Listener<A> {
        &self.listener
    }

    /// Whether the bus is alive and still holds this registration
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|bus| bus.is_subscribed(&self.event, &self.listener))
    }

    /// Remove this registration. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        match self.bus.upgrade() {
            Some(bus) => bus.unsubscribe(&self.event, &self.listener),
            None => false,
        }
    }

    /// Tie the registration to the returned guard's scope
    pub fn guard(self) -> SubscriptionGuard<A> {
        SubscriptionGuard {
            subscription: Some(self),
        }
    }
}

/// Unsubscribes its registration when dropped
#[derive(Debug)]
#[must_use = "dropping a SubscriptionGuard unsubscribes immediately"]
pub struct SubscriptionGuard<A: 'static = Args> {
    subscription: Option<Subscription<A>>,
}

impl<A: 'static> SubscriptionGuard<A> {
    pub fn event(&self) -> Option<&str> {
        self.subscription.as_ref().map(Subscription::event)
    }

    /// Disarm the guard, keeping the listener registered
    pub fn release(mut self) -> Option<Subscription<A>> {
        self.subscription.take()
    }
}

impl<A: 'static> Drop for SubscriptionGuard<A> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
