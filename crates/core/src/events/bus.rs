// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus: named channels with synchronous fan-out dispatch

use super::listener::Listener;
use super::subscription::Subscription;
use super::Args;
use crate::config::{BusConfig, FailurePolicy};
use crate::error::{EmitError, ListenerFailure};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::{debug, trace, warn};

/// Event name to listeners in subscription order. Names with no listeners
/// are never stored.
type Registry<A> = HashMap<String, Vec<Listener<A>>>;

struct Shared<A> {
    registry: RwLock<Registry<A>>,
    /// Names that already logged the listener-count warning
    leak_warned: Mutex<HashSet<String>>,
    config: BusConfig,
}

/// The event bus routes emitted events to the listeners subscribed under
/// the exact same name.
///
/// Clones share one registry. The registry lock is only held to mutate the
/// registry or to snapshot a listener list, never while a listener runs, so
/// listeners may call back into the bus.
pub struct EventBus<A: 'static = Args> {
    shared: Arc<Shared<A>>,
}

/// Non-owning bus handle, for listeners that need to call back into the bus
pub struct WeakEventBus<A: 'static = Args> {
    shared: Weak<Shared<A>>,
}

impl<A: 'static> EventBus<A> {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                registry: RwLock::new(HashMap::new()),
                leak_warned: Mutex::new(HashSet::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.shared.config
    }

    /// Register `listener` under `event`.
    ///
    /// Subscribing a listener that is already registered for `event` leaves
    /// the registry unchanged; the returned token still refers to that pair.
    pub fn subscribe(&self, event: impl Into<String>, listener: &Listener<A>) -> Subscription<A> {
        let event = event.into();
        {
            let mut registry = self.write();
            let listeners = registry.entry(event.clone()).or_default();
            if listeners.iter().any(|l| l.same(listener)) {
                trace!(event = %event, "listener already subscribed");
            } else {
                listeners.push(listener.clone());
                let count = listeners.len();
                debug!(event = %event, count, "listener subscribed");

                self.warn_if_crowded(&event, count);
            }
        }
        Subscription::new(self.downgrade(), event, listener.clone())
    }

    /// Remove `listener` from `event`.
    ///
    /// Unknown events and listeners are ignored. Returns true if a
    /// registration was removed. The event entry is dropped with its last
    /// listener.
    pub fn unsubscribe(&self, event: &str, listener: &Listener<A>) -> bool {
        let mut registry = self.write();
        let Some(listeners) = registry.get_mut(event) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|l| !l.same(listener));
        let removed = listeners.len() != before;
        if listeners.is_empty() {
            registry.remove(event);
        }

        if removed {
            debug!(event, "listener unsubscribed");
        }
        removed
    }

    /// Invoke every listener registered for `event`, in subscription order.
    ///
    /// Dispatch runs over a snapshot taken before the first call: listeners
    /// added during this emit are not called, and listeners removed during
    /// it still are. Failures (panics or `Err` returns) are handled per
    /// [`FailurePolicy`] and reported once dispatch ends.
    pub fn emit(&self, event: &str, args: A) -> Result<(), EmitError> {
        let snapshot = self.snapshot(event);
        if snapshot.is_empty() {
            trace!(event, "no listeners");
            return Ok(());
        }

        trace!(event, listeners = snapshot.len(), "dispatching");
        let mut failures = Vec::new();
        for (position, listener) in snapshot.iter().enumerate() {
            let Err((kind, message)) = listener.invoke(&args) else {
                continue;
            };

            warn!(event, position, %kind, error = %message, "listener failed");
            failures.push(ListenerFailure {
                event: event.to_string(),
                position,
                kind,
                message,
            });

            if self.shared.config.failure_policy == FailurePolicy::FailFast {
                debug!(
                    event,
                    skipped = snapshot.len() - position - 1,
                    "fail-fast: stopping dispatch"
                );
                break;
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EmitError {
                event: event.to_string(),
                failures,
            })
        }
    }

    /// Whether any listener is registered for `event`
    pub fn contains(&self, event: &str) -> bool {
        self.read().contains_key(event)
    }

    pub fn is_subscribed(&self, event: &str, listener: &Listener<A>) -> bool {
        self.read()
            .get(event)
            .is_some_and(|listeners| listeners.iter().any(|l| l.same(listener)))
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.read().get(event).map_or(0, Vec::len)
    }

    /// Names with at least one listener, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop every registration
    pub fn clear(&self) {
        let mut registry = self.write();
        debug!(events = registry.len(), "clearing event bus");
        registry.clear();
    }

    pub fn downgrade(&self) -> WeakEventBus<A> {
        WeakEventBus {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Log the possible-leak warning the first time `event` goes over
    /// `max_listeners`. Called with the registry write lock held.
    fn warn_if_crowded(&self, event: &str, count: usize) {
        let max = self.shared.config.max_listeners;
        if max == 0 || count <= max {
            return;
        }

        let mut warned = self
            .shared
            .leak_warned
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        if warned.insert(event.to_string()) {
            warn!(
                event,
                count,
                max,
                "event has more listeners than configured maximum, possible leak"
            );
        }
    }

    fn snapshot(&self, event: &str) -> Vec<Listener<A>> {
        self.read().get(event).cloned().unwrap_or_default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<A>> {
        self.shared
            .registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<A>> {
        self.shared
            .registry
            .write()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl<A: 'static> WeakEventBus<A> {
    /// The bus, if any strong handle is still alive
    pub fn upgrade(&self) -> Option<EventBus<A>> {
        self.shared.upgrade().map(|shared| EventBus { shared })
    }
}

impl<A: 'static> Default for EventBus<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Clone for EventBus<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: 'static> Clone for WeakEventBus<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<A: 'static> fmt::Debug for EventBus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.read();
        let mut counts: Vec<(&str, usize)> = registry
            .iter()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        counts.sort();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .field("config", &self.shared.config)
            .finish()
    }
}

impl<A: 'static> fmt::Debug for WeakEventBus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEventBus")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
