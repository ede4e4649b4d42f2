// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statically typed channels
//!
//! An [`Event`] type fixes both the channel name and the argument type, so a
//! listener for `OrderPlaced` can only ever be handed `OrderPlaced::Args`.
//!
//! ```
//! use herald_core::events::{Event, Listener, TypedEventBus};
//!
//! struct OrderPlaced;
//! impl Event for OrderPlaced {
//!     const NAME: &'static str = "order:placed";
//!     type Args = (String, u32);
//! }
//!
//! let bus = TypedEventBus::new();
//! bus.subscribe::<OrderPlaced>(&Listener::new(|(item, qty): &(String, u32)| {
//!     assert_eq!((item.as_str(), *qty), ("apple", 3));
//! }))?;
//! bus.emit::<OrderPlaced>(("apple".to_string(), 3))?;
//! # Ok::<(), herald_core::TypedBusError>(())
//! ```

use super::bus::EventBus;
use super::listener::Listener;
use super::subscription::Subscription;
use crate::config::BusConfig;
use crate::error::TypedBusError;
use std::any::{self, Any};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use tracing::trace;

/// A named event with a fixed argument type
pub trait Event: 'static {
    const NAME: &'static str;
    type Args: 'static;
}

/// Type-erased view of an `EventBus<E::Args>`
trait ErasedBus: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn is_empty(&self) -> bool;
}

impl<A: 'static> ErasedBus for EventBus<A> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_empty(&self) -> bool {
        EventBus::is_empty(self)
    }
}

struct Channel {
    args_type: &'static str,
    /// `EventBus<E::Args>` for the event type that created the channel
    bus: Box<dyn ErasedBus>,
}

/// Event bus keyed by [`Event`] types.
///
/// Each name gets its own `EventBus<E::Args>` on first subscribe, so dispatch
/// semantics match [`EventBus`]. A channel whose last listener leaves is
/// dropped: right away through [`TypedEventBus::unsubscribe`], or on the
/// next subscribe, unsubscribe or [`TypedEventBus::event_names`] call when the
/// listener left through a `Subscription` token. Lookups treat an emptied
/// channel as absent in the meantime.
#[derive(Clone)]
pub struct TypedEventBus {
    channels: Arc<RwLock<HashMap<&'static str, Channel>>>,
    config: BusConfig,
}

impl TypedEventBus {
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Register `listener` for `E`. The map stays write-locked until the
    /// listener is in the channel, so a concurrent prune cannot orphan it.
    pub fn subscribe<E: Event>(
        &self,
        listener: &Listener<E::Args>,
    ) -> Result<Subscription<E::Args>, TypedBusError> {
        let mut channels = self.write();
        prune(&mut channels);

        let channel = channels.entry(E::NAME).or_insert_with(|| Channel {
            args_type: any::type_name::<E::Args>(),
            bus: Box::new(EventBus::<E::Args>::with_config(self.config.clone())),
        });
        let bus = downcast::<E>(channel)?;
        Ok(bus.subscribe(E::NAME, listener))
    }

    pub fn unsubscribe<E: Event>(&self, listener: &Listener<E::Args>) -> Result<bool, TypedBusError> {
        let mut channels = self.write();
        let removed = match channels.get(E::NAME) {
            Some(channel) if !channel.bus.is_empty() => {
                downcast::<E>(channel)?.unsubscribe(E::NAME, listener)
            }
            _ => false,
        };
        prune(&mut channels);
        Ok(removed)
    }

    /// Dispatch to the listeners of `E`; a no-op if nobody is subscribed
    pub fn emit<E: Event>(&self, args: E::Args) -> Result<(), TypedBusError> {
        match self.channel::<E>()? {
            Some(bus) => Ok(bus.emit(E::NAME, args)?),
            None => Ok(()),
        }
    }

    pub fn listener_count<E: Event>(&self) -> Result<usize, TypedBusError> {
        Ok(self
            .channel::<E>()?
            .map_or(0, |bus| bus.listener_count(E::NAME)))
    }

    /// Names of events with at least one listener, sorted
    pub fn event_names(&self) -> Vec<&'static str> {
        let mut channels = self.write();
        prune(&mut channels);
        let mut names: Vec<&'static str> = channels.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.event_names().is_empty()
    }

    /// The live channel for `E`, if any. The map lock is released before
    /// the returned bus is used.
    fn channel<E: Event>(&self) -> Result<Option<EventBus<E::Args>>, TypedBusError> {
        let channels = self.channels.read().unwrap_or_else(|e| e.into_inner());
        match channels.get(E::NAME) {
            Some(channel) if !channel.bus.is_empty() => downcast::<E>(channel).map(Some),
            _ => Ok(None),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<&'static str, Channel>> {
        self.channels.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Drop channels whose registry has no listeners left
fn prune(channels: &mut HashMap<&'static str, Channel>) {
    channels.retain(|name, channel| {
        let keep = !channel.bus.is_empty();
        if !keep {
            trace!(event = *name, "dropping empty typed channel");
        }
        keep
    });
}

fn downcast<E: Event>(channel: &Channel) -> Result<EventBus<E::Args>, TypedBusError> {
    channel
        .bus
        .as_any()
        .downcast_ref::<EventBus<E::Args>>()
        .cloned()
        .ok_or_else(|| TypedBusError::ArgsMismatch {
            event: E::NAME,
            registered: channel.args_type,
            requested: any::type_name::<E::Args>(),
        })
}

impl Default for TypedEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "typed_tests.rs"]
mod tests;
