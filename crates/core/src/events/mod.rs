// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process publish/subscribe
//!
//! This module provides:
//! - `EventBus` - Route emitted events to listeners registered under the same name
//! - `Listener` - Callback handle compared by identity
//! - `Subscription` - Token (and scoped guard) for removing a registration
//! - `TypedEventBus` - Channels whose argument type is fixed by an `Event` type

mod args;
mod bus;
mod channel;
mod listener;
mod subscription;
mod typed;

pub use args::Args;
pub use bus::{EventBus, WeakEventBus};
pub use channel::{EventReceiver, EventSender};
pub use listener::Listener;
pub use subscription::{Subscription, SubscriptionGuard};
pub use typed::{Event, TypedEventBus};
