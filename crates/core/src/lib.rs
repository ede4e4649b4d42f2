// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald-core: in-process event bus
//!
//! This crate provides:
//! - An event bus with synchronous, snapshot-based fan-out dispatch
//! - Explicit listener failure policies (isolate or fail-fast)
//! - Unsubscribe tokens and scoped guards
//! - Statically typed channels
//! - A logging consumer for `error` and `success` events

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{BusConfig, FailurePolicy};
pub use error::{ConfigError, EmitError, FailureKind, ListenerError, ListenerFailure, TypedBusError};
pub use events::{
    Args, Event, EventBus, EventReceiver, EventSender, Listener, Subscription, SubscriptionGuard,
    TypedEventBus, WeakEventBus,
};
pub use logger::{EventLogger, LogLevel, LogRecord};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
