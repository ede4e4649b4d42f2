// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging consumer for `error` and `success` events
//!
//! `EventLogger` registers its two handlers once, when attached, and from
//! then on only reacts to emits. Every delivery is written through `tracing`
//! and kept as a [`LogRecord`].

use crate::clock::{Clock, SystemClock};
use crate::events::{Args, EventBus, Listener, SubscriptionGuard};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{error, info};

pub const ERROR_EVENT: &str = "error";
pub const SUCCESS_EVENT: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Success,
}

impl LogLevel {
    pub fn event(&self) -> &'static str {
        match self {
            LogLevel::Error => ERROR_EVENT,
            LogLevel::Success => SUCCESS_EVENT,
        }
    }
}

/// One delivery seen by the logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    /// Milliseconds since the logger was attached
    pub timestamp_ms: u64,
    pub level: LogLevel,
    pub args: Args,
}

struct Journal<C> {
    clock: C,
    started: Instant,
    records: Mutex<Vec<LogRecord>>,
}

impl<C: Clock> Journal<C> {
    /// Append a record, then log it once the records lock is released
    fn record(&self, level: LogLevel, args: &Args) {
        let timestamp_ms = self.clock.millis_since(self.started);
        let sequence = {
            let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
            let sequence = records.len() as u64 + 1;
            records.push(LogRecord {
                sequence,
                timestamp_ms,
                level,
                args: args.clone(),
            });
            sequence
        };

        match level {
            LogLevel::Error => error!(sequence, args = ?args.as_slice(), "error event"),
            LogLevel::Success => info!(sequence, args = ?args.as_slice(), "success event"),
        }
    }
}

/// Subscribes `log_error` to `error` and `log_success` to `success`.
///
/// Dropping the logger (or calling [`EventLogger::detach`]) unsubscribes
/// both handlers.
pub struct EventLogger<C: Clock = SystemClock> {
    journal: Arc<Journal<C>>,
    _error: SubscriptionGuard<Args>,
    _success: SubscriptionGuard<Args>,
}

impl EventLogger<SystemClock> {
    pub fn attach(bus: &EventBus<Args>) -> Self {
        Self::attach_with_clock(bus, SystemClock)
    }
}

impl<C: Clock> EventLogger<C> {
    pub fn attach_with_clock(bus: &EventBus<Args>, clock: C) -> Self {
        let started = clock.now();
        let journal = Arc::new(Journal {
            clock,
            started,
            records: Mutex::new(Vec::new()),
        });

        let log_error = handler(&journal, LogLevel::Error);
        let log_success = handler(&journal, LogLevel::Success);

        Self {
            _error: bus.subscribe(ERROR_EVENT, &log_error).guard(),
            _success: bus.subscribe(SUCCESS_EVENT, &log_success).guard(),
            journal,
        }
    }

    /// Records seen so far, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.journal
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Unsubscribe both handlers and hand back everything recorded
    pub fn detach(self) -> Vec<LogRecord> {
        self.records()
    }
}

fn handler<C: Clock>(journal: &Arc<Journal<C>>, level: LogLevel) -> Listener<Args> {
    let journal = Arc::clone(journal);
    Listener::new(move |args: &Args| journal.record(level, args))
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
