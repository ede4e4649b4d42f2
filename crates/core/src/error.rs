// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for event dispatch

use std::fmt;
use thiserror::Error;

/// Error a fallible listener hands back to the bus
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// How a listener invocation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The listener body panicked
    Panicked,
    /// The listener returned `Err`
    Returned,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Panicked => write!(f, "panicked"),
            FailureKind::Returned => write!(f, "returned an error"),
        }
    }
}

/// A single listener failure captured during `emit`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener #{position} for '{event}' {kind}: {message}")]
pub struct ListenerFailure {
    /// Event name being dispatched
    pub event: String,
    /// Position of the listener in the dispatch snapshot
    pub position: usize,
    pub kind: FailureKind,
    pub message: String,
}

/// Failures collected while dispatching one event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} listener(s) failed while emitting '{event}'", failures.len())]
pub struct EmitError {
    pub event: String,
    /// Failures in dispatch order, never empty
    pub failures: Vec<ListenerFailure>,
}

impl EmitError {
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Errors from the statically typed bus
#[derive(Debug, Error)]
pub enum TypedBusError {
    #[error("event '{event}' is registered with args {registered}, not {requested}")]
    ArgsMismatch {
        event: &'static str,
        registered: &'static str,
        requested: &'static str,
    },
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Errors loading bus configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or schema error
    #[error("TOML syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
