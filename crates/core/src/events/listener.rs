// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener handles with pointer identity

use crate::error::{FailureKind, ListenerError};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type ListenerFn<A> = dyn Fn(&A) -> Result<(), ListenerError> + Send + Sync;

/// A callback registered against an event name.
///
/// Identity is the shared allocation: clones of a `Listener` are the same
/// listener, while two `Listener::new` calls wrapping identical closures are
/// distinct listeners.
pub struct Listener<A> {
    func: Arc<ListenerFn<A>>,
}

impl<A: 'static> Listener<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move |args: &A| {
                f(args);
                Ok(())
            }),
        }
    }

    /// Wrap a callback whose `Err` is reported as a listener failure
    pub fn fallible<F, E>(f: F) -> Self
    where
        F: Fn(&A) -> Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self {
            func: Arc::new(move |args: &A| {
                f(args).map_err(|e| ListenerError::new(e.to_string()))
            }),
        }
    }
}

impl<A> Listener<A> {
    /// True if both handles refer to the same underlying callback
    pub fn same(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.func) as *const () == Arc::as_ptr(&other.func) as *const ()
    }

    /// Run the callback, converting a panic or `Err` into a failure report
    pub(crate) fn invoke(&self, args: &A) -> Result<(), (FailureKind, String)> {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.func)(args))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err((FailureKind::Returned, e.0)),
            Err(payload) => Err((FailureKind::Panicked, panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&(Arc::as_ptr(&self.func) as *const ()))
            .finish()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
