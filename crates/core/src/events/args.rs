// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional, dynamically typed event arguments

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variadic argument list passed to every listener of an emit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Vec<Value>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Argument at `index` if it is a JSON string
    pub fn str(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build an [`Args`] list from JSON-convertible expressions
///
/// Each comma-separated argument goes through `serde_json::json!`, so
/// literals, `{ .. }` objects and arbitrary expressions are all accepted.
///
/// ```
/// use herald_core::args;
///
/// let retries = 2;
/// let args = args!["boom", -1, retries + 1, { "retry": false }];
/// assert_eq!(args.str(0), Some("boom"));
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::events::Args::new()
    };
    ($($tokens:tt)+) => {
        $crate::__args!([] [] $($tokens)+)
    };
}

/// Splits `args!` input on top-level commas: `[finished] [current] input..`
#[doc(hidden)]
#[macro_export]
macro_rules! __args {
    ([$(($($done:tt)+))*] []) => {
        $crate::events::Args::from(vec![$($crate::__private::serde_json::json!($($done)+)),*])
    };
    ([$($done:tt)*] [$($current:tt)+]) => {
        $crate::__args!([$($done)* ($($current)+)] [])
    };
    ([$($done:tt)*] [$($current:tt)+] , $($rest:tt)*) => {
        $crate::__args!([$($done)* ($($current)+)] [] $($rest)*)
    };
    ([$($done:tt)*] [$($current:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__args!([$($done)*] [$($current)* $next] $($rest)*)
    };
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
