// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus configuration
//!
//! Loaded from TOML. Every field is optional:
//!
//! ```toml
//! failure_policy = "fail-fast"
//! max_listeners = 25
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listener count above which a channel logs a leak warning
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// What `emit` does when a listener panics or returns an error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Run every listener, then report all failures together
    #[default]
    Isolate,
    /// Stop dispatch at the first failure
    FailFast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    pub failure_policy: FailurePolicy,
    /// Warn the first time an event has more listeners than this (0 disables)
    pub max_listeners: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

impl BusConfig {
    /// Parse configuration from TOML string content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BusConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.max_listeners = max;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
