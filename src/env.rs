// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! Environment variable access.
//!
//! All configuration loaders read through [`EnvSource`] rather than touching
//! `std::env` directly, so tests can substitute deterministic values without
//! mutating the real process environment.
//!
//! An empty value is treated the same as an absent one: setting
//! `VITE_AWS_REGION=""` falls back to the default, never to an empty region.
//! Non-empty values pass through byte-for-byte with no trimming.

use std::collections::HashMap;

/// Read-only source of environment variables.
pub trait EnvSource {
    /// Look up a variable. Returns `None` when the variable is unset or
    /// set to the empty string.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Map-backed environment for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty source (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned().filter(|v| !v.is_empty())
    }
}

/// Read a variable, falling back to `default` when unset or empty.
pub fn var_or(env: &dyn EnvSource, key: &str, default: &str) -> String {
    env.var(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_env_returns_set_values() {
        let env = StaticEnv::new().set("KEY", "value");
        assert_eq!(env.var("KEY"), Some("value".to_string()));
        assert_eq!(env.var("OTHER"), None);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let env = StaticEnv::new().set("KEY", "");
        assert_eq!(env.var("KEY"), None);
        assert_eq!(var_or(&env, "KEY", "fallback"), "fallback");
    }

    #[test]
    fn values_pass_through_untrimmed() {
        let env = StaticEnv::new().set("KEY", "  padded  ");
        assert_eq!(env.var("KEY"), Some("  padded  ".to_string()));
    }

    #[test]
    fn var_or_prefers_set_value() {
        let env = StaticEnv::new().set("KEY", "set");
        assert_eq!(var_or(&env, "KEY", "default"), "set");
        assert_eq!(var_or(&env, "MISSING", "default"), "default");
    }
}
