// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # Client Application Configuration
//!
//! Deployment-time values for the Nexus web client, loaded from the
//! environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `VITE_API_BASE_URL` | REST API base URL | `http://localhost:3000` |
//! | `VITE_WS_URL` | WebSocket endpoint URL | `ws://localhost:3001` |
//! | `VITE_STORAGE_PREFIX` | Local-storage key namespace | `nexus_` |
//!
//! URLs are passed through unvalidated; a malformed value surfaces at the
//! point of use, not here.

use serde::{Deserialize, Serialize};

use crate::env::{var_or, EnvSource};

/// Default REST API base URL (local development).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default WebSocket endpoint URL (local development).
pub const DEFAULT_WS_URL: &str = "ws://localhost:3001";

/// Default translation engine.
pub const DEFAULT_ENGINE: &str = "T5";

/// Default prefix for local-storage keys.
pub const DEFAULT_STORAGE_PREFIX: &str = "nexus_";

/// Build mode of the running client.
///
/// Supplied by the embedding build context rather than read from the
/// environment; exactly one of the two flags on [`AppConfig`] is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Local development build.
    Development,
    /// Production build.
    Production,
}

/// Client application configuration.
///
/// Constructed once at startup and never mutated; safe to share across any
/// number of readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST API base URL.
    pub api_base_url: String,
    /// WebSocket endpoint URL.
    pub ws_url: String,
    /// True for development builds.
    pub is_development: bool,
    /// True for production builds.
    pub is_production: bool,
    /// Engine selected when the user has not chosen one.
    pub default_engine: String,
    /// Prefix namespacing local-storage keys.
    pub storage_prefix: String,
}

impl AppConfig {
    /// Load configuration from the given environment source.
    ///
    /// Absent or empty variables fall back to their literal defaults; set
    /// values pass through byte-for-byte.
    pub fn load(env: &dyn EnvSource, mode: BuildMode) -> Self {
        Self {
            api_base_url: var_or(env, "VITE_API_BASE_URL", DEFAULT_API_BASE_URL),
            ws_url: var_or(env, "VITE_WS_URL", DEFAULT_WS_URL),
            is_development: mode == BuildMode::Development,
            is_production: mode == BuildMode::Production,
            default_engine: DEFAULT_ENGINE.to_string(),
            storage_prefix: var_or(env, "VITE_STORAGE_PREFIX", DEFAULT_STORAGE_PREFIX),
        }
    }
}
