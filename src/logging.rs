// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # Logging Bootstrap
//!
//! Installs the global tracing subscriber from environment-derived settings.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LOG_FORMAT` | Output format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Filter directives, overrides the level | unset |

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::env::EnvSource;

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Routine operational events.
    #[default]
    Info,
    /// Diagnostic detail.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Parse a level name (case-insensitive); unknown names fall back to
    /// `Info`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// The equivalent `tracing::Level`.
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Structured JSON lines, for log aggregation.
    Json,
    /// Human-readable output, for local development.
    #[default]
    Pretty,
}

impl LogFormat {
    /// Read the format from `LOG_FORMAT`; anything other than `json` means
    /// pretty.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        match env.var("LOG_FORMAT").as_deref() {
            Some("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Error installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` (read through `env`) takes precedence over `level`; `LOG_FORMAT`
/// selects JSON or pretty output.
///
/// # Errors
///
/// Returns [`LoggingError::Install`] when a subscriber is already set.
pub fn init_logging(env: &dyn EnvSource, level: LogLevel) -> Result<(), LoggingError> {
    let filter = match env.var("RUST_LOG") {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(level.to_string()),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match LogFormat::from_env(env) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    result.map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!(LogLevel::from_str_or_default("INFO"), LogLevel::Info);
        assert_eq!(LogLevel::from_str_or_default("Warning"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn level_maps_to_tracing() {
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn level_display_round_trips() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(LogLevel::from_str_or_default(&level.to_string()), level);
        }
    }

    #[test]
    fn format_defaults_to_pretty() {
        assert_eq!(LogFormat::from_env(&StaticEnv::new()), LogFormat::Pretty);

        let env = StaticEnv::new().set("LOG_FORMAT", "json");
        assert_eq!(LogFormat::from_env(&env), LogFormat::Json);

        let env = StaticEnv::new().set("LOG_FORMAT", "JSON");
        assert_eq!(LogFormat::from_env(&env), LogFormat::Pretty);
    }
}
