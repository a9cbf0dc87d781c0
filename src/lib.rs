// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! Nexus - Environment-Derived Configuration
//!
//! This crate provides the immutable configuration records for the Nexus
//! application: client-side deployment values, SSO parameters, and the
//! backend's service settings. Everything is loaded once from the process
//! environment at startup and never mutated, so records can be shared across
//! any number of readers without synchronisation.
//!
//! ## Modules
//!
//! - `env` - Injectable environment variable access
//! - `app` - Client application configuration
//! - `sso` - SSO / identity-provider configuration
//! - `settings` - Backend service settings and resource naming
//! - `tables` - Table catalog (key schema per logical table)
//! - `profile` - Per-tier (dev/staging/prod) literal profiles
//! - `logging` - Tracing subscriber bootstrap

pub mod app;
pub mod env;
pub mod logging;
pub mod profile;
pub mod settings;
pub mod sso;
pub mod tables;

pub use app::{AppConfig, BuildMode};
pub use env::{EnvSource, ProcessEnv, StaticEnv};
pub use logging::{init_logging, LogFormat, LogLevel};
pub use profile::{Tier, TierProfile};
pub use settings::{ApiKind, Settings, SettingsError};
pub use sso::SsoConfig;
pub use tables::{TableCatalog, TableSpec};
