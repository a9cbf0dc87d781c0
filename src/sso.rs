// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # SSO Configuration
//!
//! Identity-provider parameters for Cognito-backed single sign-on, loaded
//! from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `VITE_COGNITO_USER_POOL_ID` | Cognito user pool id | unset |
//! | `VITE_AWS_REGION` | Cognito pool region | `us-east-1` |
//! | `VITE_ADMIN_EMAIL` | Administrator email | `admin@example.com` |
//! | `VITE_COMPANY_DOMAIN` | Company email suffix (with `@`) | `@example.com` |
//! | `VITE_SSO_ALLOWED_ORIGINS` | Comma-separated origin list | empty |
//! | `VITE_COOKIE_DOMAIN` | Session cookie domain | runtime host name |
//! | `VITE_STORAGE_PREFIX` | Local-storage key namespace | `nexus_` |
//!
//! No value is validated: emails, origins, and pool ids pass through as-is.
//! Callers needing stricter guarantees must check externally.

use serde::{Deserialize, Serialize};

use crate::app::DEFAULT_STORAGE_PREFIX;
use crate::env::{var_or, EnvSource};

/// Default Cognito region.
pub const DEFAULT_COGNITO_REGION: &str = "us-east-1";

/// Default administrator email.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Default company email domain, including the leading `@`.
pub const DEFAULT_COMPANY_DOMAIN: &str = "@example.com";

/// SSO configuration.
///
/// Constructed once at startup and never mutated. The derived helpers
/// ([`issuer`](Self::issuer), [`is_admin_email`](Self::is_admin_email),
/// [`is_company_email`](Self::is_company_email)) are pure functions over the
/// loaded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoConfig {
    /// Cognito user pool id. Absent when SSO is not provisioned.
    pub cognito_pool_id: Option<String>,
    /// Region hosting the pool.
    pub cognito_region: String,
    /// Administrator email, matched byte-for-byte.
    pub admin_email: String,
    /// Company email suffix, including the leading `@`.
    pub company_domain: String,
    /// Origins allowed to initiate the SSO flow. Never contains `""`.
    pub allowed_origins: Vec<String>,
    /// Domain scoping the session cookie.
    pub cookie_domain: String,
    /// Prefix namespacing local-storage keys.
    pub storage_prefix: String,
}

impl SsoConfig {
    /// Load configuration from the given environment source.
    ///
    /// `runtime_hostname` is the ambient host name of the running client; it
    /// becomes the cookie domain when `VITE_COOKIE_DOMAIN` is unset, so two
    /// otherwise-identical processes may differ in this one field.
    pub fn load(env: &dyn EnvSource, runtime_hostname: &str) -> Self {
        Self {
            cognito_pool_id: env.var("VITE_COGNITO_USER_POOL_ID"),
            cognito_region: var_or(env, "VITE_AWS_REGION", DEFAULT_COGNITO_REGION),
            admin_email: var_or(env, "VITE_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            company_domain: var_or(env, "VITE_COMPANY_DOMAIN", DEFAULT_COMPANY_DOMAIN),
            allowed_origins: split_origins(&var_or(env, "VITE_SSO_ALLOWED_ORIGINS", "")),
            cookie_domain: var_or(env, "VITE_COOKIE_DOMAIN", runtime_hostname),
            storage_prefix: var_or(env, "VITE_STORAGE_PREFIX", DEFAULT_STORAGE_PREFIX),
        }
    }

    /// Cognito issuer URL for the configured pool.
    ///
    /// Returns `https://cognito-idp.{region}.amazonaws.com/{poolId}` with the
    /// loaded values substituted verbatim. An absent pool id yields an empty
    /// final segment; the result is not guarded here.
    pub fn issuer(&self) -> String {
        format!(
            "https://cognito-idp.{}.amazonaws.com/{}",
            self.cognito_region,
            self.cognito_pool_id.as_deref().unwrap_or_default()
        )
    }

    /// True iff `email` equals the configured administrator email exactly.
    /// Case-sensitive, no trimming, no normalization.
    pub fn is_admin_email(&self, email: &str) -> bool {
        email == self.admin_email
    }

    /// True iff `email` ends with the configured company domain.
    ///
    /// Plain suffix match including the leading `@`; no structural email
    /// validation is performed.
    pub fn is_company_email(&self, email: &str) -> bool {
        email.ends_with(&self.company_domain)
    }
}

/// Split a comma-separated origin list, discarding empty segments.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
