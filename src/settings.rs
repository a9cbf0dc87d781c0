// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # Backend Service Settings
//!
//! Central settings for the serverless backend. Resource names (DynamoDB
//! tables, Lambda functions, API endpoints) are derived from the service
//! name and stack suffix instead of being hard-coded per deployment.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SERVICE_NAME` | Service name, prefixes every resource | `nexus` |
//! | `ENVIRONMENT` | Deployment tier (`dev`/`staging`/`prod`) | `dev` |
//! | `STACK_SUFFIX` | Stack suffix, terminates every resource name | `dev` |
//! | `AWS_REGION` | Deployment region | `us-east-1` |
//! | `AWS_ACCOUNT_ID` | Account id | unset |
//! | `API_STAGE` | API Gateway stage name | `prod` |
//! | `REST_API_ID` | REST API Gateway id | unset |
//! | `WEBSOCKET_API_ID` | WebSocket API Gateway id | unset |
//! | `BEDROCK_MODEL_ID` | Bedrock model identifier | Claude 3 Sonnet |
//! | `LOG_LEVEL` | Log level filter | `info` |
//! | `{TABLE}_TABLE` | Per-table name override (e.g. `CONVERSATIONS_TABLE`) | unset |

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

use crate::env::{var_or, EnvSource};
use crate::logging::LogLevel;
use crate::profile::Tier;

/// Default service name.
pub const DEFAULT_SERVICE_NAME: &str = "nexus";

/// Default stack suffix.
pub const DEFAULT_STACK_SUFFIX: &str = "dev";

/// Default deployment region.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default API Gateway stage.
pub const DEFAULT_API_STAGE: &str = "prod";

/// Default Bedrock model identifier.
pub const DEFAULT_BEDROCK_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Kind of API Gateway endpoint to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    /// REST API (`https://` scheme).
    Rest,
    /// WebSocket API (`wss://` scheme).
    WebSocket,
}

/// Error raised when required settings are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A required field is empty.
    #[error("required setting {0} is not set")]
    MissingField(&'static str),
}

/// Backend service settings.
///
/// Loaded once at startup; resource-name helpers are pure functions over the
/// loaded values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Service name; prefixes every derived resource name.
    pub service_name: String,
    /// Deployment tier.
    pub environment: Tier,
    /// Stack suffix; terminates every derived resource name.
    pub stack_suffix: String,
    /// Deployment region.
    pub aws_region: String,
    /// Account id, when provided by the deployment.
    pub aws_account_id: Option<String>,
    /// API Gateway stage name.
    pub api_stage: String,
    /// REST API Gateway id, when provisioned.
    pub rest_api_id: Option<String>,
    /// WebSocket API Gateway id, when provisioned.
    pub websocket_api_id: Option<String>,
    /// Bedrock model identifier.
    pub bedrock_model_id: String,
    /// Log level filter.
    pub log_level: LogLevel,
    /// Per-table name overrides captured from `{TYPE}_TABLE` variables at
    /// load time.
    #[serde(skip)]
    table_overrides: Vec<(String, String)>,
}

impl Settings {
    /// Load settings from the given environment source.
    pub fn load(env: &dyn EnvSource) -> Self {
        let mut table_overrides = Vec::new();
        for table in TABLE_BASE_NAMES {
            let key = format!("{}_TABLE", table.0.to_uppercase());
            if let Some(value) = env.var(&key) {
                table_overrides.push((table.0.to_string(), value));
            }
        }

        Self {
            service_name: var_or(env, "SERVICE_NAME", DEFAULT_SERVICE_NAME),
            environment: Tier::from_env(env),
            stack_suffix: var_or(env, "STACK_SUFFIX", DEFAULT_STACK_SUFFIX),
            aws_region: var_or(env, "AWS_REGION", DEFAULT_AWS_REGION),
            aws_account_id: env.var("AWS_ACCOUNT_ID"),
            api_stage: var_or(env, "API_STAGE", DEFAULT_API_STAGE),
            rest_api_id: env.var("REST_API_ID"),
            websocket_api_id: env.var("WEBSOCKET_API_ID"),
            bedrock_model_id: var_or(env, "BEDROCK_MODEL_ID", DEFAULT_BEDROCK_MODEL_ID),
            log_level: LogLevel::from_str_or_default(&var_or(env, "LOG_LEVEL", "info")),
            table_overrides,
        }
    }

    /// Prefix shared by every derived resource name.
    pub fn table_prefix(&self) -> String {
        format!("{}-", self.service_name)
    }

    /// Suffix shared by every derived resource name.
    pub fn table_suffix(&self) -> String {
        format!("-{}", self.stack_suffix)
    }

    /// DynamoDB table name for a logical table type.
    ///
    /// A `{TYPE}_TABLE` environment override (captured at load time) wins;
    /// otherwise the name is `{service}-{base}-{suffix}`, where known table
    /// types map to their canonical base name and unknown types pass through.
    pub fn table_name(&self, table_type: &str) -> String {
        if let Some((_, name)) = self
            .table_overrides
            .iter()
            .find(|(kind, _)| kind == table_type)
        {
            return name.clone();
        }

        let base = TABLE_BASE_NAMES
            .iter()
            .find(|(kind, _)| *kind == table_type)
            .map_or(table_type, |&(_, base)| base);
        format!("{}{}{}", self.table_prefix(), base, self.table_suffix())
    }

    /// Lambda function name for a logical function type.
    pub fn lambda_name(&self, function_type: &str) -> String {
        let base = LAMBDA_BASE_NAMES
            .iter()
            .find(|(kind, _)| *kind == function_type)
            .map_or(function_type, |&(_, base)| base);
        format!("{}{}{}", self.table_prefix(), base, self.table_suffix())
    }

    /// API Gateway endpoint URL, or `None` when the matching API id is not
    /// provisioned.
    pub fn api_endpoint(&self, kind: ApiKind) -> Option<String> {
        match kind {
            ApiKind::Rest => self.rest_api_id.as_ref().map(|id| {
                format!(
                    "https://{id}.execute-api.{}.amazonaws.com/{}",
                    self.aws_region, self.api_stage
                )
            }),
            ApiKind::WebSocket => self.websocket_api_id.as_ref().map(|id| {
                format!(
                    "wss://{id}.execute-api.{}.amazonaws.com/{}",
                    self.aws_region, self.api_stage
                )
            }),
        }
    }

    /// Serializable snapshot of the headline settings, for startup logging
    /// and debugging.
    pub fn summary(&self) -> Value {
        json!({
            "service_name": self.service_name,
            "environment": self.environment,
            "aws_region": self.aws_region,
            "table_prefix": self.table_prefix(),
            "table_suffix": self.table_suffix(),
            "log_level": self.log_level,
            "bedrock_model_id": self.bedrock_model_id,
        })
    }

    /// Check that required settings are present.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingField`] for the first empty required
    /// field, after logging a warning.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("SERVICE_NAME", self.service_name.as_str()),
            ("AWS_REGION", self.aws_region.as_str()),
        ];
        for (name, value) in required {
            if value.is_empty() {
                warn!(setting = name, "required setting is not set");
                return Err(SettingsError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// Canonical base names for known logical table types.
const TABLE_BASE_NAMES: &[(&str, &str)] = &[
    ("conversations", "conversations"),
    ("prompts", "prompts"),
    ("usage", "usage"),
    ("websocket", "websocket-connections"),
    ("websocket_connections", "websocket-connections"),
    ("files", "files"),
    ("messages", "messages"),
];

/// Canonical base names for known logical Lambda function types.
const LAMBDA_BASE_NAMES: &[(&str, &str)] = &[
    ("conversation", "conversation-api"),
    ("prompt", "prompt-crud"),
    ("usage", "usage-handler"),
    ("connect", "websocket-connect"),
    ("disconnect", "websocket-disconnect"),
    ("message", "websocket-message"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let settings = Settings::load(&StaticEnv::new());

        assert_eq!(settings.service_name, "nexus");
        assert_eq!(settings.environment, Tier::Dev);
        assert_eq!(settings.stack_suffix, "dev");
        assert_eq!(settings.aws_region, "us-east-1");
        assert_eq!(settings.api_stage, "prod");
        assert_eq!(settings.aws_account_id, None);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn custom_values_pass_through() {
        let env = StaticEnv::new()
            .set("SERVICE_NAME", "my-service")
            .set("ENVIRONMENT", "prod")
            .set("STACK_SUFFIX", "prod")
            .set("AWS_REGION", "ap-northeast-2");
        let settings = Settings::load(&env);

        assert_eq!(settings.service_name, "my-service");
        assert_eq!(settings.environment, Tier::Prod);
        assert_eq!(settings.stack_suffix, "prod");
        assert_eq!(settings.aws_region, "ap-northeast-2");
    }

    #[test]
    fn table_names_follow_the_naming_pattern() {
        let env = StaticEnv::new()
            .set("SERVICE_NAME", "test-service")
            .set("STACK_SUFFIX", "staging");
        let settings = Settings::load(&env);

        assert_eq!(
            settings.table_name("conversations"),
            "test-service-conversations-staging"
        );
        assert_eq!(settings.table_name("prompts"), "test-service-prompts-staging");
        assert_eq!(settings.table_name("usage"), "test-service-usage-staging");
        assert_eq!(
            settings.table_name("websocket"),
            "test-service-websocket-connections-staging"
        );
    }

    #[test]
    fn unknown_table_type_passes_through() {
        let settings = Settings::load(&StaticEnv::new());
        assert_eq!(settings.table_name("audit"), "nexus-audit-dev");
    }

    #[test]
    fn table_override_wins_over_pattern() {
        let env = StaticEnv::new()
            .set("SERVICE_NAME", "test-service")
            .set("CONVERSATIONS_TABLE", "custom-conversations-table");
        let settings = Settings::load(&env);
        assert_eq!(
            settings.table_name("conversations"),
            "custom-conversations-table"
        );
        // Other tables still follow the pattern.
        assert_eq!(settings.table_name("prompts"), "test-service-prompts-dev");
    }

    #[test]
    fn lambda_names_follow_the_naming_pattern() {
        let settings = Settings::load(&StaticEnv::new());
        assert_eq!(settings.lambda_name("conversation"), "nexus-conversation-api-dev");
        assert_eq!(settings.lambda_name("connect"), "nexus-websocket-connect-dev");
        assert_eq!(settings.lambda_name("custom"), "nexus-custom-dev");
    }

    #[test]
    fn api_endpoints_require_provisioned_ids() {
        let settings = Settings::load(&StaticEnv::new());
        assert_eq!(settings.api_endpoint(ApiKind::Rest), None);
        assert_eq!(settings.api_endpoint(ApiKind::WebSocket), None);

        let env = StaticEnv::new()
            .set("REST_API_ID", "abc123")
            .set("WEBSOCKET_API_ID", "def456")
            .set("AWS_REGION", "us-east-1")
            .set("API_STAGE", "prod");
        let settings = Settings::load(&env);
        assert_eq!(
            settings.api_endpoint(ApiKind::Rest).as_deref(),
            Some("https://abc123.execute-api.us-east-1.amazonaws.com/prod")
        );
        assert_eq!(
            settings.api_endpoint(ApiKind::WebSocket).as_deref(),
            Some("wss://def456.execute-api.us-east-1.amazonaws.com/prod")
        );
    }

    #[test]
    fn summary_contains_headline_settings() {
        let settings = Settings::load(&StaticEnv::new());
        let summary = settings.summary();
        assert_eq!(summary["service_name"], "nexus");
        assert_eq!(summary["table_prefix"], "nexus-");
        assert_eq!(summary["table_suffix"], "-dev");
    }

    #[test]
    fn loaded_settings_validate() {
        assert_eq!(Settings::load(&StaticEnv::new()).validate(), Ok(()));
    }

    #[test]
    fn empty_required_field_fails_validation() {
        let mut settings = Settings::load(&StaticEnv::new());
        settings.aws_region = String::new();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::MissingField("AWS_REGION"))
        );
    }
}
