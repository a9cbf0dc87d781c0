// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # Deployment Tier Profiles
//!
//! Literal per-tier settings (dev/staging/prod) selected by the
//! `ENVIRONMENT` variable. Profiles hold the values that vary by tier but
//! not by deployment: throttling limits, cache lifetimes, CORS origins,
//! feature flags.
//!
//! An unrecognised tier name falls back to `dev`.

use serde::{Deserialize, Serialize};

use crate::env::EnvSource;
use crate::logging::LogLevel;
use crate::settings::DEFAULT_BEDROCK_MODEL_ID;

/// Deployment tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Local and shared development.
    Dev,
    /// Pre-production staging.
    Staging,
    /// Production.
    Prod,
}

impl Tier {
    /// Parse a tier name; unknown names fall back to `Dev`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "staging" => Tier::Staging,
            "prod" => Tier::Prod,
            _ => Tier::Dev,
        }
    }

    /// Read the tier from `ENVIRONMENT`.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self::from_name(&env.var("ENVIRONMENT").unwrap_or_default())
    }

    /// The profile for this tier.
    pub fn profile(self) -> TierProfile {
        match self {
            Tier::Dev => TierProfile::dev(),
            Tier::Staging => TierProfile::staging(),
            Tier::Prod => TierProfile::prod(),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Dev => write!(f, "dev"),
            Tier::Staging => write!(f, "staging"),
            Tier::Prod => write!(f, "prod"),
        }
    }
}

/// Model invocation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockProfile {
    /// Model identifier.
    pub model_id: String,
    /// Response token ceiling.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Invocation timeout in seconds.
    pub timeout_secs: u64,
}

/// API throttling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleProfile {
    /// Steady-state requests per second.
    pub rate_limit: u32,
    /// Burst ceiling.
    pub burst_limit: u32,
    /// Whether throttling is enforced.
    pub enabled: bool,
}

/// WebSocket connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSocketProfile {
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
    /// Maximum concurrent connections.
    pub max_connections: u32,
}

/// Conversation size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLimits {
    /// Maximum input tokens per request.
    pub max_input_tokens: u32,
    /// Maximum output tokens per response.
    pub max_output_tokens: u32,
    /// Maximum messages retained per conversation.
    pub max_conversation_length: u32,
}

/// Feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Streaming responses.
    pub streaming: bool,
    /// File upload.
    pub file_upload: bool,
    /// Usage tracking.
    pub usage_tracking: bool,
    /// Conversation history.
    pub conversation_history: bool,
    /// Prompt management.
    pub prompt_management: bool,
}

impl Features {
    const fn all() -> Self {
        Self {
            streaming: true,
            file_upload: true,
            usage_tracking: true,
            conversation_history: true,
            prompt_management: true,
        }
    }
}

/// Per-tier literal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Log level for this tier.
    pub log_level: LogLevel,
    /// Whether detailed (per-request) logs are emitted.
    pub detailed_logs: bool,
    /// Region this tier deploys to.
    pub aws_region: String,
    /// Model invocation settings.
    pub bedrock: BedrockProfile,
    /// API throttling settings.
    pub throttle: ThrottleProfile,
    /// WebSocket connection settings.
    pub websocket: WebSocketProfile,
    /// Cache time-to-live in seconds.
    pub cache_ttl_secs: u64,
    /// Whether caching is enabled.
    pub cache_enabled: bool,
    /// Conversation size limits.
    pub limits: TokenLimits,
    /// Debug mode.
    pub debug: bool,
    /// X-Ray tracing.
    pub xray: bool,
    /// Runtime profiling.
    pub profiling: bool,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Whether CORS allows credentials.
    pub cors_credentials: bool,
    /// Feature flags.
    pub features: Features,
}

impl TierProfile {
    fn dev() -> Self {
        Self {
            log_level: LogLevel::Debug,
            detailed_logs: true,
            aws_region: "us-east-1".to_string(),
            bedrock: BedrockProfile {
                model_id: DEFAULT_BEDROCK_MODEL_ID.to_string(),
                max_tokens: 4096,
                temperature: 0.7,
                timeout_secs: 60,
            },
            throttle: ThrottleProfile {
                rate_limit: 100,
                burst_limit: 200,
                enabled: false,
            },
            websocket: WebSocketProfile {
                idle_timeout_secs: 600,
                max_connections: 100,
            },
            cache_ttl_secs: 60,
            cache_enabled: false,
            limits: TokenLimits {
                max_input_tokens: 3000,
                max_output_tokens: 3000,
                max_conversation_length: 30,
            },
            debug: true,
            xray: false,
            profiling: false,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            cors_credentials: true,
            features: Features::all(),
        }
    }

    fn staging() -> Self {
        Self {
            log_level: LogLevel::Info,
            detailed_logs: true,
            aws_region: "us-east-1".to_string(),
            bedrock: BedrockProfile {
                model_id: "us.anthropic.claude-opus-4-1-20250805-v1:0".to_string(),
                max_tokens: 4096,
                temperature: 0.7,
                timeout_secs: 120,
            },
            throttle: ThrottleProfile {
                rate_limit: 500,
                burst_limit: 1000,
                enabled: true,
            },
            websocket: WebSocketProfile {
                idle_timeout_secs: 900,
                max_connections: 500,
            },
            cache_ttl_secs: 600,
            cache_enabled: true,
            limits: TokenLimits {
                max_input_tokens: 3000,
                max_output_tokens: 3000,
                max_conversation_length: 30,
            },
            debug: false,
            xray: true,
            profiling: false,
            cors_origins: vec![
                "https://staging.nexus.example.com".to_string(),
                "https://staging-admin.nexus.example.com".to_string(),
            ],
            cors_credentials: true,
            features: Features::all(),
        }
    }

    fn prod() -> Self {
        Self {
            log_level: LogLevel::Warn,
            detailed_logs: false,
            // Seoul region for production.
            aws_region: "ap-northeast-2".to_string(),
            bedrock: BedrockProfile {
                model_id: "us.anthropic.claude-opus-4-1-20250805-v1:0".to_string(),
                max_tokens: 4096,
                // Production favours more consistent responses.
                temperature: 0.5,
                timeout_secs: 180,
            },
            throttle: ThrottleProfile {
                rate_limit: 1000,
                burst_limit: 2000,
                enabled: true,
            },
            websocket: WebSocketProfile {
                idle_timeout_secs: 1800,
                max_connections: 1000,
            },
            cache_ttl_secs: 1800,
            cache_enabled: true,
            limits: TokenLimits {
                max_input_tokens: 4000,
                max_output_tokens: 4000,
                max_conversation_length: 50,
            },
            debug: false,
            xray: true,
            profiling: true,
            cors_origins: vec![
                "https://nexus.example.com".to_string(),
                "https://www.nexus.example.com".to_string(),
                "https://admin.nexus.example.com".to_string(),
            ],
            cors_credentials: true,
            features: Features::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn unknown_tier_falls_back_to_dev() {
        assert_eq!(Tier::from_name("prod"), Tier::Prod);
        assert_eq!(Tier::from_name("staging"), Tier::Staging);
        assert_eq!(Tier::from_name("dev"), Tier::Dev);
        assert_eq!(Tier::from_name("qa"), Tier::Dev);
        assert_eq!(Tier::from_name(""), Tier::Dev);
    }

    #[test]
    fn tier_reads_environment_variable() {
        let env = StaticEnv::new().set("ENVIRONMENT", "staging");
        assert_eq!(Tier::from_env(&env), Tier::Staging);
        assert_eq!(Tier::from_env(&StaticEnv::new()), Tier::Dev);
    }

    #[test]
    fn prod_profile_locks_down_logging_and_debug() {
        let profile = Tier::Prod.profile();
        assert_eq!(profile.log_level, LogLevel::Warn);
        assert!(!profile.detailed_logs);
        assert!(!profile.debug);
        assert!(profile.throttle.enabled);
        assert_eq!(profile.aws_region, "ap-northeast-2");
    }

    #[test]
    fn staging_profile_keeps_detailed_logs() {
        let profile = Tier::Staging.profile();
        assert_eq!(profile.log_level, LogLevel::Info);
        assert!(profile.detailed_logs);
        assert_eq!(profile.cors_origins.len(), 2);
    }

    #[test]
    fn dev_profile_disables_throttling() {
        let profile = Tier::Dev.profile();
        assert_eq!(profile.log_level, LogLevel::Debug);
        assert!(!profile.throttle.enabled);
        assert!(!profile.cache_enabled);
        assert!(profile.debug);
    }

    #[test]
    fn every_tier_enables_all_features() {
        for tier in [Tier::Dev, Tier::Staging, Tier::Prod] {
            let features = tier.profile().features;
            assert!(features.streaming, "{tier}");
            assert!(features.file_upload, "{tier}");
            assert!(features.usage_tracking, "{tier}");
            assert!(features.conversation_history, "{tier}");
            assert!(features.prompt_management, "{tier}");
        }
    }

    #[test]
    fn tier_display_matches_environment_names() {
        assert_eq!(Tier::Prod.to_string(), "prod");
        assert_eq!(Tier::from_name(&Tier::Staging.to_string()), Tier::Staging);
    }
}
