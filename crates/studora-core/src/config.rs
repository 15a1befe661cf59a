//! Application configuration and secret models.
//!
//! Persisted as `config.toml` and `secret.json` under the platform config
//! directory; see the infrastructure crate for the services that load and
//! save them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_profile_fetch_timeout_ms() -> u64 {
    10_000
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_identity_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

/// Access-guard behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Renders protected content unconditionally. Local development only;
    /// never enable this in a deployed configuration.
    #[serde(default)]
    pub skip_auth_for_local_dev: bool,

    /// Upper bound on one profile fetch before the guard gives up and
    /// redirects to login.
    #[serde(default = "default_profile_fetch_timeout_ms")]
    pub profile_fetch_timeout_ms: u64,
}

impl GuardConfig {
    pub fn profile_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_fetch_timeout_ms)
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            skip_auth_for_local_dev: false,
            profile_fetch_timeout_ms: default_profile_fetch_timeout_ms(),
        }
    }
}

/// Generative-model selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

/// Base URLs of the hosted services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    /// Document database base URL. Empty until configured.
    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_identity_url")]
    pub identity_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            identity_url: default_identity_url(),
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub services: ServiceEndpoints,
}

// ============================================================================
// Secrets
// ============================================================================

/// API key for the generative-model endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

/// API key for the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySecret {
    pub api_key: String,
}

/// Auth token for the document database, if the deployment requires one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSecret {
    pub auth_token: String,
}

/// Root of `secret.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
    #[serde(default)]
    pub identity: Option<IdentitySecret>,
    #[serde(default)]
    pub database: Option<DatabaseSecret>,
}
