//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::net::SocketAddr;
use std::time::Duration;

use dq_counter::api::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS, MAX_PER_PAGE,
    TOKEN_ENV_VAR,
};

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// start.gg API settings shared by every run
    pub api: ApiSettings,
}

/// start.gg API settings
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// GraphQL endpoint
    pub endpoint: String,
    /// Token used when the form leaves the token field blank
    pub default_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Entrants per page
    pub per_page: u32,
}

impl ApiSettings {
    /// Client configuration for one run. A non-blank `form_token` wins over
    /// the configured default.
    pub fn client_config(&self, form_token: &str) -> Option<ClientConfig> {
        let form_token = form_token.trim();
        let token = if form_token.is_empty() {
            self.default_token.clone()?
        } else {
            form_token.to_string()
        };

        Some(
            ClientConfig::new(token)
                .with_endpoint(self.endpoint.clone())
                .with_timeout(self.timeout)
                .with_per_page(self.per_page),
        )
    }

    /// Whether a server-side token is available
    pub fn has_default_token(&self) -> bool {
        self.default_token.is_some()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_URL.to_string(),
            default_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        Self::from_lookup(bind_override, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable lookup
    pub fn from_lookup<F>(bind_override: Option<SocketAddr>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match bind_override {
            Some(bind) => bind,
            None => {
                let raw = env("SERVER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
                raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "SERVER_BIND".to_string(),
                    reason: format!("'{raw}' is not an IP:PORT address"),
                })?
            }
        };

        let api = ApiSettings {
            endpoint: env("START_GG_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            default_token: env(TOKEN_ENV_VAR)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(parse_env_or(
                &env,
                "START_GG_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            per_page: parse_env_or(&env, "START_GG_PER_PAGE", DEFAULT_PER_PAGE),
        };

        let config = ServerConfig { bind, api };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "START_GG_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.api.per_page == 0 || self.api.per_page > MAX_PER_PAGE {
            return Err(ConfigError::Invalid {
                var: "START_GG_PER_PAGE".to_string(),
                reason: format!("Must be between 1 and {}", MAX_PER_PAGE),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<F, T>(env: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    env(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
