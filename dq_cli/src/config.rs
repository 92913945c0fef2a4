//! Client configuration for a CLI run.
//!
//! Consolidates the environment reads for one invocation; the library never
//! looks at the environment itself.

use std::time::Duration;

use dq_counter::api::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS, MAX_PER_PAGE,
    TOKEN_ENV_VAR,
};

use crate::args::Args;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing API token: pass --token or set START_GG_TOKEN (a .env file works too)")]
    MissingToken,

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Build the client configuration from arguments, falling back to `env`
///
/// `env` is usually `|key| std::env::var(key).ok()`.
pub fn client_config<F>(args: &Args, env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let token = args
        .token
        .clone()
        .or_else(|| env(TOKEN_ENV_VAR))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(ConfigError::MissingToken)?;

    let endpoint = env("START_GG_API_URL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let timeout_secs = parse_env_or(&env, "START_GG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            var: "START_GG_TIMEOUT_SECS".to_string(),
            reason: "Must be greater than 0".to_string(),
        });
    }

    let per_page = args
        .per_page
        .unwrap_or_else(|| parse_env_or(&env, "START_GG_PER_PAGE", DEFAULT_PER_PAGE));
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ConfigError::Invalid {
            var: "per-page".to_string(),
            reason: format!("Must be between 1 and {MAX_PER_PAGE}"),
        });
    }

    Ok(ClientConfig::new(token)
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_per_page(per_page))
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
