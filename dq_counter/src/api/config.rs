//! Client configuration.

use std::time::Duration;

/// Public start.gg GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.start.gg/gql/alpha";

/// Environment variable holding the bearer token
pub const TOKEN_ENV_VAR: &str = "START_GG_TOKEN";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Entrants requested per page. start.gg caps `perPage` at 500 for this query.
pub const DEFAULT_PER_PAGE: u32 = 500;

/// Upper bound accepted for `perPage`
pub const MAX_PER_PAGE: u32 = 500;

/// Everything the API client needs, passed in explicitly at construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Bearer token
    pub token: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Entrants per page
    pub per_page: u32,
}

impl ClientConfig {
    /// Configuration for the public endpoint with default timeout and page size
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_API_URL.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Point the client at a different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}
