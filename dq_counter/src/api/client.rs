//! HTTP client for the start.gg GraphQL endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ClientConfig, GraphqlTransport};
use crate::errors::{DqError, DqResult};

/// Authenticated GraphQL client.
///
/// Holds one connection pool for the lifetime of a run; drop it when the run
/// finishes.
pub struct ApiClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

impl ApiClient {
    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`DqError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> DqResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            client,
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for ApiClient {
    async fn execute(&self, query: &str, variables: Value) -> DqResult<Value> {
        let request = GraphqlRequest {
            query,
            variables: &variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            log::debug!("GraphQL request to {} failed with {}", self.endpoint, status);
            return Err(DqError::Http { status, body });
        }

        let bytes = response.bytes().await?;
        let body: GraphqlResponse = serde_json::from_slice(&bytes)?;

        if let Some(errors) = body.errors {
            return Err(DqError::Graphql(errors));
        }

        Ok(body.data.unwrap_or(Value::Null))
    }
}
