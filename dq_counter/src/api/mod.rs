//! start.gg GraphQL API boundary.
//!
//! [`ApiClient`] is the only type that talks to the network. Everything above
//! it (resolver, aggregation) is written against [`GraphqlTransport`] so it can
//! be driven by canned responses in tests.
//!
//! ## Example
//!
//! ```no_run
//! use dq_counter::api::{ApiClient, ClientConfig, GraphqlTransport, queries};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ClientConfig::new("my-token"))?;
//!     let data = client
//!         .execute(queries::RESOLVE_EVENT, json!({"slug": "tournament/abc/event/xyz"}))
//!         .await?;
//!     println!("{data}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod queries;

pub use client::ApiClient;
pub use config::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS, MAX_PER_PAGE,
    TOKEN_ENV_VAR,
};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::DqResult;

/// Sends a GraphQL document and returns the `data` payload
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Execute `query` with `variables`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, and service-reported error
    /// lists are all returned as [`crate::DqError`] variants.
    async fn execute(&self, query: &str, variables: Value) -> DqResult<Value>;
}

/// Execute a query and decode its `data` payload into `T`
pub async fn query<T, G>(transport: &G, document: &str, variables: Value) -> DqResult<T>
where
    T: DeserializeOwned,
    G: GraphqlTransport + ?Sized,
{
    let data = transport.execute(document, variables).await?;
    Ok(serde_json::from_value(data)?)
}
