//! Error types for the event DQ counter.

use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when the event input matches neither accepted format.
pub const INVALID_INPUT_HINT: &str = "Enter a numeric Event ID or a valid Event URL.";

/// Errors raised while parsing, resolving, or counting an event
#[derive(Debug, Error)]
pub enum DqError {
    /// The user input is neither an event ID nor an event URL
    #[error("{0}")]
    InvalidInput(String),

    /// The slug did not resolve to an event
    #[error("Event not found for slug '{slug}'")]
    EventNotFound { slug: String },

    /// The service returned no event for a numeric ID
    #[error("Event {0} is not available")]
    EventUnavailable(u64),

    /// Non-success HTTP status from the service
    #[error("HTTP error: {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Connection, timeout, or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a GraphQL `errors` list
    #[error("{}", render_graphql_errors(.0))]
    Graphql(Vec<serde_json::Value>),

    /// The response did not match the expected shape
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// CSV export failed
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    /// Writing an export to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DqError {
    /// Short label for the error kind, used as a prefix when presenting errors
    pub fn kind(&self) -> &'static str {
        match self {
            DqError::InvalidInput(_) => "InvalidInput",
            DqError::EventNotFound { .. } | DqError::EventUnavailable(_) => "NotFound",
            DqError::Http { .. } => "HTTPError",
            DqError::Transport(_) => "TransportError",
            DqError::Graphql(_) => "GraphQLError",
            DqError::Decode(_) => "DecodeError",
            DqError::Export(_) | DqError::Io(_) => "ExportError",
        }
    }

    /// Whether the error happened before any request was sent
    pub fn is_input_error(&self) -> bool {
        matches!(self, DqError::InvalidInput(_))
    }
}

fn render_graphql_errors(errors: &[serde_json::Value]) -> String {
    serde_json::to_string_pretty(errors).unwrap_or_else(|_| format!("{errors:?}"))
}

/// Result type for DQ counter operations
pub type DqResult<T> = Result<T, DqError>;
