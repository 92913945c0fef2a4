//! Page handlers.
//!
//! `GET /` renders the empty form; `POST /count` runs the full pipeline for
//! the submitted event and renders the result (or the error) under the form.

use std::time::Instant;

use axum::{Form, extract::State, http::StatusCode, response::Html};
use dq_counter::DqError;
use dq_counter::export::rows_to_csv;
use serde::Deserialize;

use super::AppState;
use super::html::{Outcome, PageView, render_page};
use crate::logging::log_run;

/// Message shown when neither the form nor the server supplies a token
pub const MISSING_TOKEN_MESSAGE: &str = "Provide an API token.";

#[derive(Debug, Deserialize)]
pub struct CountForm {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub token: String,
}

/// Render the empty form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&PageView {
        event_input: "",
        has_default_token: state.config.api.has_default_token(),
        outcome: None,
    }))
}

/// Count disqualifications for the submitted event.
///
/// # Response
///
/// - `200 OK`: results page
/// - `400 Bad Request`: missing token or unparseable event input
/// - `404 Not Found`: no event matches the slug or ID
/// - `502 Bad Gateway`: the start.gg API call failed
pub async fn count(
    State(state): State<AppState>,
    Form(form): Form<CountForm>,
) -> (StatusCode, Html<String>) {
    let has_default_token = state.config.api.has_default_token();

    let (status, outcome) = match state.config.api.client_config(&form.token) {
        None => (
            StatusCode::BAD_REQUEST,
            Outcome::Error(MISSING_TOKEN_MESSAGE.to_string()),
        ),
        Some(client_config) => {
            let started = Instant::now();
            let result = dq_counter::count_disqualifications(&client_config, &form.event).await;
            let elapsed = started.elapsed().as_millis() as u64;

            match result {
                Ok(summary) => {
                    log_run(&form.event, Ok((summary.event_id, summary.dq_count)), elapsed);
                    match rows_to_csv(&summary.dq_rows) {
                        Ok(csv) => (StatusCode::OK, Outcome::Summary { summary, csv }),
                        Err(e) => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Outcome::Error(error_message(&e)),
                        ),
                    }
                }
                Err(e) => {
                    log_run(&form.event, Err(e.kind()), elapsed);
                    let status = match e {
                        DqError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                        DqError::EventNotFound { .. } | DqError::EventUnavailable(_) => {
                            StatusCode::NOT_FOUND
                        }
                        _ => StatusCode::BAD_GATEWAY,
                    };
                    (status, Outcome::Error(error_message(&e)))
                }
            }
        }
    };

    let page = render_page(&PageView {
        event_input: &form.event,
        has_default_token,
        outcome: Some(outcome),
    });

    (status, Html(page))
}

/// User-facing error text
pub fn error_message(error: &DqError) -> String {
    match error {
        DqError::InvalidInput(hint) => hint.clone(),
        DqError::Http { .. } => error.to_string(),
        _ => format!("{}: {}", error.kind(), error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_variants() {
        let input = DqError::InvalidInput("Enter a numeric Event ID or a valid Event URL.".into());
        assert_eq!(
            error_message(&input),
            "Enter a numeric Event ID or a valid Event URL."
        );

        let http = DqError::Http {
            status: StatusCode::UNAUTHORIZED,
            body: "bad".into(),
        };
        assert!(error_message(&http).starts_with("HTTP error: 401"));

        let gql = DqError::Graphql(vec![json!({"message": "nope"})]);
        assert!(error_message(&gql).starts_with("GraphQLError: ["));

        let missing = DqError::EventNotFound {
            slug: "tournament/a/event/b".into(),
        };
        assert_eq!(
            error_message(&missing),
            "NotFound: Event not found for slug 'tournament/a/event/b'"
        );
    }
}
