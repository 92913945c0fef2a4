//! Integration tests for the GraphQL client against an in-process stub server.

use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use dq_counter::{ApiClient, ClientConfig, DqError, GraphqlTransport, count_disqualifications};
use serde_json::{Value, json};

/// Serve `router` on an ephemeral port and return the GraphQL endpoint URL
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/gql")
}

fn client_for(endpoint: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new("test-token").with_endpoint(endpoint)).unwrap()
}

// ============================================================================
// Request / Response Tests
// ============================================================================

#[tokio::test]
async fn test_sends_bearer_token_and_body() {
    let router = Router::new().route(
        "/gql",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({"data": {"auth": auth, "received": body}}))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let data = client_for(&endpoint)
        .execute("query { ping }", json!({"page": 1}))
        .await
        .unwrap();

    assert_eq!(data["auth"], "Bearer test-token");
    assert_eq!(data["received"]["query"], "query { ping }");
    assert_eq!(data["received"]["variables"], json!({"page": 1}));
}

#[tokio::test]
async fn test_missing_data_is_null() {
    let router = Router::new().route("/gql", post(|| async { Json(json!({})) }));
    let endpoint = spawn_stub(router).await;

    let data = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap();

    assert!(data.is_null());
}

#[tokio::test]
async fn test_null_errors_key_is_success() {
    let router = Router::new().route(
        "/gql",
        post(|| async { Json(json!({"data": {"event": null}, "errors": null})) }),
    );
    let endpoint = spawn_stub(router).await;

    let data = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap();

    assert_eq!(data, json!({"event": null}));
}

#[tokio::test]
async fn test_empty_errors_list_is_failure() {
    let router = Router::new().route(
        "/gql",
        post(|| async { Json(json!({"data": {"event": null}, "errors": []})) }),
    );
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, DqError::Graphql(errors) if errors.is_empty()));
}

// ============================================================================
// Error Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_error_list_becomes_graphql_error() {
    let router = Router::new().route(
        "/gql",
        post(|| async {
            Json(json!({
                "data": null,
                "errors": [{"message": "Invalid authentication token", "locations": []}]
            }))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    match &err {
        DqError::Graphql(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0]["message"], "Invalid authentication token");
        }
        other => panic!("expected Graphql error, got {other:?}"),
    }
    assert!(err.to_string().contains("Invalid authentication token"));
}

#[tokio::test]
async fn test_non_success_status_becomes_http_error() {
    let router = Router::new().route(
        "/gql",
        post(|| async { (StatusCode::UNAUTHORIZED, "Invalid token") }),
    );
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    match err {
        DqError::Http { status, body } => {
            assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
            assert_eq!(body, "Invalid token");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let router = Router::new().route("/gql", post(|| async { "<html>maintenance</html>" }));
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint)
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, DqError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/gql"))
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, DqError::Transport(_)));
}

#[tokio::test]
async fn test_timeout_is_enforced() {
    let router = Router::new().route(
        "/gql",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"data": {}}))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let config = ClientConfig::new("test-token")
        .with_endpoint(&endpoint)
        .with_timeout(Duration::from_millis(200));
    let client = ApiClient::new(&config).unwrap();

    let err = client
        .execute("query { ping }", json!({}))
        .await
        .unwrap_err();

    match err {
        DqError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected Transport timeout, got {other:?}"),
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[tokio::test]
async fn test_count_disqualifications_over_http() {
    let router = Router::new().route(
        "/gql",
        post(|Json(body): Json<Value>| async move {
            let vars = &body["variables"];
            if vars.get("slug").is_some() {
                return Json(json!({
                    "data": {"event": {"id": "999", "name": "Xyz Event", "slug": vars["slug"]}}
                }));
            }
            let page = vars["page"].as_u64().unwrap_or(0);
            let nodes = if page == 1 {
                json!([{"id": 10, "name": "Gone", "isDisqualified": true,
                        "participants": [{"id": 1, "gamerTag": "Foo", "prefix": "TSM"}]}])
            } else {
                json!([{"id": 11, "name": "Here", "isDisqualified": false}])
            };
            Json(json!({
                "data": {"event": {
                    "id": vars["eventId"],
                    "name": "Xyz Event",
                    "slug": "tournament/abc/event/xyz",
                    "entrants": {"pageInfo": {"total": 2, "totalPages": 2}, "nodes": nodes}
                }}
            }))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let config = ClientConfig::new("test-token")
        .with_endpoint(&endpoint)
        .with_per_page(1);
    let summary =
        count_disqualifications(&config, "https://www.start.gg/tournament/abc/event/xyz")
            .await
            .unwrap();

    assert_eq!(summary.event_id, 999);
    assert_eq!(summary.total_players, 2);
    assert_eq!(summary.dq_count, 1);
    assert_eq!(summary.dq_rows[0].participants, "TSM | Foo");
    assert_eq!(summary.dq_rows[0].entrant_id, Some(10));
}
