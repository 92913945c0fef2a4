//! Integration tests for the dq_cli binary.
//!
//! The binary is run in a scratch directory with a cleared token so that no
//! `.env` file or ambient credential leaks into the test.

use std::process::Output;

use axum::{Json, Router, routing::post};
use serde_json::{Value, json};
use tokio::process::Command;

fn scratch_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("dq_cli_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn dq_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dq_cli"));
    cmd.current_dir(scratch_dir())
        .env_remove("START_GG_TOKEN")
        .env_remove("START_GG_PER_PAGE")
        .env_remove("START_GG_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        // Nothing listens here; any accidental request fails fast
        .env("START_GG_API_URL", "http://127.0.0.1:9/gql");
    cmd
}

async fn run(cmd: &mut Command) -> Output {
    cmd.output().await.expect("failed to run dq_cli")
}

/// Serve a stub GraphQL endpoint and return its URL
async fn spawn_stub() -> String {
    let router = Router::new().route(
        "/gql",
        post(|Json(body): Json<Value>| async move {
            let vars = &body["variables"];
            Json(json!({
                "data": {"event": {
                    "id": vars["eventId"],
                    "name": "Melee Singles",
                    "slug": "tournament/abc/event/melee-singles",
                    "entrants": {
                        "pageInfo": {"total": 3, "totalPages": 1},
                        "nodes": [
                            {"id": 1, "isDisqualified": false},
                            {"id": 2, "isDisqualified": true, "name": "X",
                             "participants": [{"gamerTag": "Foo", "prefix": null}]},
                            {"id": 3, "isDisqualified": false}
                        ]
                    }
                }}
            }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/gql")
}

// ============================================================================
// Usage Errors
// ============================================================================

#[tokio::test]
async fn test_no_arguments_exits_2() {
    let output = run(dq_cli().env("START_GG_TOKEN", "t")).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USAGE"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_two_arguments_exits_2() {
    let output = run(dq_cli().env("START_GG_TOKEN", "t").args(["1", "2"])).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exactly one EVENT"));
}

#[tokio::test]
async fn test_missing_token_exits_2() {
    let output = run(dq_cli().arg("12345")).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("START_GG_TOKEN"));
}

#[tokio::test]
async fn test_help_exits_0() {
    let output = run(dq_cli().arg("--help")).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE"));
}

// ============================================================================
// Runs
// ============================================================================

#[tokio::test]
async fn test_invalid_event_input_fails() {
    let output = run(dq_cli().env("START_GG_TOKEN", "t").arg("not-an-event")).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Enter a numeric Event ID or a valid Event URL.")
    );
}

#[tokio::test]
async fn test_report_and_csv() {
    let endpoint = spawn_stub().await;
    let csv_path = scratch_dir().join("dq_entrants.csv");

    let output = run(dq_cli()
        .env("START_GG_TOKEN", "t")
        .env("START_GG_API_URL", &endpoint)
        .arg("12345")
        .arg("--csv")
        .arg(&csv_path))
    .await;

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Event: Melee Singles (tournament/abc/event/melee-singles)\n\
         Event ID: 12345\n\
         Total players: 3\n\
         Disqualifications: 1\n"
    );

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "Entrant Name,Participants,Entrant ID\nX,Foo,2\n");
}
