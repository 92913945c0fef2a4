//! Web server for the start.gg event DQ counter.

use std::net::SocketAddr;

use anyhow::{Context, Error};
use dq_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Serve the start.gg event DQ counter page

USAGE:
  dq_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8501]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8501)
  START_GG_TOKEN           Default API token used when the form field is blank
  START_GG_API_URL         GraphQL endpoint
  START_GG_TIMEOUT_SECS    Per-request timeout in seconds  [default: 30]
  START_GG_PER_PAGE        Entrants per request, 1-500  [default: 500]
  (A .env file in the working directory is loaded first)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind: Option<SocketAddr> = pargs
        .opt_value_from_str("--bind")
        .context("Invalid --bind address")?;

    logging::init();

    let config = ServerConfig::from_env(bind)?;
    let bind = config.bind;

    if config.api.has_default_token() {
        info!("Using START_GG_TOKEN from environment as the default token");
    } else {
        info!("No START_GG_TOKEN set; the page will ask for a token");
    }

    let app = api::create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;

    info!("Server is running at http://{}. Press Ctrl+C to stop.", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
