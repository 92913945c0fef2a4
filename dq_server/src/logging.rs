//! Structured logging configuration.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Levels are configurable via the `RUST_LOG` env var. Records emitted through
/// the `log` facade by `dq_counter` are forwarded to the same subscriber.
///
/// # Example
///
/// ```no_run
/// use dq_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log the outcome of one counting run
pub fn log_run(event_input: &str, outcome: Result<(u64, usize), &str>, duration_ms: u64) {
    match outcome {
        Ok((event_id, dq_count)) => tracing::info!(
            event_input = event_input,
            event_id = event_id,
            dq_count = dq_count,
            duration_ms = duration_ms,
            "DQ count completed"
        ),
        Err(kind) => tracing::warn!(
            event_input = event_input,
            error_kind = kind,
            duration_ms = duration_ms,
            "DQ count failed"
        ),
    }
}
