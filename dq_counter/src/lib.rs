//! # DQ Counter
//!
//! Counts disqualified entrants in a single start.gg event.
//!
//! A run is a straight line: parse the user's input, resolve it to a numeric
//! event ID, page through the event's entrants, and hand the resulting
//! [`EventSummary`] to a renderer.
//!
//! ## Core Modules
//!
//! - [`event`]: Input parsing (`12345` or an event URL)
//! - [`api`]: GraphQL client and transport trait
//! - [`resolve`]: Slug to event ID resolution
//! - [`entrants`]: Pagination and DQ aggregation
//! - [`export`]: CSV export
//!
//! ## Example
//!
//! ```no_run
//! use dq_counter::{ClientConfig, count_disqualifications};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("my-token");
//!     let summary =
//!         count_disqualifications(&config, "https://www.start.gg/tournament/abc/event/xyz").await?;
//!     println!("{} DQs", summary.dq_count);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod entrants;
pub mod errors;
pub mod event;
pub mod export;
pub mod models;
pub mod resolve;

pub use api::{ApiClient, ClientConfig, GraphqlTransport};
pub use entrants::{DqRow, EventSummary, fetch_counts};
pub use errors::{DqError, DqResult};
pub use event::{EventRef, EventTarget, parse_event_input};
pub use resolve::resolve_event;

/// Parse, resolve, and count over an existing transport.
///
/// Input errors are reported before any request is made.
pub async fn run_pipeline<G>(transport: &G, input: &str, per_page: u32) -> DqResult<EventSummary>
where
    G: GraphqlTransport + ?Sized,
{
    let event = parse_event_input(input)?;
    let target = resolve_event(transport, &event).await?;
    fetch_counts(transport, target, per_page).await
}

/// Run the whole pipeline with a fresh [`ApiClient`] built from `config`.
///
/// The client lives only for this call.
pub async fn count_disqualifications(config: &ClientConfig, input: &str) -> DqResult<EventSummary> {
    // Reject bad input before building a client
    let event = parse_event_input(input)?;
    let client = ApiClient::new(config)?;
    let target = resolve_event(&client, &event).await?;
    fetch_counts(&client, target, config.per_page).await
}
