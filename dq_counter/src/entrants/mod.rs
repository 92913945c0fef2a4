//! Entrant pagination and disqualification counting.
//!
//! This module implements:
//! - Sequential page walk over `event.entrants`
//! - Collection of `isDisqualified` entrants into [`DqRow`]s
//! - Participant labels in `prefix | tag` form
//!
//! ## Example
//!
//! ```no_run
//! use dq_counter::api::{ApiClient, ClientConfig};
//! use dq_counter::entrants::fetch_counts;
//! use dq_counter::event::EventTarget;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ClientConfig::new("my-token"))?;
//!     let summary = fetch_counts(&client, EventTarget::from_id(12345), 500).await?;
//!     println!("{} of {} disqualified", summary.dq_count, summary.total_players);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod models;

pub use aggregate::fetch_counts;
pub use models::{DqRow, EventSummary, participant_label, participants_label};
