//! Web front end for the DQ counter.
//!
//! Serves a single page where an event URL or ID (and optionally an API
//! token) is submitted; the page shows player and disqualification counts,
//! the disqualified entrants, and a CSV download.

pub mod api;
pub mod config;
pub mod logging;
