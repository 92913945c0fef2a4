//! Internal modules for the DQ counter command-line report.
//!
//! This library provides argument parsing, configuration resolution, and
//! report formatting used by the `dq_cli` binary.

pub mod args;
pub mod config;
pub mod report;

/// Exit status for usage and configuration errors
pub const EXIT_USAGE: i32 = 2;
