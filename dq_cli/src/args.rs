//! Command-line argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use pico_args::Arguments;

pub const HELP: &str = "\
Count disqualified entrants in a start.gg event

USAGE:
  dq_cli [OPTIONS] <EVENT>

ARGS:
  <EVENT>               Numeric event ID or event URL
                        (https://www.start.gg/tournament/<slug>/event/<slug>)

OPTIONS:
  --token TOKEN         API token  [default: env START_GG_TOKEN]
  --per-page N          Entrants per request, 1-500  [default: env START_GG_PER_PAGE or 500]
  --csv FILE            Also write disqualified entrants to FILE as CSV

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  START_GG_TOKEN        Bearer token from start.gg developer settings
  START_GG_API_URL      GraphQL endpoint  [default: https://api.start.gg/gql/alpha]
  START_GG_TIMEOUT_SECS Per-request timeout  [default: 30]
  (A .env file in the working directory is loaded first)
";

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Args),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub event: String,
    pub token: Option<String>,
    pub per_page: Option<u32>,
    pub csv: Option<PathBuf>,
}

/// Invalid command line
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("expected exactly one EVENT argument, got {0}")]
    PositionalCount(usize),

    #[error("{0}")]
    BadOption(#[from] pico_args::Error),

    #[error("EVENT must be valid UTF-8")]
    NonUtf8,
}

/// Parse the process arguments (without the program name)
pub fn parse_args(raw: Vec<OsString>) -> Result<Command, UsageError> {
    let mut pargs = Arguments::from_vec(raw);

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let token = pargs.opt_value_from_str("--token")?;
    let per_page = pargs.opt_value_from_str("--per-page")?;
    let csv = pargs.opt_value_from_str("--csv")?;

    let positional = pargs.finish();
    if positional.len() != 1 {
        return Err(UsageError::PositionalCount(positional.len()));
    }

    let event = positional
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok())
        .ok_or(UsageError::NonUtf8)?;

    Ok(Command::Run(Args {
        event,
        token,
        per_page,
        csv,
    }))
}
