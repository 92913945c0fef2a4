//! Event input parsing.
//!
//! Users identify an event either by its numeric ID or by pasting the event
//! page URL, e.g. `https://www.start.gg/tournament/genesis-10/event/melee-singles`.
//! URLs are reduced to the `tournament/<slug>/event/<slug>` path that the
//! GraphQL `event(slug:)` field accepts.

use url::Url;

use crate::errors::{DqError, DqResult, INVALID_INPUT_HINT};

/// A parsed reference to an event, pending resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    /// Numeric event ID, used as-is
    Id(u64),
    /// Path fragment starting at `tournament/`
    Slug(String),
}

/// A resolved event ID with whatever metadata is known so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTarget {
    pub id: u64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl EventTarget {
    /// Target with no pre-fetched metadata
    pub fn from_id(id: u64) -> Self {
        Self {
            id,
            name: None,
            slug: None,
        }
    }
}

/// Parse user input into an [`EventRef`].
///
/// # Errors
///
/// Returns [`DqError::InvalidInput`] when the input is neither all digits nor
/// a URL whose path contains both a tournament and an event segment.
///
/// # Example
///
/// ```
/// use dq_counter::event::{parse_event_input, EventRef};
///
/// assert_eq!(parse_event_input(" 12345 ").unwrap(), EventRef::Id(12345));
/// assert_eq!(
///     parse_event_input("https://www.start.gg/tournament/abc/event/xyz").unwrap(),
///     EventRef::Slug("tournament/abc/event/xyz".to_string())
/// );
/// ```
pub fn parse_event_input(input: &str) -> DqResult<EventRef> {
    let input = input.trim();

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse().map(EventRef::Id).map_err(|_| invalid_input());
    }

    let path = url_path(input);
    let path = path.trim_matches('/');
    let wrapped = format!("/{path}/");

    if wrapped.contains("/event/") && wrapped.contains("tournament/") {
        if let Some(start) = path.find("tournament") {
            return Ok(EventRef::Slug(path[start..].to_string()));
        }
    }

    Err(invalid_input())
}

/// Path component of `input`, sliced from the raw text so that no
/// percent-encoding or dot-segment rewriting happens. Scheme-less input is
/// taken as a bare path.
fn url_path(input: &str) -> &str {
    let rest = match Url::parse(input) {
        Ok(url) => {
            let after_scheme = input.get(url.scheme().len() + 1..).unwrap_or_default();
            match after_scheme.strip_prefix("//") {
                Some(authority) => authority
                    .find(['/', '?', '#'])
                    .map_or("", |end| &authority[end..]),
                None => after_scheme,
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => input,
        Err(_) => "",
    };

    rest.split(['?', '#']).next().unwrap_or_default()
}

fn invalid_input() -> DqError {
    DqError::InvalidInput(INVALID_INPUT_HINT.to_string())
}
