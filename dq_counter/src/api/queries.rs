//! GraphQL documents sent to the start.gg API.

/// Page through an event's entrants.
///
/// Variables: `eventId: ID!`, `page: Int!`, `perPage: Int!`.
pub const EVENT_ENTRANTS: &str = r#"
query EventEntrants($eventId: ID!, $page: Int!, $perPage: Int!) {
  event(id: $eventId) {
    id
    name
    slug
    entrants(query: {page: $page, perPage: $perPage}) {
      pageInfo { total totalPages }
      nodes { id name isDisqualified participants { id gamerTag prefix } }
    }
  }
}
"#;

/// Resolve a `tournament/<slug>/event/<slug>` path to the event's ID.
///
/// Variables: `slug: String!`.
pub const RESOLVE_EVENT: &str = r#"
query GetEventId($slug: String!) { event(slug: $slug) { id name slug } }
"#;
