//! Wire models for start.gg GraphQL responses.
//!
//! Every field the service may omit or send as `null` is modelled explicitly:
//! flags default to `false`, lists to empty, everything else to `None`.

use serde::{Deserialize, Deserializer};

/// `data` payload of the `GetEventId` query
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveEventData {
    pub event: Option<ResolvedEvent>,
}

/// Event returned by slug lookup
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedEvent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// `data` payload of the `EventEntrants` query
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntrantsData {
    pub event: Option<EventEntrantsPage>,
}

/// One page of an event's entrants
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntrantsPage {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entrants: EntrantConnection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrantConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_info: PageInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Entrant>,
}

/// Paging summary. `total` is only trusted from the first page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
}

/// A registered competitor (player or team)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrant {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_disqualified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<u64>,
    pub gamer_tag: Option<String>,
    pub prefix: Option<String>,
}

/// GraphQL `ID` values arrive as numbers or as digit strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid ID: {s:?}"))),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_u64()
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer)?
        .map(RawId::into_u64)
        .transpose()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
