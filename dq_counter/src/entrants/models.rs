//! Aggregated disqualification results.

use serde::{Deserialize, Serialize};

use crate::models::{Entrant, Participant};

/// One disqualified entrant, as shown in the table and the CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqRow {
    #[serde(rename = "Entrant Name")]
    pub entrant_name: Option<String>,
    #[serde(rename = "Participants")]
    pub participants: String,
    #[serde(rename = "Entrant ID")]
    pub entrant_id: Option<u64>,
}

impl DqRow {
    /// Summary row for an entrant
    pub fn from_entrant(entrant: &Entrant) -> Self {
        Self {
            entrant_name: entrant.name.clone(),
            participants: participants_label(&entrant.participants),
            entrant_id: entrant.id,
        }
    }
}

/// Result of counting one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub event_id: u64,
    pub event_name: Option<String>,
    pub event_slug: Option<String>,
    /// `pageInfo.total` from the first page
    pub total_players: u64,
    pub dq_count: usize,
    pub dq_rows: Vec<DqRow>,
}

/// `"prefix | tag"` when the participant has a sponsor prefix, otherwise the tag alone
pub fn participant_label(participant: &Participant) -> String {
    let tag = participant.gamer_tag.as_deref().unwrap_or_default();

    match participant.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => format!("{prefix} | {tag}").trim().to_string(),
        _ => tag.trim().to_string(),
    }
}

/// Non-empty participant labels joined with `", "`
pub fn participants_label(participants: &[Participant]) -> String {
    participants
        .iter()
        .map(participant_label)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(tag: Option<&str>, prefix: Option<&str>) -> Participant {
        Participant {
            id: None,
            gamer_tag: tag.map(str::to_string),
            prefix: prefix.map(str::to_string),
        }
    }

    #[test]
    fn test_label_without_prefix() {
        assert_eq!(participant_label(&participant(Some("Foo"), None)), "Foo");
        assert_eq!(participant_label(&participant(Some("Foo"), Some(""))), "Foo");
    }

    #[test]
    fn test_label_with_prefix() {
        assert_eq!(
            participant_label(&participant(Some("Foo"), Some("TSM"))),
            "TSM | Foo"
        );
    }

    #[test]
    fn test_label_with_missing_tag() {
        assert_eq!(participant_label(&participant(None, None)), "");
        assert_eq!(participant_label(&participant(None, Some("TSM"))), "TSM |");
    }

    #[test]
    fn test_team_label_skips_empty_members() {
        let members = vec![
            participant(Some("Foo"), Some("A")),
            participant(None, None),
            participant(Some("Bar"), None),
        ];
        assert_eq!(participants_label(&members), "A | Foo, Bar");
    }

    #[test]
    fn test_row_serializes_with_display_columns() {
        let row = DqRow {
            entrant_name: Some("X".to_string()),
            participants: "Foo".to_string(),
            entrant_id: Some(2),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"Entrant Name": "X", "Participants": "Foo", "Entrant ID": 2})
        );
    }
}
