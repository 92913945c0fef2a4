//! Plain-text report.

use dq_counter::EventSummary;

/// The four report lines, newline-terminated
pub fn render_report(summary: &EventSummary) -> String {
    let name = summary.event_name.as_deref().unwrap_or("Unknown event");
    let slug = summary.event_slug.as_deref().unwrap_or("unknown slug");

    format!(
        "Event: {name} ({slug})\n\
         Event ID: {}\n\
         Total players: {}\n\
         Disqualifications: {}\n",
        summary.event_id, summary.total_players, summary.dq_count
    )
}
