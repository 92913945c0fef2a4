//! Paginated entrant fetch and DQ count.

use serde_json::json;

use super::models::{DqRow, EventSummary};
use crate::api::{self, GraphqlTransport, queries};
use crate::errors::{DqError, DqResult};
use crate::event::EventTarget;
use crate::models::EventEntrantsData;

/// Walk every entrant page of `target` and count disqualified entrants.
///
/// Pages are requested one at a time starting at 1. `totalPages` is re-read
/// from every response, so the loop bound follows the service if it changes
/// mid-run. The player total comes from page 1 only. Name and slug already on
/// `target` are kept; missing ones are filled from the first page that has
/// them.
///
/// # Errors
///
/// Any failed page aborts the run and discards the rows collected so far.
/// A `null` event yields [`DqError::EventUnavailable`].
pub async fn fetch_counts<G>(
    transport: &G,
    target: EventTarget,
    per_page: u32,
) -> DqResult<EventSummary>
where
    G: GraphqlTransport + ?Sized,
{
    let EventTarget { id, name, slug } = target;

    let mut summary = EventSummary {
        event_id: id,
        event_name: name,
        event_slug: slug,
        ..EventSummary::default()
    };

    let mut page: u32 = 1;
    let mut total_pages: u32 = 1;

    while page <= total_pages {
        let data: EventEntrantsData = api::query(
            transport,
            queries::EVENT_ENTRANTS,
            json!({ "eventId": id, "page": page, "perPage": per_page }),
        )
        .await?;

        let event = data.event.ok_or(DqError::EventUnavailable(id))?;

        if summary.event_name.is_none() {
            summary.event_name = event.name;
            summary.event_slug = event.slug;
        }

        let entrants = event.entrants;
        if page == 1 {
            summary.total_players = entrants.page_info.total.unwrap_or(0);
        }
        total_pages = entrants
            .page_info
            .total_pages
            .filter(|&pages| pages > 0)
            .unwrap_or(1);

        let before = summary.dq_rows.len();
        summary.dq_rows.extend(
            entrants
                .nodes
                .iter()
                .filter(|entrant| entrant.is_disqualified)
                .map(DqRow::from_entrant),
        );

        log::debug!(
            "Event {}: page {}/{} had {} DQ(s)",
            id,
            page,
            total_pages,
            summary.dq_rows.len() - before
        );

        page += 1;
    }

    summary.dq_count = summary.dq_rows.len();

    log::info!(
        "Event {}: {} disqualification(s) among {} player(s)",
        id,
        summary.dq_count,
        summary.total_players
    );

    Ok(summary)
}
