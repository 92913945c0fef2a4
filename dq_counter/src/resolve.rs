//! Event identifier resolution.

use serde_json::json;

use crate::api::{self, GraphqlTransport, queries};
use crate::errors::{DqError, DqResult};
use crate::event::{EventRef, EventTarget};
use crate::models::ResolveEventData;

/// Turn an [`EventRef`] into a numeric [`EventTarget`].
///
/// Numeric references pass through untouched with no metadata and no request.
/// Slug references cost one `GetEventId` call.
///
/// # Errors
///
/// Returns [`DqError::EventNotFound`] when the service has no event for the
/// slug, or any error raised by the transport.
pub async fn resolve_event<G>(transport: &G, event: &EventRef) -> DqResult<EventTarget>
where
    G: GraphqlTransport + ?Sized,
{
    match event {
        EventRef::Id(id) => Ok(EventTarget::from_id(*id)),
        EventRef::Slug(slug) => {
            log::debug!("Resolving event slug {}", slug);

            let data: ResolveEventData =
                api::query(transport, queries::RESOLVE_EVENT, json!({ "slug": slug })).await?;

            let event = data
                .event
                .ok_or_else(|| DqError::EventNotFound { slug: slug.clone() })?;

            log::info!("Resolved {} to event {}", slug, event.id);

            Ok(EventTarget {
                id: event.id,
                name: event.name,
                slug: event.slug,
            })
        }
    }
}
