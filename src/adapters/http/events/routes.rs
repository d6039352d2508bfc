//! Axum router configuration for event endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_events, rsvp_event, EventsAppState};

/// Create the events API router.
///
/// # Routes
///
/// - `GET /` - List upcoming events
/// - `POST /{id}/rsvp` - RSVP for an event
pub fn events_routes() -> Router<EventsAppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/:id/rsvp", post(rsvp_event))
}
