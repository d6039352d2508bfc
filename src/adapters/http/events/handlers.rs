//! HTTP handlers for event endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::events::{ListEventsHandler, RsvpEventCommand, RsvpEventHandler};
use crate::domain::foundation::EventId;
use crate::ports::{EventReader, RsvpRepository};

use super::dto::{EventDto, EventsResponse, RsvpRequest, RsvpResponse};

/// Shared application state containing event dependencies.
#[derive(Clone)]
pub struct EventsAppState {
    pub event_reader: Arc<dyn EventReader>,
    pub rsvp_repository: Arc<dyn RsvpRepository>,
}

impl EventsAppState {
    pub fn list_events_handler(&self) -> ListEventsHandler {
        ListEventsHandler::new(self.event_reader.clone())
    }

    pub fn rsvp_handler(&self) -> RsvpEventHandler {
        RsvpEventHandler::new(self.event_reader.clone(), self.rsvp_repository.clone())
    }
}

/// GET /api/events - List upcoming events
pub async fn list_events(
    State(state): State<EventsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_events_handler();
    let events = handler.handle().await?;

    let response = EventsResponse {
        success: true,
        data: events.into_iter().map(EventDto::from).collect(),
    };

    Ok(Json(response))
}

/// POST /api/events/{id}/rsvp - RSVP for an event
pub async fn rsvp_event(
    State(state): State<EventsAppState>,
    Path(id): Path<EventId>,
    Json(request): Json<RsvpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.rsvp_handler();
    let rsvp = handler
        .handle(RsvpEventCommand {
            event_id: id,
            name: request.name,
            email: request.email,
            guests: request.guests,
        })
        .await?;

    let response = RsvpResponse {
        success: true,
        data: rsvp.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
