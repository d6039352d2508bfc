//! HTTP DTOs for event endpoints.

use crate::domain::events::{Event, Rsvp};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to RSVP for an event.
#[derive(Debug, Clone, Deserialize)]
pub struct RsvpRequest {
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// Additional guests beyond the attendee.
    #[serde(default)]
    pub guests: i32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the event listing.
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub success: bool,
    pub data: Vec<EventDto>,
}

/// Event shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Start time (ISO 8601).
    pub starts_at: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            location: event.location,
            starts_at: event.starts_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a created RSVP.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpResponse {
    pub success: bool,
    pub data: RsvpDto,
}

/// RSVP shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpDto {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub guests: i32,
}

impl From<Rsvp> for RsvpDto {
    fn from(rsvp: Rsvp) -> Self {
        Self {
            id: rsvp.id.to_string(),
            event_id: rsvp.event_id.to_string(),
            name: rsvp.name,
            guests: rsvp.guests,
        }
    }
}
