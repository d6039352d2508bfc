//! RsvpEventHandler - Command handler for event RSVPs.

use std::sync::Arc;

use crate::domain::events::Rsvp;
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::{EventReader, RsvpRepository};

/// Command to RSVP for an event.
#[derive(Debug, Clone)]
pub struct RsvpEventCommand {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub guests: i32,
}

/// Handler for creating an RSVP.
///
/// Existence is checked before the write so unknown events are "not
/// found" rather than dangling RSVPs.
pub struct RsvpEventHandler {
    events: Arc<dyn EventReader>,
    rsvps: Arc<dyn RsvpRepository>,
}

impl RsvpEventHandler {
    pub fn new(events: Arc<dyn EventReader>, rsvps: Arc<dyn RsvpRepository>) -> Self {
        Self { events, rsvps }
    }

    pub async fn handle(&self, cmd: RsvpEventCommand) -> Result<Rsvp, DomainError> {
        self.events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        let rsvp = Rsvp::new(cmd.event_id, cmd.name, cmd.email, cmd.guests)?;
        self.rsvps.save(&rsvp).await?;

        Ok(rsvp)
    }
}
