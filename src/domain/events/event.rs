//! Community event.

use crate::domain::foundation::{EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// A community event with an RSVP page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event ID.
    pub id: EventId,

    /// Event title.
    pub title: String,

    /// Description shown on the event page.
    pub description: String,

    /// Venue or address.
    pub location: String,

    /// When the event starts.
    pub starts_at: Timestamp,

    /// When the event was created.
    pub created_at: Timestamp,
}

impl Event {
    /// Returns true if the event has not started yet.
    pub fn is_upcoming(&self) -> bool {
        self.starts_at.is_future()
    }
}
