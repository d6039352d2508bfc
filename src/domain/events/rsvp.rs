//! Event RSVP.

use crate::domain::foundation::{EventId, RsvpId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum additional guests per RSVP.
const MAX_GUESTS: i32 = 10;

/// An RSVP for a community event.
///
/// RSVPs are open to anyone - membership is not required to attend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
    /// RSVP ID.
    pub id: RsvpId,

    /// Event being attended.
    pub event_id: EventId,

    /// Attendee name.
    pub name: String,

    /// Attendee email.
    pub email: String,

    /// Additional guests beyond the attendee.
    pub guests: i32,

    /// When the RSVP was created.
    pub created_at: Timestamp,
}

impl Rsvp {
    /// Creates an RSVP, validating attendee details.
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        email: impl Into<String>,
        guests: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        if !(0..=MAX_GUESTS).contains(&guests) {
            return Err(ValidationError::out_of_range("guests", 0, MAX_GUESTS, guests));
        }

        Ok(Self {
            id: RsvpId::new(),
            event_id,
            name,
            email,
            guests,
            created_at: Timestamp::now(),
        })
    }
}
