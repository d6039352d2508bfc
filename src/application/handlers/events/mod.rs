//! Event handlers.

mod list_events;
mod rsvp_event;

pub use list_events::ListEventsHandler;
pub use rsvp_event::{RsvpEventCommand, RsvpEventHandler};
