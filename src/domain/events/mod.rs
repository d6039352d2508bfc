//! Events domain module.
//!
//! Community events (tastings, dinners) and their RSVPs.

mod event;
mod rsvp;

pub use event::Event;
pub use rsvp::Rsvp;
