//! Event reader port.

use crate::domain::events::Event;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Reader port for community event queries.
#[async_trait]
pub trait EventReader: Send + Sync {
    /// List upcoming events ordered by start time.
    async fn list_upcoming(&self) -> Result<Vec<Event>, DomainError>;

    /// Find one event by id.
    ///
    /// Returns `None` if no event has this id.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn EventReader) {}
    }
}
