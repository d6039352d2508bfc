//! ListEventsHandler - Query handler for upcoming events.

use std::sync::Arc;

use crate::domain::events::Event;
use crate::domain::foundation::DomainError;
use crate::ports::EventReader;

/// Handler for listing upcoming events in start-time order.
///
/// Event pages are public; no membership gate applies.
pub struct ListEventsHandler {
    events: Arc<dyn EventReader>,
}

impl ListEventsHandler {
    pub fn new(events: Arc<dyn EventReader>) -> Self {
        Self { events }
    }

    pub async fn handle(&self) -> Result<Vec<Event>, DomainError> {
        self.events.list_upcoming().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, Timestamp};
    use async_trait::async_trait;

    struct MockEventReader {
        events: Vec<Event>,
    }

    #[async_trait]
    impl EventReader for MockEventReader {
        async fn list_upcoming(&self) -> Result<Vec<Event>, DomainError> {
            let mut events: Vec<Event> = self
                .events
                .iter()
                .filter(|e| e.is_upcoming())
                .cloned()
                .collect();
            events.sort_by_key(|e| e.starts_at);
            Ok(events)
        }

        async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
            Ok(self.events.iter().find(|e| &e.id == id).cloned())
        }
    }

    fn event(title: &str, starts_in_days: i64) -> Event {
        Event {
            id: EventId::new(),
            title: title.to_string(),
            description: String::new(),
            location: String::new(),
            starts_at: Timestamp::now().add_days(starts_in_days),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn past_events_are_excluded_and_order_is_chronological() {
        let handler = ListEventsHandler::new(Arc::new(MockEventReader {
            events: vec![event("later", 30), event("past", -1), event("soon", 7)],
        }));

        let events = handler.handle().await.unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["soon", "later"]);
    }
}
