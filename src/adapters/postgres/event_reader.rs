//! PostgreSQL implementation of EventReader.

use crate::domain::events::Event;
use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::ports::EventReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the EventReader port.
pub struct PostgresEventReader {
    pool: PgPool,
}

impl PostgresEventReader {
    /// Creates a new PostgresEventReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for event queries.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    starts_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: EventId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            location: row.location,
            starts_at: Timestamp::from_datetime(row.starts_at),
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl EventReader for PostgresEventReader {
    async fn list_upcoming(&self) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, location, starts_at, created_at
            FROM events
            WHERE starts_at > NOW()
            ORDER BY starts_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Event list failed: {}", e)))?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, location, starts_at, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Event lookup failed: {}", e)))?;

        Ok(row.map(Event::from))
    }
}
