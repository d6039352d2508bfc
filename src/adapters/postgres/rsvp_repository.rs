//! PostgreSQL implementation of RsvpRepository.

use crate::domain::events::Rsvp;
use crate::domain::foundation::DomainError;
use crate::ports::RsvpRepository;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of the RsvpRepository port.
pub struct PostgresRsvpRepository {
    pool: PgPool,
}

impl PostgresRsvpRepository {
    /// Creates a new PostgresRsvpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepository {
    async fn save(&self, rsvp: &Rsvp) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO rsvps (id, event_id, name, email, guests, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(rsvp.id.as_uuid())
        .bind(rsvp.event_id.as_uuid())
        .bind(&rsvp.name)
        .bind(&rsvp.email)
        .bind(rsvp.guests)
        .bind(rsvp.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("RSVP save failed: {}", e)))?;

        Ok(())
    }
}
