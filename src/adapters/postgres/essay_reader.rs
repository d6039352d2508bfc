//! PostgreSQL implementation of EssayReader.

use crate::domain::catalog::Essay;
use crate::domain::foundation::{DomainError, EssayId, Timestamp};
use crate::domain::membership::VisibilityFilter;
use crate::ports::EssayReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the EssayReader port.
pub struct PostgresEssayReader {
    pool: PgPool,
}

impl PostgresEssayReader {
    /// Creates a new PostgresEssayReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for essay queries.
#[derive(Debug, sqlx::FromRow)]
struct EssayRow {
    id: Uuid,
    title: String,
    excerpt: String,
    body: String,
    is_active: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
}

impl From<EssayRow> for Essay {
    fn from(row: EssayRow) -> Self {
        Essay {
            id: EssayId::from_uuid(row.id),
            title: row.title,
            excerpt: row.excerpt,
            body: row.body,
            is_active: row.is_active,
            display_order: row.display_order,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl EssayReader for PostgresEssayReader {
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Essay>, DomainError> {
        let query = match filter {
            VisibilityFilter::All => {
                r#"
                SELECT id, title, excerpt, body, is_active, display_order, created_at
                FROM essays
                ORDER BY display_order ASC, created_at DESC
                "#
            }
            VisibilityFilter::VisibleOnly => {
                r#"
                SELECT id, title, excerpt, body, is_active, display_order, created_at
                FROM essays
                WHERE is_active = TRUE
                ORDER BY display_order ASC, created_at DESC
                "#
            }
        };

        let rows = sqlx::query_as::<_, EssayRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Essay list failed: {}", e)))?;

        Ok(rows.into_iter().map(Essay::from).collect())
    }
}
