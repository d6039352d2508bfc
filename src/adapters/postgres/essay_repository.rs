//! PostgreSQL implementation of EssayRepository.

use crate::domain::foundation::{DomainError, ErrorCode, EssayId};
use crate::ports::EssayRepository;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of the EssayRepository port.
pub struct PostgresEssayRepository {
    pool: PgPool,
}

impl PostgresEssayRepository {
    /// Creates a new PostgresEssayRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EssayRepository for PostgresEssayRepository {
    async fn set_display_order(
        &self,
        id: &EssayId,
        display_order: i32,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE essays
            SET display_order = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(display_order)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Essay reorder failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EssayNotFound,
                format!("Essay {} not found", id),
            ));
        }

        Ok(())
    }
}
