//! PostgreSQL implementation of ProductReader.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::domain::membership::VisibilityFilter;
use crate::ports::ProductReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ProductReader port.
pub struct PostgresProductReader {
    pool: PgPool,
}

impl PostgresProductReader {
    /// Creates a new PostgresProductReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price_cents: i64,
    stripe_price_id: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
            stripe_price_id: row.stripe_price_id,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl ProductReader for PostgresProductReader {
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Product>, DomainError> {
        let query = match filter {
            VisibilityFilter::All => {
                r#"
                SELECT id, name, description, price_cents, stripe_price_id,
                       is_active, created_at
                FROM products
                ORDER BY created_at DESC
                "#
            }
            VisibilityFilter::VisibleOnly => {
                r#"
                SELECT id, name, description, price_cents, stripe_price_id,
                       is_active, created_at
                FROM products
                WHERE is_active = TRUE
                ORDER BY created_at DESC
                "#
            }
        };

        let rows = sqlx::query_as::<_, ProductRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Product list failed: {}", e)))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price_cents, stripe_price_id,
                   is_active, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Product lookup failed: {}", e)))?;

        Ok(row.map(Product::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_row_converts_to_domain_type() {
        let row = ProductRow {
            id: Uuid::new_v4(),
            name: "Corkscrew".to_string(),
            description: String::new(),
            price_cents: 2500,
            stripe_price_id: Some("price_123".to_string()),
            is_active: true,
            created_at: Utc::now(),
        };
        let product = Product::from(row);
        assert!(product.is_purchasable());
    }
}
