//! PostgreSQL implementation of PackageReader.

use crate::domain::catalog::Package;
use crate::domain::foundation::{DomainError, ErrorCode, PackageId, Slug, Timestamp};
use crate::domain::membership::VisibilityFilter;
use crate::ports::PackageReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PackageReader port.
pub struct PostgresPackageReader {
    pool: PgPool,
}

impl PostgresPackageReader {
    /// Creates a new PostgresPackageReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for package queries.
#[derive(Debug, sqlx::FromRow)]
struct PackageRow {
    id: Uuid,
    slug: String,
    name: String,
    description: String,
    price_cents: i64,
    bottle_count: i32,
    published: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for Package {
    type Error = DomainError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        let slug = Slug::new(row.slug).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid slug: {}", e))
        })?;

        Ok(Package {
            id: PackageId::from_uuid(row.id),
            slug,
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
            bottle_count: row.bottle_count,
            published: row.published,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl PackageReader for PostgresPackageReader {
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Package>, DomainError> {
        // The filter is expressed in the WHERE clause so hidden rows never
        // leave the database for non-members.
        let query = match filter {
            VisibilityFilter::All => {
                r#"
                SELECT id, slug, name, description, price_cents, bottle_count,
                       published, created_at
                FROM packages
                ORDER BY created_at DESC
                "#
            }
            VisibilityFilter::VisibleOnly => {
                r#"
                SELECT id, slug, name, description, price_cents, bottle_count,
                       published, created_at
                FROM packages
                WHERE published = TRUE
                ORDER BY created_at DESC
                "#
            }
        };

        let rows = sqlx::query_as::<_, PackageRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Package list failed: {}", e)))?;

        rows.into_iter().map(Package::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Package>, DomainError> {
        let row = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, slug, name, description, price_cents, bottle_count,
                   published, created_at
            FROM packages
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Package lookup failed: {}", e)))?;

        row.map(Package::try_from).transpose()
    }
}
