//! PostgreSQL implementation of MembershipReader.

use crate::domain::foundation::{
    DomainError, ErrorCode, MembershipId, PrincipalId, Timestamp,
};
use crate::domain::membership::{Membership, MembershipTier};
use crate::ports::MembershipReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the MembershipReader port.
pub struct PostgresMembershipReader {
    pool: PgPool,
}

impl PostgresMembershipReader {
    /// Creates a new PostgresMembershipReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for membership lookup queries.
#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    user_id: Uuid,
    tier: String,
    created_at: DateTime<Utc>,
}

fn parse_tier(s: &str) -> Result<MembershipTier, DomainError> {
    match s.to_lowercase().as_str() {
        "free" => Ok(MembershipTier::Free),
        "premium" => Ok(MembershipTier::Premium),
        "founder" => Ok(MembershipTier::Founder),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid tier value: {}", s),
        )),
    }
}

fn parse_principal_id_as_uuid(principal_id: &PrincipalId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(principal_id.as_str()).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Principal ID must be a valid UUID: {}", e),
        )
    })
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        let tier = parse_tier(&row.tier)?;
        let principal_id = PrincipalId::new(row.user_id.to_string()).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?;

        Ok(Membership::new(
            MembershipId::from_uuid(row.id),
            principal_id,
            tier,
            Timestamp::from_datetime(row.created_at),
        ))
    }
}

#[async_trait]
impl MembershipReader for PostgresMembershipReader {
    async fn find_by_principal(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Option<Membership>, DomainError> {
        let user_id = parse_principal_id_as_uuid(principal_id)?;

        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, user_id, tier, created_at
            FROM memberships
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Membership lookup failed: {}", e)))?;

        row.map(Membership::try_from).transpose()
    }
}
