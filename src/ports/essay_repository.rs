//! Essay repository port (write side).

use crate::domain::foundation::{DomainError, EssayId};
use async_trait::async_trait;

/// Repository port for essay writes.
///
/// # Design
///
/// The only write this service performs on essays is the admin reorder.
/// Each update targets one row; the bulk operation fans out per-item calls
/// and aggregates outcomes, so this port stays single-row.
#[async_trait]
pub trait EssayRepository: Send + Sync {
    /// Set one essay's position in the curated listing order.
    ///
    /// Returns `ErrorCode::EssayNotFound` if the id matches no row.
    async fn set_display_order(
        &self,
        id: &EssayId,
        display_order: i32,
    ) -> Result<(), DomainError>;
}
