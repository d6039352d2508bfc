//! Essay reader port.

use crate::domain::catalog::Essay;
use crate::domain::foundation::DomainError;
use crate::domain::membership::VisibilityFilter;
use async_trait::async_trait;

/// Reader port for essay queries.
#[async_trait]
pub trait EssayReader: Send + Sync {
    /// List essays in display order, restricted by the visibility filter.
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Essay>, DomainError>;
}
