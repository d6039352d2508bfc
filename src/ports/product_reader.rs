//! Product reader port.

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::membership::VisibilityFilter;
use async_trait::async_trait;

/// Reader port for storefront product queries.
#[async_trait]
pub trait ProductReader: Send + Sync {
    /// List products, newest first, restricted by the visibility filter.
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Product>, DomainError>;

    /// Find one product by id regardless of visibility.
    ///
    /// Returns `None` if no product has this id.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ProductReader) {}
    }
}
