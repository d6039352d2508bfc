//! ListProductsHandler - Query handler for the storefront product listing.

use std::sync::Arc;

use crate::application::handlers::MembershipGate;
use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, Principal};
use crate::domain::membership::VisibilityFilter;
use crate::ports::ProductReader;

/// Query for the product listing.
#[derive(Debug, Clone)]
pub struct ListProductsQuery {
    pub principal: Option<Principal>,
}

/// Handler for listing storefront products, newest first.
pub struct ListProductsHandler {
    gate: MembershipGate,
    products: Arc<dyn ProductReader>,
}

impl ListProductsHandler {
    pub fn new(gate: MembershipGate, products: Arc<dyn ProductReader>) -> Self {
        Self { gate, products }
    }

    pub async fn handle(&self, query: ListProductsQuery) -> Result<Vec<Product>, DomainError> {
        let is_member = self.gate.is_member(query.principal.as_ref()).await?;
        let filter = VisibilityFilter::for_requester(is_member);
        self.products.list(filter).await
    }
}
