//! ListEssaysHandler - Query handler for the essay listing.

use std::sync::Arc;

use crate::application::handlers::MembershipGate;
use crate::domain::catalog::Essay;
use crate::domain::foundation::{DomainError, Principal};
use crate::domain::membership::VisibilityFilter;
use crate::ports::EssayReader;

/// Query for the essay listing.
#[derive(Debug, Clone)]
pub struct ListEssaysQuery {
    pub principal: Option<Principal>,
}

/// Handler for listing essays in display order.
pub struct ListEssaysHandler {
    gate: MembershipGate,
    essays: Arc<dyn EssayReader>,
}

impl ListEssaysHandler {
    pub fn new(gate: MembershipGate, essays: Arc<dyn EssayReader>) -> Self {
        Self { gate, essays }
    }

    pub async fn handle(&self, query: ListEssaysQuery) -> Result<Vec<Essay>, DomainError> {
        let is_member = self.gate.is_member(query.principal.as_ref()).await?;
        let filter = VisibilityFilter::for_requester(is_member);
        self.essays.list(filter).await
    }
}
