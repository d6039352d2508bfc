//! GetMembershipHandler - Query handler for the current principal's membership.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PrincipalId};
use crate::domain::membership::Membership;
use crate::ports::MembershipReader;

/// Query for a principal's membership.
#[derive(Debug, Clone)]
pub struct GetMembershipQuery {
    pub principal_id: PrincipalId,
}

/// Handler for fetching the requesting principal's membership record.
pub struct GetMembershipHandler {
    reader: Arc<dyn MembershipReader>,
}

impl GetMembershipHandler {
    pub fn new(reader: Arc<dyn MembershipReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetMembershipQuery,
    ) -> Result<Option<Membership>, DomainError> {
        self.reader.find_by_principal(&query.principal_id).await
    }
}
