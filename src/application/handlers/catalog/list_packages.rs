//! ListPackagesHandler - Query handler for the package collection.

use std::sync::Arc;

use crate::application::handlers::MembershipGate;
use crate::domain::catalog::Package;
use crate::domain::foundation::{DomainError, Principal};
use crate::domain::membership::VisibilityFilter;
use crate::ports::PackageReader;

/// Query for the package collection.
#[derive(Debug, Clone)]
pub struct ListPackagesQuery {
    pub principal: Option<Principal>,
}

/// Packages visible to the requester, plus the member flag for response
/// shaping.
#[derive(Debug, Clone)]
pub struct ListPackagesResult {
    pub packages: Vec<Package>,
    pub is_member: bool,
}

/// Handler for listing wine packages.
///
/// Members get every package including drafts; non-members get published
/// packages only, filtered in the query itself.
pub struct ListPackagesHandler {
    gate: MembershipGate,
    packages: Arc<dyn PackageReader>,
}

impl ListPackagesHandler {
    pub fn new(gate: MembershipGate, packages: Arc<dyn PackageReader>) -> Self {
        Self { gate, packages }
    }

    pub async fn handle(&self, query: ListPackagesQuery) -> Result<ListPackagesResult, DomainError> {
        let is_member = self.gate.is_member(query.principal.as_ref()).await?;
        let filter = VisibilityFilter::for_requester(is_member);
        let packages = self.packages.list(filter).await?;

        Ok(ListPackagesResult {
            packages,
            is_member,
        })
    }
}
