//! GetPackageHandler - Query handler for a single package by slug.

use std::sync::Arc;

use crate::application::handlers::MembershipGate;
use crate::domain::catalog::Package;
use crate::domain::foundation::{DomainError, ErrorCode, Principal, Slug};
use crate::domain::membership::AccessDecision;
use crate::ports::PackageReader;

/// Query for one package by slug.
#[derive(Debug, Clone)]
pub struct GetPackageQuery {
    pub principal: Option<Principal>,
    pub slug: Slug,
}

/// The package plus the member flag for response shaping.
#[derive(Debug, Clone)]
pub struct GetPackageResult {
    pub package: Package,
    pub is_member: bool,
}

/// Handler for fetching a single package.
///
/// Existence is checked before visibility: an absent slug is "not found"
/// for everyone, and only an existing-but-unpublished package yields the
/// members-only refusal.
pub struct GetPackageHandler {
    gate: MembershipGate,
    packages: Arc<dyn PackageReader>,
}

impl GetPackageHandler {
    pub fn new(gate: MembershipGate, packages: Arc<dyn PackageReader>) -> Self {
        Self { gate, packages }
    }

    pub async fn handle(&self, query: GetPackageQuery) -> Result<GetPackageResult, DomainError> {
        let is_member = self.gate.is_member(query.principal.as_ref()).await?;

        let package = self
            .packages
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PackageNotFound, "Package not found"))?;

        let decision = AccessDecision::evaluate(is_member, package.is_visible());
        if decision.is_denied() {
            return Err(DomainError::new(
                ErrorCode::MembersOnly,
                "This package is members only",
            ));
        }

        Ok(GetPackageResult { package, is_member })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MembershipId, PackageId, PrincipalId, Timestamp};
    use crate::domain::membership::{Membership, MembershipTier, VisibilityFilter};
    use crate::ports::MembershipReader;
    use async_trait::async_trait;

    struct MockPackageReader {
        packages: Vec<Package>,
    }

    #[async_trait]
    impl PackageReader for MockPackageReader {
        async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Package>, DomainError> {
            Ok(self
                .packages
                .iter()
                .filter(|p| filter.admits(p.published))
                .cloned()
                .collect())
        }

        async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Package>, DomainError> {
            Ok(self.packages.iter().find(|p| &p.slug == slug).cloned())
        }
    }

    struct MockMembershipReader {
        membership: Option<Membership>,
    }

    #[async_trait]
    impl MembershipReader for MockMembershipReader {
        async fn find_by_principal(
            &self,
            _principal_id: &PrincipalId,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(self.membership.clone())
        }
    }

    fn package(slug: &str, published: bool) -> Package {
        Package {
            id: PackageId::new(),
            slug: Slug::new(slug).unwrap(),
            name: slug.to_string(),
            description: String::new(),
            price_cents: 9900,
            bottle_count: 3,
            published,
            created_at: Timestamp::now(),
        }
    }

    fn handler(membership: Option<Membership>, packages: Vec<Package>) -> GetPackageHandler {
        GetPackageHandler::new(
            MembershipGate::new(Arc::new(MockMembershipReader { membership })),
            Arc::new(MockPackageReader { packages }),
        )
    }

    fn principal() -> Principal {
        Principal::new(PrincipalId::new("principal-1").unwrap(), "p@example.com")
    }

    fn membership(tier: MembershipTier) -> Membership {
        Membership::new(
            MembershipId::new(),
            PrincipalId::new("principal-1").unwrap(),
            tier,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found_for_members_too() {
        let handler = handler(Some(membership(MembershipTier::Founder)), vec![]);
        let err = handler
            .handle(GetPackageQuery {
                principal: Some(principal()),
                slug: Slug::new("missing").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PackageNotFound);
    }

    #[tokio::test]
    async fn unpublished_package_is_members_only_for_anonymous() {
        let handler = handler(None, vec![package("x", false)]);
        let err = handler
            .handle(GetPackageQuery {
                principal: None,
                slug: Slug::new("x").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MembersOnly);
        assert_eq!(err.message, "This package is members only");
    }

    #[tokio::test]
    async fn unpublished_package_is_returned_to_member_of_any_tier() {
        for tier in [
            MembershipTier::Free,
            MembershipTier::Premium,
            MembershipTier::Founder,
        ] {
            let handler = handler(Some(membership(tier)), vec![package("x", false)]);
            let result = handler
                .handle(GetPackageQuery {
                    principal: Some(principal()),
                    slug: Slug::new("x").unwrap(),
                })
                .await
                .unwrap();

            assert!(result.is_member);
            assert_eq!(result.package.slug.as_str(), "x");
        }
    }

    #[tokio::test]
    async fn published_package_is_returned_to_anonymous() {
        let handler = handler(None, vec![package("open", true)]);
        let result = handler
            .handle(GetPackageQuery {
                principal: None,
                slug: Slug::new("open").unwrap(),
            })
            .await
            .unwrap();

        assert!(!result.is_member);
        assert_eq!(result.package.slug.as_str(), "open");
    }
}
