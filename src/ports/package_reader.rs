//! Package reader port.

use crate::domain::catalog::Package;
use crate::domain::foundation::{DomainError, Slug};
use crate::domain::membership::VisibilityFilter;
use async_trait::async_trait;

/// Reader port for wine package queries.
///
/// # Design
///
/// The visibility filter is applied in the query itself so non-members
/// never receive hidden rows; the single-item path fetches unconditionally
/// and leaves the 404/403 distinction to the caller.
#[async_trait]
pub trait PackageReader: Send + Sync {
    /// List packages, newest first, restricted by the visibility filter.
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Package>, DomainError>;

    /// Find one package by slug regardless of visibility.
    ///
    /// Returns `None` if no package has this slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Package>, DomainError>;
}
