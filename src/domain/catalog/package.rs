//! Wine package resource.

use crate::domain::foundation::{PackageId, Slug, Timestamp};
use serde::{Deserialize, Serialize};

/// A curated wine package offered to the community.
///
/// Unpublished packages are drafts visible to members only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Package ID.
    pub id: PackageId,

    /// URL-safe slug used in package page routes.
    pub slug: Slug,

    /// Display name.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Number of bottles included.
    pub bottle_count: i32,

    /// Visibility flag: unpublished packages are members-only.
    pub published: bool,

    /// When the package was created.
    pub created_at: Timestamp,
}

impl Package {
    /// Returns true if the package is visible to non-members.
    pub fn is_visible(&self) -> bool {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_package(published: bool) -> Package {
        Package {
            id: PackageId::new(),
            slug: Slug::new("autumn-reds").unwrap(),
            name: "Autumn Reds".to_string(),
            description: "Six reds for the colder months.".to_string(),
            price_cents: 18900,
            bottle_count: 6,
            published,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn published_package_is_visible() {
        assert!(test_package(true).is_visible());
    }

    #[test]
    fn unpublished_package_is_not_visible() {
        assert!(!test_package(false).is_visible());
    }
}
