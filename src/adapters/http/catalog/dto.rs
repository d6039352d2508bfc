//! HTTP DTOs (Data Transfer Objects) for catalog endpoints.
//!
//! These types define the JSON request/response structure for the catalog
//! API. They serve as the boundary between HTTP and the application layer.

use crate::application::handlers::catalog::{ReorderFailure, ReorderOutcome};
use crate::domain::catalog::{Essay, Package, Product};
use crate::domain::foundation::EssayId;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to rewrite the curated essay order.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderEssaysRequest {
    /// The new ordering, one entry per essay.
    pub essays: Vec<EssayOrderDto>,
}

/// One item of the reorder request.
#[derive(Debug, Clone, Deserialize)]
pub struct EssayOrderDto {
    /// Essay to move.
    pub id: EssayId,
    /// Its new position.
    pub display_order: i32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for the package collection.
#[derive(Debug, Clone, Serialize)]
pub struct PackagesResponse {
    /// Packages visible to the requester.
    pub data: Vec<PackageDto>,
    /// Whether the requester holds a membership.
    pub member: bool,
}

/// Response for a single package.
#[derive(Debug, Clone, Serialize)]
pub struct PackageResponse {
    /// The package.
    pub data: PackageDto,
    /// Whether the requester holds a membership.
    pub member: bool,
}

/// Package shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PackageDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub bottle_count: i32,
    pub published: bool,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<Package> for PackageDto {
    fn from(package: Package) -> Self {
        Self {
            id: package.id.to_string(),
            slug: package.slug.to_string(),
            name: package.name,
            description: package.description,
            price_cents: package.price_cents,
            bottle_count: package.bottle_count,
            published: package.published,
            created_at: package.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the essay listing.
#[derive(Debug, Clone, Serialize)]
pub struct EssaysResponse {
    pub success: bool,
    pub data: Vec<EssayDto>,
}

/// Essay shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EssayDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub is_active: bool,
    pub display_order: i32,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<Essay> for EssayDto {
    fn from(essay: Essay) -> Self {
        Self {
            id: essay.id.to_string(),
            title: essay.title,
            excerpt: essay.excerpt,
            body: essay.body,
            is_active: essay.is_active,
            display_order: essay.display_order,
            created_at: essay.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the product listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub data: Vec<ProductDto>,
}

/// Product shape in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub is_active: bool,
    /// Creation time (ISO 8601).
    pub created_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            is_active: product.is_active,
            created_at: product.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the bulk reorder, reporting per-item outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderEssaysResponse {
    /// True when every item was persisted.
    pub success: bool,
    /// Essays whose order was updated.
    pub updated: Vec<String>,
    /// Essays that could not be updated, with the reason.
    pub failed: Vec<ReorderFailureDto>,
}

/// One failed reorder item.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderFailureDto {
    pub id: String,
    pub error: String,
}

impl From<ReorderFailure> for ReorderFailureDto {
    fn from(failure: ReorderFailure) -> Self {
        Self {
            id: failure.id.to_string(),
            error: failure.error,
        }
    }
}

impl From<ReorderOutcome> for ReorderEssaysResponse {
    fn from(outcome: ReorderOutcome) -> Self {
        Self {
            success: outcome.is_complete(),
            updated: outcome.updated.iter().map(|id| id.to_string()).collect(),
            failed: outcome.failed.into_iter().map(ReorderFailureDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PackageId, Slug, Timestamp};

    #[test]
    fn packages_response_carries_member_flag() {
        let package = Package {
            id: PackageId::new(),
            slug: Slug::new("autumn-reds").unwrap(),
            name: "Autumn Reds".to_string(),
            description: String::new(),
            price_cents: 18900,
            bottle_count: 6,
            published: true,
            created_at: Timestamp::now(),
        };
        let response = PackagesResponse {
            data: vec![PackageDto::from(package)],
            member: false,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["member"], false);
        assert_eq!(json["data"][0]["slug"], "autumn-reds");
    }

    #[test]
    fn reorder_request_deserializes() {
        let body = r#"{"essays":[{"id":"550e8400-e29b-41d4-a716-446655440000","display_order":2}]}"#;
        let request: ReorderEssaysRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.essays.len(), 1);
        assert_eq!(request.essays[0].display_order, 2);
    }

    #[test]
    fn reorder_response_reports_partial_failure() {
        let outcome = ReorderOutcome {
            updated: vec![EssayId::new()],
            failed: vec![ReorderFailure {
                id: EssayId::new(),
                error: "Essay not found".to_string(),
            }],
        };
        let response = ReorderEssaysResponse::from(outcome);
        assert!(!response.success);
        assert_eq!(response.updated.len(), 1);
        assert_eq!(response.failed.len(), 1);
    }
}
