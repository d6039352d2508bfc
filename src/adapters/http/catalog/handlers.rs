//! HTTP handlers for catalog endpoints.
//!
//! These handlers connect Axum routes to application layer query/command
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentPrincipal;
use crate::application::handlers::catalog::{
    EssayOrderItem, GetPackageHandler, GetPackageQuery, ListEssaysHandler, ListEssaysQuery,
    ListPackagesHandler, ListPackagesQuery, ListProductsHandler, ListProductsQuery,
    ReorderEssaysCommand, ReorderEssaysHandler,
};
use crate::application::handlers::MembershipGate;
use crate::domain::foundation::Slug;
use crate::ports::{EssayReader, EssayRepository, MembershipReader, PackageReader, ProductReader};

use super::dto::{
    EssayDto, EssaysResponse, PackageDto, PackageResponse, PackagesResponse, ProductDto,
    ProductsResponse, ReorderEssaysRequest, ReorderEssaysResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing catalog dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct CatalogAppState {
    pub membership_reader: Arc<dyn MembershipReader>,
    pub package_reader: Arc<dyn PackageReader>,
    pub essay_reader: Arc<dyn EssayReader>,
    pub essay_repository: Arc<dyn EssayRepository>,
    pub product_reader: Arc<dyn ProductReader>,
}

impl CatalogAppState {
    fn gate(&self) -> MembershipGate {
        MembershipGate::new(self.membership_reader.clone())
    }

    /// Create handlers on demand from the shared state.
    pub fn list_packages_handler(&self) -> ListPackagesHandler {
        ListPackagesHandler::new(self.gate(), self.package_reader.clone())
    }

    pub fn get_package_handler(&self) -> GetPackageHandler {
        GetPackageHandler::new(self.gate(), self.package_reader.clone())
    }

    pub fn list_essays_handler(&self) -> ListEssaysHandler {
        ListEssaysHandler::new(self.gate(), self.essay_reader.clone())
    }

    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.gate(), self.product_reader.clone())
    }

    pub fn reorder_essays_handler(&self) -> ReorderEssaysHandler {
        ReorderEssaysHandler::new(self.essay_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/packages - List packages visible to the requester
pub async fn list_packages(
    State(state): State<CatalogAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_packages_handler();
    let result = handler.handle(ListPackagesQuery { principal }).await?;

    let response = PackagesResponse {
        data: result.packages.into_iter().map(PackageDto::from).collect(),
        member: result.is_member,
    };

    Ok(Json(response))
}

/// GET /api/packages/{slug} - Fetch one package by slug
///
/// 404 if the slug is unknown; 403 if the package exists but is
/// unpublished and the requester is not a member.
pub async fn get_package(
    State(state): State<CatalogAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = Slug::new(slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let handler = state.get_package_handler();
    let result = handler.handle(GetPackageQuery { principal, slug }).await?;

    let response = PackageResponse {
        data: PackageDto::from(result.package),
        member: result.is_member,
    };

    Ok(Json(response))
}

/// GET /api/essays - List essays in display order
pub async fn list_essays(
    State(state): State<CatalogAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_essays_handler();
    let essays = handler.handle(ListEssaysQuery { principal }).await?;

    let response = EssaysResponse {
        success: true,
        data: essays.into_iter().map(EssayDto::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/products - List storefront products
pub async fn list_products(
    State(state): State<CatalogAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_products_handler();
    let products = handler.handle(ListProductsQuery { principal }).await?;

    let response = ProductsResponse {
        success: true,
        data: products.into_iter().map(ProductDto::from).collect(),
    };

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (admin endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/admin/essays/reorder - Bulk display_order update
///
/// Best-effort: each item is updated independently and the response
/// reports the per-item outcomes.
pub async fn reorder_essays(
    State(state): State<CatalogAppState>,
    Json(request): Json<ReorderEssaysRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.reorder_essays_handler();
    let cmd = ReorderEssaysCommand {
        items: request
            .essays
            .into_iter()
            .map(|item| EssayOrderItem {
                id: item.id,
                display_order: item.display_order,
            })
            .collect(),
    };

    let outcome = handler.handle(cmd).await?;

    Ok(Json(ReorderEssaysResponse::from(outcome)))
}
