//! Integration tests for the catalog HTTP surface.
//!
//! These tests exercise the full router with mock ports behind it:
//! session resolution, the membership gate, the 404/403 single-item
//! semantics, the admin credential check, and the bulk reorder's
//! partial-failure reporting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use http::{Request, StatusCode};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use wine_with_pete::adapters::auth::MockSessionValidator;
use wine_with_pete::adapters::http::middleware::AdminCredential;
use wine_with_pete::adapters::http::{
    build_router, CatalogAppState, EventsAppState, MembershipAppState, RouterDeps,
    StorefrontAppState,
};
use wine_with_pete::domain::catalog::{Essay, Package, Product};
use wine_with_pete::domain::events::{Event, Rsvp};
use wine_with_pete::domain::foundation::{
    DomainError, ErrorCode, EssayId, EventId, MembershipId, PackageId, PrincipalId, ProductId,
    Slug, Timestamp,
};
use wine_with_pete::domain::membership::{Membership, MembershipTier, VisibilityFilter};
use wine_with_pete::ports::{
    CheckoutRequest, CheckoutSession, EssayReader, EssayRepository, EventReader, MembershipReader,
    NewsletterClient, NewsletterError, PackageReader, PaymentError, PaymentProvider,
    ProductReader, RsvpRepository, SubscribeRequest,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ADMIN_TOKEN: &str = "fedcba9876543210fedcba9876543210";
const MEMBER_TOKEN: &str = "member-session-token";
const MEMBER_PRINCIPAL: &str = "11111111-1111-1111-1111-111111111111";

struct MockMembershipReader {
    memberships: HashMap<String, Membership>,
}

impl MockMembershipReader {
    fn with_member(principal_id: &str) -> Self {
        let membership = Membership::new(
            MembershipId::new(),
            PrincipalId::new(principal_id).unwrap(),
            MembershipTier::Premium,
            Timestamp::now(),
        );
        let mut memberships = HashMap::new();
        memberships.insert(principal_id.to_string(), membership);
        Self { memberships }
    }
}

#[async_trait]
impl MembershipReader for MockMembershipReader {
    async fn find_by_principal(
        &self,
        principal_id: &PrincipalId,
    ) -> Result<Option<Membership>, DomainError> {
        Ok(self.memberships.get(principal_id.as_str()).cloned())
    }
}

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

struct MockEssayReader {
    essays: Vec<Essay>,
}

#[async_trait]
impl EssayReader for MockEssayReader {
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Essay>, DomainError> {
        let mut essays: Vec<Essay> = self
            .essays
            .iter()
            .filter(|e| filter.admits(e.is_active))
            .cloned()
            .collect();
        essays.sort_by_key(|e| e.display_order);
        Ok(essays)
    }
}

struct MockEssayRepository {
    known: Vec<EssayId>,
    applied: Mutex<HashMap<EssayId, i32>>,
}

#[async_trait]
impl EssayRepository for MockEssayRepository {
    async fn set_display_order(&self, id: &EssayId, display_order: i32) -> Result<(), DomainError> {
        if !self.known.contains(id) {
            return Err(DomainError::new(ErrorCode::EssayNotFound, "Essay not found"));
        }
        self.applied.lock().unwrap().insert(*id, display_order);
        Ok(())
    }
}

struct MockProductReader {
    products: Vec<Product>,
}

#[async_trait]
impl ProductReader for MockProductReader {
    async fn list(&self, filter: VisibilityFilter) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .iter()
            .filter(|p| filter.admits(p.is_active))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}

struct MockEventReader {
    events: Vec<Event>,
}

#[async_trait]
impl EventReader for MockEventReader {
    async fn list_upcoming(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.events.iter().filter(|e| e.is_upcoming()).cloned().collect())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.events.iter().find(|e| &e.id == id).cloned())
    }
}

struct MockRsvpRepository {
    saved: Mutex<Vec<Rsvp>>,
}

#[async_trait]
impl RsvpRepository for MockRsvpRepository {
    async fn save(&self, rsvp: &Rsvp) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push(rsvp.clone());
        Ok(())
    }
}

struct MockPaymentProvider;

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        _request: CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        Ok(CheckoutSession {
            id: "cs_test_1".to_string(),
            url: "https://checkout.stripe.com/c/pay/cs_test_1".to_string(),
        })
    }
}

struct MockNewsletterClient;

#[async_trait]
impl NewsletterClient for MockNewsletterClient {
    async fn subscribe(&self, _request: SubscribeRequest) -> Result<(), NewsletterError> {
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn package(slug: &str, published: bool) -> Package {
    Package {
        id: PackageId::new(),
        slug: Slug::new(slug).unwrap(),
        name: slug.to_string(),
        description: "wine".to_string(),
        price_cents: 18900,
        bottle_count: 6,
        published,
        created_at: Timestamp::now(),
    }
}

fn essay(title: &str, is_active: bool, display_order: i32) -> Essay {
    Essay {
        id: EssayId::new(),
        title: title.to_string(),
        excerpt: String::new(),
        body: String::new(),
        is_active,
        display_order,
        created_at: Timestamp::now(),
    }
}

fn product(name: &str, is_active: bool) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        description: String::new(),
        price_cents: 2500,
        stripe_price_id: Some("price_123".to_string()),
        is_active,
        created_at: Timestamp::now(),
    }
}

struct TestApp {
    router: axum::Router,
    essay_ids: Vec<EssayId>,
}

fn test_app() -> TestApp {
    let membership_reader = Arc::new(MockMembershipReader::with_member(MEMBER_PRINCIPAL));

    let essays = vec![
        essay("second", true, 2),
        essay("hidden", false, 1),
        essay("first", true, 0),
    ];
    let essay_ids: Vec<EssayId> = essays.iter().map(|e| e.id).collect();

    let catalog = CatalogAppState {
        membership_reader: membership_reader.clone(),
        package_reader: Arc::new(MockPackageReader {
            packages: vec![package("spring-reds", true), package("cellar-drafts", false)],
        }),
        essay_reader: Arc::new(MockEssayReader { essays }),
        essay_repository: Arc::new(MockEssayRepository {
            known: essay_ids.clone(),
            applied: Mutex::new(HashMap::new()),
        }),
        product_reader: Arc::new(MockProductReader {
            products: vec![product("corkscrew", true), product("retired-tote", false)],
        }),
    };

    let membership = MembershipAppState {
        membership_reader: membership_reader.clone(),
    };

    let events = EventsAppState {
        event_reader: Arc::new(MockEventReader { events: vec![] }),
        rsvp_repository: Arc::new(MockRsvpRepository {
            saved: Mutex::new(Vec::new()),
        }),
    };

    let storefront = StorefrontAppState {
        membership_reader,
        product_reader: Arc::new(MockProductReader { products: vec![] }),
        payment_provider: Arc::new(MockPaymentProvider),
        newsletter_client: Arc::new(MockNewsletterClient),
    };

    let session_validator =
        Arc::new(MockSessionValidator::new().with_test_principal(MEMBER_TOKEN, MEMBER_PRINCIPAL));

    let router = build_router(RouterDeps {
        session_validator,
        admin_credential: AdminCredential::new(SecretString::new(ADMIN_TOKEN.to_string())),
        catalog,
        membership,
        events,
        storefront,
    });

    TestApp { router, essay_ids }
}

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, bearer: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// =============================================================================
// Package collection
// =============================================================================

#[tokio::test]
async fn anonymous_package_list_is_published_only() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/packages", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"], false);
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["spring-reds"]);
}

#[tokio::test]
async fn member_package_list_includes_drafts() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/packages", Some(MEMBER_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_credential_degrades_to_anonymous() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/packages", Some("garbage-token"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Single package
// =============================================================================

#[tokio::test]
async fn unknown_slug_is_not_found_regardless_of_membership() {
    let app = test_app();

    let (status, _) = send(&app.router, get("/api/packages/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app.router, get("/api/packages/nope", Some(MEMBER_TOKEN))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unpublished_package_is_forbidden_for_anonymous() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/packages/cellar-drafts", None)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "This package is members only");
}

#[tokio::test]
async fn unpublished_package_is_returned_to_member() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        get("/api/packages/cellar-drafts", Some(MEMBER_TOKEN)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"], true);
    assert_eq!(body["data"]["slug"], "cellar-drafts");
}

#[tokio::test]
async fn published_package_is_returned_to_anonymous() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/packages/spring-reds", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"], false);
    assert_eq!(body["data"]["slug"], "spring-reds");
}

// =============================================================================
// Essays and products
// =============================================================================

#[tokio::test]
async fn anonymous_essays_are_active_and_ordered() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/essays", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[tokio::test]
async fn member_essays_include_inactive() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/essays", Some(MEMBER_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn anonymous_products_are_active_only() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/products", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["corkscrew"]);
}

// =============================================================================
// Membership endpoint
// =============================================================================

#[tokio::test]
async fn membership_endpoint_requires_authentication() {
    let app = test_app();
    let (status, _) = send(&app.router, get("/api/membership", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn membership_endpoint_returns_tier() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/membership", Some(MEMBER_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["membership"]["tier"], "premium");
}

// =============================================================================
// Admin reorder
// =============================================================================

#[tokio::test]
async fn reorder_without_admin_credential_is_unauthorized() {
    let app = test_app();
    let body = json!({ "essays": [] });
    let (status, _) = send(
        &app.router,
        post_json("/api/admin/essays/reorder", None, &body),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reorder_with_member_credential_is_still_unauthorized() {
    // The admin gate takes a deploy-time credential, not a membership.
    let app = test_app();
    let body = json!({ "essays": [] });
    let (status, _) = send(
        &app.router,
        post_json("/api/admin/essays/reorder", Some(MEMBER_TOKEN), &body),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reorder_persists_valid_items_and_reports_invalid_one() {
    let app = test_app();
    let bad_id = EssayId::new();
    let body = json!({
        "essays": [
            { "id": app.essay_ids[0].to_string(), "display_order": 0 },
            { "id": bad_id.to_string(), "display_order": 1 },
            { "id": app.essay_ids[1].to_string(), "display_order": 2 },
        ]
    });

    let (status, body) = send(
        &app.router,
        post_json("/api/admin/essays/reorder", Some(ADMIN_TOKEN), &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["updated"].as_array().unwrap().len(), 2);
    let failed = body["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["id"], bad_id.to_string());
}

#[tokio::test]
async fn reorder_with_empty_list_is_bad_request() {
    let app = test_app();
    let body = json!({ "essays": [] });
    let (status, _) = send(
        &app.router,
        post_json("/api/admin/essays/reorder", Some(ADMIN_TOKEN), &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_is_public() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
