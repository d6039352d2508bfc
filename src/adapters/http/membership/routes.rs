//! Axum router configuration for membership endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_membership, MembershipAppState};

/// Create the membership API router.
///
/// # Routes
///
/// - `GET /` - Get current principal's membership (requires authentication)
pub fn membership_routes() -> Router<MembershipAppState> {
    Router::new().route("/", get(get_membership))
}
