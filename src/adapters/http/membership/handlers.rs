//! HTTP handlers for membership endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequirePrincipal;
use crate::application::handlers::membership::{GetMembershipHandler, GetMembershipQuery};
use crate::ports::MembershipReader;

use super::dto::{MembershipDto, MembershipResponse};

/// Shared application state containing membership dependencies.
#[derive(Clone)]
pub struct MembershipAppState {
    pub membership_reader: Arc<dyn MembershipReader>,
}

impl MembershipAppState {
    pub fn get_membership_handler(&self) -> GetMembershipHandler {
        GetMembershipHandler::new(self.membership_reader.clone())
    }
}

/// GET /api/membership - Get current principal's membership
pub async fn get_membership(
    State(state): State<MembershipAppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_membership_handler();
    let result = handler
        .handle(GetMembershipQuery {
            principal_id: principal.id,
        })
        .await?;

    let response = MembershipResponse {
        membership: result.map(MembershipDto::from),
    };

    Ok(Json(response))
}
