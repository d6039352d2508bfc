//! HTTP handlers for storefront endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CurrentPrincipal;
use crate::application::handlers::storefront::{
    CreateCheckoutCommand, CreateCheckoutHandler, SubscribeNewsletterCommand,
    SubscribeNewsletterHandler,
};
use crate::application::handlers::MembershipGate;
use crate::ports::{MembershipReader, NewsletterClient, PaymentProvider, ProductReader};

use super::dto::{
    CheckoutResponse, CreateCheckoutRequest, SubscribeNewsletterRequest, SubscribeResponse,
};

/// Shared application state containing storefront dependencies.
#[derive(Clone)]
pub struct StorefrontAppState {
    pub membership_reader: Arc<dyn MembershipReader>,
    pub product_reader: Arc<dyn ProductReader>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub newsletter_client: Arc<dyn NewsletterClient>,
}

impl StorefrontAppState {
    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(
            MembershipGate::new(self.membership_reader.clone()),
            self.product_reader.clone(),
            self.payment_provider.clone(),
        )
    }

    pub fn subscribe_handler(&self) -> SubscribeNewsletterHandler {
        SubscribeNewsletterHandler::new(self.newsletter_client.clone())
    }
}

/// POST /api/checkout - Create a checkout session for a product
pub async fn create_checkout(
    State(state): State<StorefrontAppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_checkout_handler();
    let result = handler
        .handle(CreateCheckoutCommand {
            principal,
            product_id: request.product_id,
            success_url: request.success_url,
            cancel_url: request.cancel_url,
        })
        .await?;

    let response = CheckoutResponse {
        url: result.checkout_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/subscribe - Subscribe to the newsletter
pub async fn subscribe_newsletter(
    State(state): State<StorefrontAppState>,
    Json(request): Json<SubscribeNewsletterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.subscribe_handler();
    handler
        .handle(SubscribeNewsletterCommand {
            email: request.email,
            first_name: request.first_name,
        })
        .await?;

    Ok(Json(SubscribeResponse { success: true }))
}
