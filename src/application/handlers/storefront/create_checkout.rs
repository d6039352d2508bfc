//! CreateCheckoutHandler - Command handler for starting a product checkout.

use std::sync::Arc;

use crate::application::handlers::MembershipGate;
use crate::domain::foundation::{DomainError, ErrorCode, Principal, ProductId};
use crate::domain::membership::AccessDecision;
use crate::ports::{CheckoutRequest, PaymentProvider, ProductReader};

/// Command to create a checkout session for one product.
#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    pub principal: Option<Principal>,
    pub product_id: ProductId,
    pub success_url: String,
    pub cancel_url: String,
}

/// The created checkout session's hosted URL.
#[derive(Debug, Clone)]
pub struct CreateCheckoutResult {
    pub checkout_url: String,
}

/// Handler for creating a Stripe checkout session.
///
/// The access decision applies here too: a retired product is invisible
/// to non-members, so checkout reports it as "not found" rather than
/// leaking its existence. Members can see retired products but cannot
/// buy them.
pub struct CreateCheckoutHandler {
    gate: MembershipGate,
    products: Arc<dyn ProductReader>,
    payments: Arc<dyn PaymentProvider>,
}

impl CreateCheckoutHandler {
    pub fn new(
        gate: MembershipGate,
        products: Arc<dyn ProductReader>,
        payments: Arc<dyn PaymentProvider>,
    ) -> Self {
        Self {
            gate,
            products,
            payments,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCheckoutCommand,
    ) -> Result<CreateCheckoutResult, DomainError> {
        validate_redirect_url("success_url", &cmd.success_url)?;
        validate_redirect_url("cancel_url", &cmd.cancel_url)?;

        let is_member = self.gate.is_member(cmd.principal.as_ref()).await?;

        let product = self
            .products
            .find_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;

        let decision = AccessDecision::evaluate(is_member, product.is_visible());
        if decision.is_denied() {
            return Err(DomainError::new(ErrorCode::ProductNotFound, "Product not found"));
        }

        let price_id = match (&product.stripe_price_id, product.is_purchasable()) {
            (Some(price_id), true) => price_id.clone(),
            _ => {
                return Err(DomainError::validation(
                    "product_id",
                    "Product is not available for purchase",
                ))
            }
        };

        let session = self
            .payments
            .create_checkout_session(CheckoutRequest {
                price_id,
                quantity: 1,
                success_url: cmd.success_url,
                cancel_url: cmd.cancel_url,
                customer_email: cmd.principal.map(|p| p.email),
            })
            .await
            .map_err(|e| DomainError::new(ErrorCode::PaymentProviderError, e.to_string()))?;

        Ok(CreateCheckoutResult {
            checkout_url: session.url,
        })
    }
}

fn validate_redirect_url(field: &str, url: &str) -> Result<(), DomainError> {
    if url.is_empty() {
        return Err(DomainError::validation(field, "URL cannot be empty"));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(DomainError::validation(field, "URL must be http(s)"));
    }
    Ok(())
}
