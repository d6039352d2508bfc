//! Storefront handlers: checkout and newsletter subscription.

mod create_checkout;
mod subscribe_newsletter;

pub use create_checkout::{CreateCheckoutCommand, CreateCheckoutHandler, CreateCheckoutResult};
pub use subscribe_newsletter::{SubscribeNewsletterCommand, SubscribeNewsletterHandler};
