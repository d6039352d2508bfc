//! Stripe adapter - checkout session creation.

mod checkout;

pub use checkout::{StripeCheckoutAdapter, StripeConfig};
