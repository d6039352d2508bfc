//! ConvertKit adapter - mailing-list subscription.

mod client;

pub use client::{ConvertKitClient, ConvertKitConfig};
