//! Wine With Pete - Community Site Backend
//!
//! This crate implements the API backend for the Wine With Pete site:
//! a membership-gated content catalog (wine packages, essays, products),
//! event listings with RSVP, and a thin storefront (Stripe checkout,
//! ConvertKit mailing-list subscription).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
