//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Identity
//!
//! - `SessionValidator` - Credential validation against the identity provider
//!
//! ## Datastore reads/writes
//!
//! - `MembershipReader` - Membership lookup by principal
//! - `PackageReader` / `EssayReader` / `ProductReader` - Gated catalog reads
//! - `EssayRepository` - Essay display-order updates (admin)
//! - `EventReader` / `RsvpRepository` - Events and RSVPs
//!
//! ## SaaS calls
//!
//! - `PaymentProvider` - Stripe checkout session creation
//! - `NewsletterClient` - ConvertKit mailing-list subscription

mod essay_reader;
mod essay_repository;
mod event_reader;
mod membership_reader;
mod newsletter_client;
mod package_reader;
mod payment_provider;
mod product_reader;
mod rsvp_repository;
mod session_validator;

pub use essay_reader::EssayReader;
pub use essay_repository::EssayRepository;
pub use event_reader::EventReader;
pub use membership_reader::MembershipReader;
pub use newsletter_client::{NewsletterClient, NewsletterError, SubscribeRequest};
pub use package_reader::PackageReader;
pub use payment_provider::{CheckoutRequest, CheckoutSession, PaymentError, PaymentProvider};
pub use product_reader::ProductReader;
pub use rsvp_repository::RsvpRepository;
pub use session_validator::SessionValidator;
