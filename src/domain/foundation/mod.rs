//! Shared domain primitives.
//!
//! Value objects and error types used across all domain modules.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, Principal};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EssayId, EventId, MembershipId, PackageId, PrincipalId, ProductId, RsvpId, Slug};
pub use timestamp::Timestamp;
