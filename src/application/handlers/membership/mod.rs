//! Membership handlers.

mod get_membership;

pub use get_membership::{GetMembershipHandler, GetMembershipQuery};
