//! RSVP repository port.

use crate::domain::events::Rsvp;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for persisting event RSVPs.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Persist a new RSVP.
    async fn save(&self, rsvp: &Rsvp) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RsvpRepository) {}
    }
}
