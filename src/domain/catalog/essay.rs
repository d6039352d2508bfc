//! Essay resource.

use crate::domain::foundation::{EssayId, Timestamp};
use serde::{Deserialize, Serialize};

/// An essay in the site's writing section.
///
/// Essays are listed in explicit `display_order`; inactive essays are
/// visible to members only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Essay {
    /// Essay ID.
    pub id: EssayId,

    /// Title shown in the listing.
    pub title: String,

    /// Short excerpt for the listing page.
    pub excerpt: String,

    /// Full essay body (markdown).
    pub body: String,

    /// Visibility flag: inactive essays are members-only.
    pub is_active: bool,

    /// Position in the curated listing order.
    pub display_order: i32,

    /// When the essay was created.
    pub created_at: Timestamp,
}

impl Essay {
    /// Returns true if the essay is visible to non-members.
    pub fn is_visible(&self) -> bool {
        self.is_active
    }
}
