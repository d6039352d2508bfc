//! The access decision: membership presence x resource visibility.
//!
//! A single pure predicate gates all content reads. It is applied two ways:
//!
//! - **Collection path**: derive a [`VisibilityFilter`] before querying, so
//!   non-members only ever see visible rows.
//! - **Single-item path**: fetch first, then evaluate an [`AccessDecision`]
//!   against the row's visibility flag. Absent rows are "not found" for
//!   everyone; existing-but-hidden rows are "members only" for non-members.
//!
//! Members see everything, including drafts and retired items. Non-members
//! see only rows whose visibility flag is set.

use serde::{Deserialize, Serialize};

/// Result of the access computation for a single resource.
///
/// Derived per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the requesting principal holds a membership.
    pub is_member: bool,

    /// Whether the resource may be shown to the requester.
    pub can_view: bool,
}

impl AccessDecision {
    /// Evaluates the gate for one resource.
    ///
    /// `can_view` holds when the requester is a member or the resource's
    /// visibility flag is set.
    pub fn evaluate(membership_present: bool, resource_visible: bool) -> Self {
        Self {
            is_member: membership_present,
            can_view: membership_present || resource_visible,
        }
    }

    /// Returns true if viewing must be refused (exists but hidden to
    /// non-members).
    pub fn is_denied(&self) -> bool {
        !self.can_view
    }
}

/// Row filter derived from membership, for collection queries.
///
/// Non-members get `VisibleOnly` so hidden rows are excluded in the query
/// itself rather than post-filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityFilter {
    /// No visibility restriction - members see every row.
    All,

    /// Restrict to rows whose visibility flag is set.
    VisibleOnly,
}

impl VisibilityFilter {
    /// Derives the filter for a requester.
    pub fn for_requester(membership_present: bool) -> Self {
        if membership_present {
            VisibilityFilter::All
        } else {
            VisibilityFilter::VisibleOnly
        }
    }

    /// Applies the filter to one row's visibility flag.
    ///
    /// Used by in-memory implementations; SQL adapters express the same
    /// predicate as a WHERE clause.
    pub fn admits(&self, visible: bool) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::VisibleOnly => visible,
        }
    }
}
