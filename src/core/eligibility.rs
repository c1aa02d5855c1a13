use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Deal, Session, UserRole};

/// Whether the viewer may claim a deal, and if not, why
///
/// Advisory only: this drives what the viewer is offered, it does not
/// reserve anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimAvailability {
    Claimable,
    /// Free deals are reserved for NGOs
    NgoOnly,
    SignUpRequired,
    SoldOut,
    Expired,
}

impl ClaimAvailability {
    pub fn is_claimable(&self) -> bool {
        matches!(self, ClaimAvailability::Claimable)
    }

    /// Call-to-action label for the claim button
    pub fn label(&self, deal: &Deal) -> &'static str {
        match self {
            ClaimAvailability::Claimable if deal.is_free() => "Claim Donation",
            ClaimAvailability::Claimable => "Claim Deal",
            ClaimAvailability::NgoOnly => "NGO Only",
            ClaimAvailability::SignUpRequired => "Sign Up to Claim",
            ClaimAvailability::SoldOut => "Sold Out",
            ClaimAvailability::Expired => "Expired",
        }
    }
}

/// Decide whether `session` can claim `deal` at `now`
///
/// Anonymous viewers are always asked to sign up, even for sold-out or
/// expired deals.
pub fn claim_availability(deal: &Deal, session: &Session, now: DateTime<Utc>) -> ClaimAvailability {
    let Some(role) = session.role() else {
        return ClaimAvailability::SignUpRequired;
    };

    if deal.qty_remaining == 0 {
        return ClaimAvailability::SoldOut;
    }

    if !deal.is_pickup_open(now) {
        return ClaimAvailability::Expired;
    }

    if deal.is_free() && role != UserRole::Ngo {
        return ClaimAvailability::NgoOnly;
    }

    ClaimAvailability::Claimable
}
