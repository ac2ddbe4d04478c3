//! Data model types for the food donation inventory.
//!
//! All identities are caller-supplied; the store never generates them.
//! Dates are exchanged as `YYYY-MM-DD`, timestamps as `YYYY-MM-DD HH:MM:SS`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Timestamp format used for claim timestamps throughout the system.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Provider ────────────────────────────────────────────────────────────────

/// An organization donating surplus food.
#[derive(Debug, Clone)]
pub struct Provider {
    pub provider_id: i64,
    pub name: String,
    pub provider_type: String,
    pub address: String,
    pub city: String,
    pub contact: String,
}

// ── Receiver ────────────────────────────────────────────────────────────────

/// An organization or individual receiving donated food.
#[derive(Debug, Clone)]
pub struct Receiver {
    pub receiver_id: i64,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

// ── Food Listing ────────────────────────────────────────────────────────────

/// A donated food item available for claim, with quantity and expiry.
#[derive(Debug, Clone)]
pub struct FoodListing {
    pub food_id: i64,
    pub food_name: String,
    /// Number of units available. Must be at least 1.
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub provider_type: String,
    /// City where the food is located.
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

// ── Claim ───────────────────────────────────────────────────────────────────

/// A receiver's request against a specific listing.
#[derive(Debug, Clone)]
pub struct Claim {
    pub claim_id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
    pub timestamp: NaiveDateTime,
}

impl Claim {
    /// The claim timestamp rendered in the wire format.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Lifecycle state of a claim: Pending until completed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Default for ClaimStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three defined statuses.
#[derive(Debug, Error)]
#[error("unknown claim status: '{0}' (expected Pending, Completed, or Cancelled)")]
pub struct ParseStatusError(pub String);

impl FromStr for ClaimStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ClaimStatus::Pending,
            ClaimStatus::Completed,
            ClaimStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("Expired".parse::<ClaimStatus>().is_err());
        // Matching is case-sensitive; the stored form is capitalized.
        assert!("pending".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn timestamp_uses_wire_format() {
        let claim = Claim {
            claim_id: 1,
            food_id: 1,
            receiver_id: 1,
            status: ClaimStatus::Pending,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        };
        assert_eq!(claim.timestamp_str(), "2024-03-05 14:30:00");
    }
}
