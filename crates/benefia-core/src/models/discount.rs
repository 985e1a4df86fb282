//! Discount code domain model and expiry classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BenefiaError, BenefiaResult};

/// Codes within this many days of expiry are flagged "expiring soon".
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// A partner discount with a redeemable code and a bounded validity
/// window. Unlike benefits, both ends of the window are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCode {
    pub id: Uuid,
    pub partner_name: String,
    pub partner_logo: Option<String>,
    pub description: String,
    /// The redemption code shown (and copied) to employees.
    pub code: String,
    /// Free-text discount description, e.g. "-20 %".
    pub discount_amount: String,
    pub categories: Vec<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub partner_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiscountCode {
    pub fn expiry_status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        ExpiryStatus::classify(self.valid_to, now)
    }
}

/// Derived expiry state of a discount code.
///
/// Day counting uses a ceiling at day granularity: a code expiring later
/// today has 1 day remaining and is "expiring soon"; exactly 30 days out
/// is still "expiring soon". A code whose `valid_to` has passed is only
/// "expired". The two flags are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryStatus {
    pub expired: bool,
    pub expiring_soon: bool,
}

impl ExpiryStatus {
    pub fn classify(valid_to: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (valid_to - now).num_seconds();
        if remaining < 0 {
            return Self {
                expired: true,
                expiring_soon: false,
            };
        }
        // Ceiling division: any partial day counts as a full day.
        let days_until = (remaining + 86_399) / 86_400;
        Self {
            expired: false,
            expiring_soon: days_until > 0 && days_until <= EXPIRING_SOON_DAYS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiscountCode {
    pub partner_name: String,
    pub partner_logo: Option<String>,
    pub description: String,
    pub code: String,
    pub discount_amount: String,
    pub categories: Vec<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub partner_url: String,
}

impl CreateDiscountCode {
    pub fn validate(&self) -> BenefiaResult<()> {
        if self.partner_name.trim().is_empty() {
            return Err(BenefiaError::validation("partner_name is required"));
        }
        if self.code.trim().is_empty() {
            return Err(BenefiaError::validation("code is required"));
        }
        if self.valid_to < self.valid_from {
            return Err(BenefiaError::validation(
                "valid_to must not precede valid_from",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDiscountCode {
    pub partner_name: Option<String>,
    pub partner_logo: Option<Option<String>>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub discount_amount: Option<String>,
    pub categories: Option<Vec<String>>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub partner_url: Option<String>,
}

impl UpdateDiscountCode {
    /// Provided fields must satisfy the same invariants as creation.
    /// The window ordering is re-checked against the stored code after
    /// merging, since either end may arrive alone.
    pub fn validate(&self) -> BenefiaResult<()> {
        if let Some(partner_name) = &self.partner_name {
            if partner_name.trim().is_empty() {
                return Err(BenefiaError::validation("partner_name is required"));
            }
        }
        if let Some(code) = &self.code {
            if code.trim().is_empty() {
                return Err(BenefiaError::validation("code is required"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn far_future_is_neither() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now + Duration::days(31), now);
        assert!(!status.expired);
        assert!(!status.expiring_soon);
    }

    #[test]
    fn within_thirty_days_is_expiring_soon() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now + Duration::days(15), now);
        assert!(!status.expired);
        assert!(status.expiring_soon);
    }

    #[test]
    fn exactly_thirty_days_is_expiring_soon() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now + Duration::days(30), now);
        assert!(status.expiring_soon);
    }

    #[test]
    fn past_is_expired_only() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now - Duration::days(1), now);
        assert!(status.expired);
        assert!(!status.expiring_soon);
    }

    #[test]
    fn partial_day_counts_as_one() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now + Duration::hours(3), now);
        assert!(!status.expired);
        assert!(status.expiring_soon);
    }

    #[test]
    fn expiring_at_this_instant_is_not_yet_expired() {
        let now = Utc::now();
        let status = ExpiryStatus::classify(now, now);
        assert!(!status.expired);
        assert!(!status.expiring_soon);
    }

    #[test]
    fn rejects_inverted_validity_window() {
        let now = Utc::now();
        let input = CreateDiscountCode {
            partner_name: "Elisa".into(),
            partner_logo: None,
            description: "Liittymäalennus".into(),
            code: "ELISA-2024".into(),
            discount_amount: "-15 %".into(),
            categories: vec!["phone".into()],
            valid_from: now,
            valid_to: now - Duration::days(1),
            partner_url: "https://elisa.fi".into(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_rejects_blank_redemption_code() {
        assert!(UpdateDiscountCode::default().validate().is_ok());
        let update = UpdateDiscountCode {
            code: Some("   ".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
