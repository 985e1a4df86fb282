//! Optional benefit group domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BenefiaError, BenefiaResult};
use crate::locale::LocalizedString;
use crate::models::benefit::Benefit;

/// The window during which employees may change their selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SelectionPeriod {
    /// Whether the window is open at `now` (inclusive on both ends).
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }
}

/// A set of mutually exclusive benefit choices. An employee selects at
/// most one option per group, within the group's selection window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalBenefitGroup {
    pub id: Uuid,
    pub name: LocalizedString,
    pub description: String,
    /// Ordered list of choices; order is presentation order.
    pub options: Vec<Benefit>,
    pub selection_period: SelectionPeriod,
    /// Free-text note shown to employees about change restrictions.
    pub change_restrictions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OptionalBenefitGroup {
    /// Look up an option of this group by id.
    pub fn option(&self, option_id: Uuid) -> Option<&Benefit> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOptionalBenefitGroup {
    pub name: LocalizedString,
    pub description: String,
    pub options: Vec<Benefit>,
    pub selection_period: SelectionPeriod,
    pub change_restrictions: String,
}

impl CreateOptionalBenefitGroup {
    pub fn validate(&self) -> BenefiaResult<()> {
        if self.name.fi.trim().is_empty() {
            return Err(BenefiaError::validation("name.fi is required"));
        }
        if self.selection_period.end < self.selection_period.start {
            return Err(BenefiaError::validation(
                "selection_period.end must not precede selection_period.start",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOptionalBenefitGroup {
    pub name: Option<LocalizedString>,
    pub description: Option<String>,
    pub options: Option<Vec<Benefit>>,
    pub selection_period: Option<SelectionPeriod>,
    pub change_restrictions: Option<String>,
}

impl UpdateOptionalBenefitGroup {
    /// Provided fields must satisfy the same invariants as creation.
    /// The selection period is replaced wholesale, so checking the
    /// provided value covers the stored window too.
    pub fn validate(&self) -> BenefiaResult<()> {
        if let Some(name) = &self.name {
            if name.fi.trim().is_empty() {
                return Err(BenefiaError::validation("name.fi is required"));
            }
        }
        if let Some(period) = &self.selection_period {
            if period.end < period.start {
                return Err(BenefiaError::validation(
                    "selection_period.end must not precede selection_period.start",
                ));
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
    fn window_is_inclusive_on_both_ends() {
        let now = Utc::now();
        let period = SelectionPeriod {
            start: now,
            end: now + Duration::days(10),
        };
        assert!(period.is_open(now));
        assert!(period.is_open(now + Duration::days(10)));
        assert!(!period.is_open(now - Duration::seconds(1)));
        assert!(!period.is_open(now + Duration::days(10) + Duration::seconds(1)));
    }

    #[test]
    fn rejects_inverted_selection_period() {
        let now = Utc::now();
        let input = CreateOptionalBenefitGroup {
            name: LocalizedString::finnish("Hyvinvointi"),
            description: String::new(),
            options: vec![],
            selection_period: SelectionPeriod {
                start: now,
                end: now - Duration::days(1),
            },
            change_restrictions: String::new(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_validates_only_provided_fields() {
        assert!(UpdateOptionalBenefitGroup::default().validate().is_ok());

        let now = Utc::now();
        let update = UpdateOptionalBenefitGroup {
            selection_period: Some(SelectionPeriod {
                start: now,
                end: now - Duration::days(30),
            }),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateOptionalBenefitGroup {
            name: Some(LocalizedString::finnish("  ")),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
