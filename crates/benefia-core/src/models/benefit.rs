//! Benefit domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BenefiaError, BenefiaResult};
use crate::locale::LocalizedString;

/// Annual working days used to annualize per-day benefit values.
pub const WORKING_DAYS_PER_YEAR: f64 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitCategory {
    Lunch,
    Sports,
    Culture,
    Commute,
    Phone,
    Insurance,
    Healthcare,
    Wellbeing,
    Other,
}

impl BenefitCategory {
    /// All categories, in display order.
    pub const ALL: [BenefitCategory; 9] = [
        BenefitCategory::Lunch,
        BenefitCategory::Sports,
        BenefitCategory::Culture,
        BenefitCategory::Commute,
        BenefitCategory::Phone,
        BenefitCategory::Insurance,
        BenefitCategory::Healthcare,
        BenefitCategory::Wellbeing,
        BenefitCategory::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitStatus {
    Active,
    Draft,
    Archived,
    Upcoming,
    Expired,
}

/// Whether every eligible employee receives the benefit, or it must be
/// chosen from an [`OptionalBenefitGroup`](super::group::OptionalBenefitGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitKind {
    Standard,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueUnit {
    Day,
    Month,
    Year,
    OneTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
}

/// A benefit's monetary value: an amount per unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitValue {
    pub amount: f64,
    pub unit: ValueUnit,
    pub currency: Currency,
}

impl BenefitValue {
    pub fn new(amount: f64, unit: ValueUnit) -> Self {
        Self {
            amount,
            unit,
            currency: Currency::Eur,
        }
    }

    /// Normalize to an annual figure.
    ///
    /// Per-day rates assume 220 working days per year. One-time values
    /// count once at face value; they are never amortized over a longer
    /// horizon.
    pub fn annual_value(&self) -> f64 {
        match self.unit {
            ValueUnit::Day => self.amount * WORKING_DAYS_PER_YEAR,
            ValueUnit::Month => self.amount * 12.0,
            ValueUnit::Year | ValueUnit::OneTime => self.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub id: Uuid,
    pub kind: BenefitKind,
    pub name: LocalizedString,
    pub description: String,
    pub category: BenefitCategory,
    pub value: BenefitValue,
    pub status: BenefitStatus,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub icon: Option<String>,
    pub external_link: Option<String>,
    pub target_groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBenefit {
    pub kind: BenefitKind,
    pub name: LocalizedString,
    pub description: String,
    pub category: BenefitCategory,
    pub value: BenefitValue,
    pub status: BenefitStatus,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub icon: Option<String>,
    pub external_link: Option<String>,
    pub target_groups: Vec<String>,
}

impl CreateBenefit {
    /// Form-level validation: a savable benefit needs a Finnish name, a
    /// description, and a positive amount. `valid_from` is carried by the
    /// type itself.
    pub fn validate(&self) -> BenefiaResult<()> {
        if self.name.fi.trim().is_empty() {
            return Err(BenefiaError::validation("name.fi is required"));
        }
        if self.description.trim().is_empty() {
            return Err(BenefiaError::validation("description is required"));
        }
        if self.value.amount <= 0.0 {
            return Err(BenefiaError::validation("value.amount must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBenefit {
    pub name: Option<LocalizedString>,
    pub description: Option<String>,
    pub category: Option<BenefitCategory>,
    pub value: Option<BenefitValue>,
    pub status: Option<BenefitStatus>,
    pub valid_from: Option<NaiveDate>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub valid_to: Option<Option<NaiveDate>>,
    pub icon: Option<Option<String>>,
    pub external_link: Option<Option<String>>,
    pub target_groups: Option<Vec<String>>,
}

impl UpdateBenefit {
    pub fn validate(&self) -> BenefiaResult<()> {
        if let Some(name) = &self.name {
            if name.fi.trim().is_empty() {
                return Err(BenefiaError::validation("name.fi is required"));
            }
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Err(BenefiaError::validation("description is required"));
            }
        }
        if let Some(value) = &self.value {
            if value.amount <= 0.0 {
                return Err(BenefiaError::validation("value.amount must be positive"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateBenefit {
        CreateBenefit {
            kind: BenefitKind::Standard,
            name: LocalizedString::finnish("Lounasetu"),
            description: "Lounasetu kaikille".into(),
            category: BenefitCategory::Lunch,
            value: BenefitValue::new(12.0, ValueUnit::Day),
            status: BenefitStatus::Active,
            valid_from: Utc::now().date_naive(),
            valid_to: None,
            icon: None,
            external_link: None,
            target_groups: vec![],
        }
    }

    #[test]
    fn annualizes_per_unit() {
        assert_eq!(BenefitValue::new(10.0, ValueUnit::Day).annual_value(), 2200.0);
        assert_eq!(BenefitValue::new(50.0, ValueUnit::Month).annual_value(), 600.0);
        assert_eq!(BenefitValue::new(400.0, ValueUnit::Year).annual_value(), 400.0);
        // One-time counts once at face value.
        assert_eq!(
            BenefitValue::new(400.0, ValueUnit::OneTime).annual_value(),
            400.0
        );
    }

    #[test]
    fn valid_input_passes() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_amount() {
        let mut input = create_input();
        input.value.amount = 0.0;
        assert!(matches!(
            input.validate(),
            Err(BenefiaError::Validation { .. })
        ));
    }

    #[test]
    fn rejects_missing_finnish_name() {
        let mut input = create_input();
        input.name.fi = "  ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_validates_only_provided_fields() {
        assert!(UpdateBenefit::default().validate().is_ok());
        let update = UpdateBenefit {
            value: Some(BenefitValue::new(-5.0, ValueUnit::Month)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
