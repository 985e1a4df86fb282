//! Employee benefit selection domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee's current choice within an optional benefit group.
///
/// At most one selection exists per (employee, group); replacing a
/// selection for the same group discards the prior tuple entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitSelection {
    pub employee_id: Uuid,
    pub group_id: Uuid,
    pub selected_option_id: Uuid,
    pub selected_at: DateTime<Utc>,
}
