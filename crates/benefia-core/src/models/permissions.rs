//! The two-tier permission model.
//!
//! Users are either internal staff (platform-operator employees) or
//! external customer users. Each type resolves to a fixed capability
//! record; content flagged internal-only must never be rendered for a
//! user whose record lacks `can_view_internal_sections`.

use serde::{Deserialize, Serialize};

/// The acting user's type. Closed two-value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Staff,
    Customer,
}

/// Flat capability record resolved from a [`UserType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermissions {
    pub is_staff: bool,
    pub can_edit_contacts: bool,
    pub can_edit_stakeholders: bool,
    pub can_edit_local_agreements: bool,
    pub can_edit_accruals: bool,
    pub can_edit_bank_account: bool,
    pub can_view_internal_sections: bool,
}

impl UserPermissions {
    /// Resolve the fixed capability record for a user type.
    ///
    /// Total over the closed domain; no error conditions. Purely
    /// advisory data consumed by rendering logic — re-resolve whenever
    /// the acting user's type changes.
    pub const fn resolve(user_type: UserType) -> Self {
        match user_type {
            UserType::Staff => Self {
                is_staff: true,
                can_edit_contacts: true,
                can_edit_stakeholders: true,
                can_edit_local_agreements: true,
                can_edit_accruals: true,
                can_edit_bank_account: true,
                can_view_internal_sections: true,
            },
            UserType::Customer => Self {
                is_staff: false,
                can_edit_contacts: true,
                can_edit_stakeholders: true,
                can_edit_local_agreements: true,
                can_edit_accruals: true,
                can_edit_bank_account: true,
                can_view_internal_sections: false,
            },
        }
    }
}

/// Uniform visibility predicate for permission-gated content.
///
/// Implemented by every item that can carry an internal-only flag, so
/// the gating rule lives in one place instead of being scattered across
/// rendering code.
pub trait Visibility {
    fn visible_to(&self, permissions: &UserPermissions) -> bool;
}
