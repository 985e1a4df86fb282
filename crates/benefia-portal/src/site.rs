//! Customer-site view state.
//!
//! The customer site is a tabbed layout over the dossier's sections,
//! two of which are internal-only. The view owns the acting user's type
//! and resolved permissions; switching the type re-resolves permissions
//! and, if the active section just became invisible, resets to the
//! first section so the view never points at a hidden or out-of-range
//! pane.

use benefia_core::models::customer::Customer;
use benefia_core::models::permissions::{UserPermissions, UserType, Visibility};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Collaboration,
    ServicesProducts,
    Billing,
    Payroll,
    Accounting,
    Schedule,
    Stakeholders,
    Links,
    Guidelines,
    WorkInstructions,
}

/// One tab of the customer site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub internal: bool,
}

impl Visibility for Section {
    fn visible_to(&self, permissions: &UserPermissions) -> bool {
        !self.internal || permissions.can_view_internal_sections
    }
}

/// Tab registry, in display order.
pub static SECTIONS: [Section; 10] = [
    Section {
        id: SectionId::Collaboration,
        label: "Yhteistyö",
        internal: false,
    },
    Section {
        id: SectionId::ServicesProducts,
        label: "Palvelut",
        internal: false,
    },
    Section {
        id: SectionId::Billing,
        label: "Laskutus",
        internal: false,
    },
    Section {
        id: SectionId::Payroll,
        label: "Palkanlaskenta",
        internal: false,
    },
    Section {
        id: SectionId::Accounting,
        label: "Kirjanpito",
        internal: false,
    },
    Section {
        id: SectionId::Schedule,
        label: "Aikataulu",
        internal: false,
    },
    Section {
        id: SectionId::Stakeholders,
        label: "Sidosryhmät",
        internal: false,
    },
    Section {
        id: SectionId::Links,
        label: "Linkit",
        internal: false,
    },
    Section {
        id: SectionId::Guidelines,
        label: "Ohjeistukset",
        internal: true,
    },
    Section {
        id: SectionId::WorkInstructions,
        label: "Työohjeet",
        internal: true,
    },
];

/// View state for the customer site.
#[derive(Debug, Clone)]
pub struct CustomerSiteView {
    user_type: UserType,
    permissions: UserPermissions,
    active: usize,
}

impl CustomerSiteView {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            permissions: UserPermissions::resolve(user_type),
            active: 0,
        }
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn permissions(&self) -> &UserPermissions {
        &self.permissions
    }

    /// Index of the active section within [`SECTIONS`].
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_section(&self) -> &'static Section {
        &SECTIONS[self.active]
    }

    /// Sections the current user may see, in display order.
    pub fn visible_sections(&self) -> Vec<&'static Section> {
        SECTIONS
            .iter()
            .filter(|s| s.visible_to(&self.permissions))
            .collect()
    }

    /// Activate a section by registry index. Hidden or out-of-range
    /// targets are rejected and the current section stays active.
    pub fn select_section(&mut self, index: usize) -> bool {
        match SECTIONS.get(index) {
            Some(section) if section.visible_to(&self.permissions) => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Switch the acting user's type, re-resolving permissions.
    ///
    /// If the previously active section is no longer visible under the
    /// new permission set, the view resets to the first section.
    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
        self.permissions = UserPermissions::resolve(user_type);
        if !SECTIONS[self.active].visible_to(&self.permissions) {
            debug!(index = self.active, "active section hidden by role switch, resetting");
            self.active = 0;
        }
    }

    /// The dossier as the current user is allowed to see it.
    pub fn dossier(&self, customer: &Customer) -> Customer {
        customer.redacted(&self.permissions)
    }
}
