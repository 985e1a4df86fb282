//! Permission-checked dossier editing.
//!
//! The dossier itself has no create/delete lifecycle; only its editable
//! sub-collections change. Every mutation checks the corresponding
//! capability from the acting user's [`UserPermissions`] and the
//! per-record editability flag, then replaces the whole dossier in the
//! store.

use benefia_core::models::customer::{
    AccrualSetting, BankAccount, Contact, Customer, LocalAgreement, Stakeholder,
};
use benefia_core::models::permissions::UserPermissions;
use benefia_core::repository::CustomerRepository;
use benefia_core::{BenefiaError, BenefiaResult};
use tracing::info;
use uuid::Uuid;

pub struct DossierService<C> {
    customers: C,
}

impl<C: CustomerRepository> DossierService<C> {
    pub fn new(customers: C) -> Self {
        Self { customers }
    }

    pub fn get(&self, customer_id: Uuid) -> BenefiaResult<Customer> {
        self.customers.get_by_id(customer_id)
    }

    /// The dossier redacted for the acting user.
    pub fn get_redacted(
        &self,
        customer_id: Uuid,
        permissions: &UserPermissions,
    ) -> BenefiaResult<Customer> {
        Ok(self.customers.get_by_id(customer_id)?.redacted(permissions))
    }

    pub fn list(&self) -> BenefiaResult<Vec<Customer>> {
        self.customers.list()
    }

    /// Replace a contact by id.
    pub fn update_contact(
        &self,
        permissions: &UserPermissions,
        customer_id: Uuid,
        contact: Contact,
    ) -> BenefiaResult<Customer> {
        if !permissions.can_edit_contacts {
            return Err(denied("contacts"));
        }
        let mut customer = self.customers.get_by_id(customer_id)?;
        let existing = customer
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| not_found("Contact", contact.id))?;
        if !existing.is_editable {
            return Err(denied("this contact is read-only"));
        }
        *existing = contact;
        info!(customer = %customer_id, "contact updated");
        self.customers.save(customer)
    }

    /// Replace a stakeholder by id.
    pub fn update_stakeholder(
        &self,
        permissions: &UserPermissions,
        customer_id: Uuid,
        stakeholder: Stakeholder,
    ) -> BenefiaResult<Customer> {
        if !permissions.can_edit_stakeholders {
            return Err(denied("stakeholders"));
        }
        let mut customer = self.customers.get_by_id(customer_id)?;
        let existing = customer
            .stakeholders
            .iter_mut()
            .find(|s| s.id == stakeholder.id)
            .ok_or_else(|| not_found("Stakeholder", stakeholder.id))?;
        if !existing.is_editable {
            return Err(denied("this stakeholder is read-only"));
        }
        *existing = stakeholder;
        self.customers.save(customer)
    }

    /// Replace a local agreement by id.
    pub fn update_local_agreement(
        &self,
        permissions: &UserPermissions,
        customer_id: Uuid,
        agreement: LocalAgreement,
    ) -> BenefiaResult<Customer> {
        if !permissions.can_edit_local_agreements {
            return Err(denied("local agreements"));
        }
        let mut customer = self.customers.get_by_id(customer_id)?;
        let existing = customer
            .local_agreements
            .iter_mut()
            .find(|a| a.id == agreement.id)
            .ok_or_else(|| not_found("LocalAgreement", agreement.id))?;
        if !existing.is_editable {
            return Err(denied("this agreement is read-only"));
        }
        *existing = agreement;
        self.customers.save(customer)
    }

    /// Set one accrual percentage. Non-staff users may only touch rows
    /// flagged customer-editable.
    pub fn set_accrual_percentage(
        &self,
        permissions: &UserPermissions,
        customer_id: Uuid,
        accrual_id: Uuid,
        percentage: f64,
    ) -> BenefiaResult<Customer> {
        if !permissions.can_edit_accruals {
            return Err(denied("accruals"));
        }
        if !(0.0..=100.0).contains(&percentage) {
            return Err(BenefiaError::validation(
                "percentage must be between 0 and 100",
            ));
        }
        let mut customer = self.customers.get_by_id(customer_id)?;
        let setting: &mut AccrualSetting = customer
            .accounting
            .accrual_settings
            .iter_mut()
            .find(|a| a.id == accrual_id)
            .ok_or_else(|| not_found("AccrualSetting", accrual_id))?;
        if !permissions.is_staff && !setting.is_customer_editable {
            return Err(denied("this accrual row is staff-managed"));
        }
        setting.percentage = percentage;
        self.customers.save(customer)
    }

    /// Replace the payout bank account.
    pub fn update_bank_account(
        &self,
        permissions: &UserPermissions,
        customer_id: Uuid,
        bank_account: BankAccount,
    ) -> BenefiaResult<Customer> {
        if !permissions.can_edit_bank_account {
            return Err(denied("bank account"));
        }
        let mut customer = self.customers.get_by_id(customer_id)?;
        if !customer.bank_account.is_editable {
            return Err(denied("the bank account is read-only"));
        }
        customer.bank_account = bank_account;
        info!(customer = %customer_id, "bank account updated");
        self.customers.save(customer)
    }
}

fn denied(what: &str) -> BenefiaError {
    BenefiaError::PermissionDenied {
        reason: format!("editing {what} is not allowed for this user"),
    }
}

fn not_found(entity: &str, id: Uuid) -> BenefiaError {
    BenefiaError::NotFound {
        entity: entity.to_string(),
        id: id.to_string(),
    }
}
