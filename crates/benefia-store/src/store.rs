//! In-memory store and repository implementations.
//!
//! [`Store`] is a cheap-clone handle over shared state. Each repository
//! borrows a handle, mirroring the one-writer-per-update-tick model of
//! the portal: handlers run to completion, so no two mutations
//! interleave. The lock exists only so a handle can be shared freely.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use benefia_core::models::benefit::{Benefit, CreateBenefit, UpdateBenefit};
use benefia_core::models::customer::Customer;
use benefia_core::models::discount::{CreateDiscountCode, DiscountCode, UpdateDiscountCode};
use benefia_core::models::group::{
    CreateOptionalBenefitGroup, OptionalBenefitGroup, UpdateOptionalBenefitGroup,
};
use benefia_core::models::selection::BenefitSelection;
use benefia_core::repository::{
    BenefitRepository, CustomerRepository, DiscountCodeRepository, OptionalGroupRepository,
    SelectionRepository,
};
use benefia_core::BenefiaResult;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Default)]
struct State {
    benefits: Vec<Benefit>,
    groups: Vec<OptionalBenefitGroup>,
    discount_codes: Vec<DiscountCode>,
    selections: Vec<BenefitSelection>,
    customers: Vec<Customer>,
}

/// Shared in-memory container owning all catalogs and the dossier set.
///
/// Cloning is cheap (an `Arc` bump); every clone addresses the same
/// state. Tests construct an isolated store per case — there is no
/// global instance anywhere.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<State>>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from pre-built collections; used by seeding.
    pub(crate) fn from_parts(
        benefits: Vec<Benefit>,
        groups: Vec<OptionalBenefitGroup>,
        discount_codes: Vec<DiscountCode>,
        selections: Vec<BenefitSelection>,
        customers: Vec<Customer>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(State {
                benefits,
                groups,
                discount_codes,
                selections,
                customers,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Lock)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Lock)
    }
}

// -----------------------------------------------------------------------
// Benefits
// -----------------------------------------------------------------------

#[derive(Clone)]
pub struct MemBenefitRepository {
    store: Store,
}

impl MemBenefitRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl BenefitRepository for MemBenefitRepository {
    fn create(&self, input: CreateBenefit) -> BenefiaResult<Benefit> {
        input.validate()?;
        let now = Utc::now();
        let benefit = Benefit {
            id: Uuid::new_v4(),
            kind: input.kind,
            name: input.name,
            description: input.description,
            category: input.category,
            value: input.value,
            status: input.status,
            valid_from: input.valid_from,
            valid_to: input.valid_to,
            icon: input.icon,
            external_link: input.external_link,
            target_groups: input.target_groups,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %benefit.id, name = %benefit.name.fi, "creating benefit");
        self.store.write()?.benefits.push(benefit.clone());
        Ok(benefit)
    }

    fn get_by_id(&self, id: Uuid) -> BenefiaResult<Benefit> {
        self.store
            .read()?
            .benefits
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "Benefit",
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn update(&self, id: Uuid, input: UpdateBenefit) -> BenefiaResult<Benefit> {
        input.validate()?;
        let mut state = self.store.write()?;
        let benefit = state
            .benefits
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound {
                entity: "Benefit",
                id: id.to_string(),
            })?;
        if let Some(name) = input.name {
            benefit.name = name;
        }
        if let Some(description) = input.description {
            benefit.description = description;
        }
        if let Some(category) = input.category {
            benefit.category = category;
        }
        if let Some(value) = input.value {
            benefit.value = value;
        }
        if let Some(status) = input.status {
            benefit.status = status;
        }
        if let Some(valid_from) = input.valid_from {
            benefit.valid_from = valid_from;
        }
        if let Some(valid_to) = input.valid_to {
            benefit.valid_to = valid_to;
        }
        if let Some(icon) = input.icon {
            benefit.icon = icon;
        }
        if let Some(external_link) = input.external_link {
            benefit.external_link = external_link;
        }
        if let Some(target_groups) = input.target_groups {
            benefit.target_groups = target_groups;
        }
        benefit.updated_at = Utc::now();
        Ok(benefit.clone())
    }

    fn delete(&self, id: Uuid) -> BenefiaResult<()> {
        let mut state = self.store.write()?;
        let before = state.benefits.len();
        state.benefits.retain(|b| b.id != id);
        if state.benefits.len() == before {
            return Err(StoreError::NotFound {
                entity: "Benefit",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn list(&self) -> BenefiaResult<Vec<Benefit>> {
        Ok(self.store.read()?.benefits.clone())
    }
}

// -----------------------------------------------------------------------
// Optional benefit groups
// -----------------------------------------------------------------------

#[derive(Clone)]
pub struct MemOptionalGroupRepository {
    store: Store,
}

impl MemOptionalGroupRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl OptionalGroupRepository for MemOptionalGroupRepository {
    fn create(&self, input: CreateOptionalBenefitGroup) -> BenefiaResult<OptionalBenefitGroup> {
        input.validate()?;
        let now = Utc::now();
        let group = OptionalBenefitGroup {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            options: input.options,
            selection_period: input.selection_period,
            change_restrictions: input.change_restrictions,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %group.id, name = %group.name.fi, "creating optional benefit group");
        self.store.write()?.groups.push(group.clone());
        Ok(group)
    }

    fn get_by_id(&self, id: Uuid) -> BenefiaResult<OptionalBenefitGroup> {
        self.store
            .read()?
            .groups
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "OptionalBenefitGroup",
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn update(
        &self,
        id: Uuid,
        input: UpdateOptionalBenefitGroup,
    ) -> BenefiaResult<OptionalBenefitGroup> {
        input.validate()?;
        let mut state = self.store.write()?;
        let group = state
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::NotFound {
                entity: "OptionalBenefitGroup",
                id: id.to_string(),
            })?;
        if let Some(name) = input.name {
            group.name = name;
        }
        if let Some(description) = input.description {
            group.description = description;
        }
        if let Some(options) = input.options {
            group.options = options;
        }
        if let Some(selection_period) = input.selection_period {
            group.selection_period = selection_period;
        }
        if let Some(change_restrictions) = input.change_restrictions {
            group.change_restrictions = change_restrictions;
        }
        group.updated_at = Utc::now();
        Ok(group.clone())
    }

    fn delete(&self, id: Uuid) -> BenefiaResult<()> {
        let mut state = self.store.write()?;
        let before = state.groups.len();
        state.groups.retain(|g| g.id != id);
        if state.groups.len() == before {
            return Err(StoreError::NotFound {
                entity: "OptionalBenefitGroup",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn list(&self) -> BenefiaResult<Vec<OptionalBenefitGroup>> {
        Ok(self.store.read()?.groups.clone())
    }
}

// -----------------------------------------------------------------------
// Discount codes
// -----------------------------------------------------------------------

#[derive(Clone)]
pub struct MemDiscountCodeRepository {
    store: Store,
}

impl MemDiscountCodeRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl DiscountCodeRepository for MemDiscountCodeRepository {
    fn create(&self, input: CreateDiscountCode) -> BenefiaResult<DiscountCode> {
        input.validate()?;
        let now = Utc::now();
        let code = DiscountCode {
            id: Uuid::new_v4(),
            partner_name: input.partner_name,
            partner_logo: input.partner_logo,
            description: input.description,
            code: input.code,
            discount_amount: input.discount_amount,
            categories: input.categories,
            valid_from: input.valid_from,
            valid_to: input.valid_to,
            partner_url: input.partner_url,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %code.id, partner = %code.partner_name, "creating discount code");
        self.store.write()?.discount_codes.push(code.clone());
        Ok(code)
    }

    fn get_by_id(&self, id: Uuid) -> BenefiaResult<DiscountCode> {
        self.store
            .read()?
            .discount_codes
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "DiscountCode",
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn update(&self, id: Uuid, input: UpdateDiscountCode) -> BenefiaResult<DiscountCode> {
        input.validate()?;
        let mut state = self.store.write()?;
        let code = state
            .discount_codes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound {
                entity: "DiscountCode",
                id: id.to_string(),
            })?;
        // Check the merged window before touching any field, so a
        // rejected update leaves the stored code intact.
        let merged_from = input.valid_from.unwrap_or(code.valid_from);
        let merged_to = input.valid_to.unwrap_or(code.valid_to);
        if merged_to < merged_from {
            return Err(benefia_core::BenefiaError::validation(
                "valid_to must not precede valid_from",
            ));
        }
        if let Some(partner_name) = input.partner_name {
            code.partner_name = partner_name;
        }
        if let Some(partner_logo) = input.partner_logo {
            code.partner_logo = partner_logo;
        }
        if let Some(description) = input.description {
            code.description = description;
        }
        if let Some(redemption_code) = input.code {
            code.code = redemption_code;
        }
        if let Some(discount_amount) = input.discount_amount {
            code.discount_amount = discount_amount;
        }
        if let Some(categories) = input.categories {
            code.categories = categories;
        }
        if let Some(valid_from) = input.valid_from {
            code.valid_from = valid_from;
        }
        if let Some(valid_to) = input.valid_to {
            code.valid_to = valid_to;
        }
        if let Some(partner_url) = input.partner_url {
            code.partner_url = partner_url;
        }
        code.updated_at = Utc::now();
        Ok(code.clone())
    }

    fn delete(&self, id: Uuid) -> BenefiaResult<()> {
        let mut state = self.store.write()?;
        let before = state.discount_codes.len();
        state.discount_codes.retain(|c| c.id != id);
        if state.discount_codes.len() == before {
            return Err(StoreError::NotFound {
                entity: "DiscountCode",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn list(&self) -> BenefiaResult<Vec<DiscountCode>> {
        Ok(self.store.read()?.discount_codes.clone())
    }
}

// -----------------------------------------------------------------------
// Selections
// -----------------------------------------------------------------------

#[derive(Clone)]
pub struct MemSelectionRepository {
    store: Store,
}

impl MemSelectionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl SelectionRepository for MemSelectionRepository {
    fn replace(&self, selection: BenefitSelection) -> BenefiaResult<BenefitSelection> {
        let mut state = self.store.write()?;
        // Full replace, not a merge: discard the prior tuple for this
        // (employee, group) before appending.
        state.selections.retain(|s| {
            !(s.employee_id == selection.employee_id && s.group_id == selection.group_id)
        });
        state.selections.push(selection.clone());
        Ok(selection)
    }

    fn current(
        &self,
        employee_id: Uuid,
        group_id: Uuid,
    ) -> BenefiaResult<Option<BenefitSelection>> {
        Ok(self
            .store
            .read()?
            .selections
            .iter()
            .find(|s| s.employee_id == employee_id && s.group_id == group_id)
            .cloned())
    }

    fn list_for_employee(&self, employee_id: Uuid) -> BenefiaResult<Vec<BenefitSelection>> {
        Ok(self
            .store
            .read()?
            .selections
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn list_for_group(&self, group_id: Uuid) -> BenefiaResult<Vec<BenefitSelection>> {
        Ok(self
            .store
            .read()?
            .selections
            .iter()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect())
    }
}

// -----------------------------------------------------------------------
// Customers
// -----------------------------------------------------------------------

#[derive(Clone)]
pub struct MemCustomerRepository {
    store: Store,
}

impl MemCustomerRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl CustomerRepository for MemCustomerRepository {
    fn get_by_id(&self, id: Uuid) -> BenefiaResult<Customer> {
        self.store
            .read()?
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "Customer",
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> BenefiaResult<Vec<Customer>> {
        Ok(self.store.read()?.customers.clone())
    }

    fn save(&self, customer: Customer) -> BenefiaResult<Customer> {
        let mut state = self.store.write()?;
        match state.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => state.customers.push(customer.clone()),
        }
        Ok(customer)
    }
}
