//! Repository trait definitions for data access abstraction.
//!
//! All operations are synchronous: every interaction runs to completion
//! within one handler, and the backing store is in-process. Service
//! crates stay generic over these traits so tests can swap in isolated
//! stores per case.

use uuid::Uuid;

use crate::error::BenefiaResult;
use crate::models::{
    benefit::{Benefit, CreateBenefit, UpdateBenefit},
    customer::Customer,
    discount::{CreateDiscountCode, DiscountCode, UpdateDiscountCode},
    group::{CreateOptionalBenefitGroup, OptionalBenefitGroup, UpdateOptionalBenefitGroup},
    selection::BenefitSelection,
};

pub trait BenefitRepository {
    fn create(&self, input: CreateBenefit) -> BenefiaResult<Benefit>;
    fn get_by_id(&self, id: Uuid) -> BenefiaResult<Benefit>;
    fn update(&self, id: Uuid, input: UpdateBenefit) -> BenefiaResult<Benefit>;
    fn delete(&self, id: Uuid) -> BenefiaResult<()>;
    /// List in insertion order; callers filter with pure predicates.
    fn list(&self) -> BenefiaResult<Vec<Benefit>>;
}

pub trait OptionalGroupRepository {
    fn create(&self, input: CreateOptionalBenefitGroup) -> BenefiaResult<OptionalBenefitGroup>;
    fn get_by_id(&self, id: Uuid) -> BenefiaResult<OptionalBenefitGroup>;
    fn update(
        &self,
        id: Uuid,
        input: UpdateOptionalBenefitGroup,
    ) -> BenefiaResult<OptionalBenefitGroup>;
    fn delete(&self, id: Uuid) -> BenefiaResult<()>;
    fn list(&self) -> BenefiaResult<Vec<OptionalBenefitGroup>>;
}

pub trait DiscountCodeRepository {
    fn create(&self, input: CreateDiscountCode) -> BenefiaResult<DiscountCode>;
    fn get_by_id(&self, id: Uuid) -> BenefiaResult<DiscountCode>;
    fn update(&self, id: Uuid, input: UpdateDiscountCode) -> BenefiaResult<DiscountCode>;
    fn delete(&self, id: Uuid) -> BenefiaResult<()>;
    fn list(&self) -> BenefiaResult<Vec<DiscountCode>>;
}

pub trait SelectionRepository {
    /// Replace the employee's selection for the tuple's group: any prior
    /// selection with the same (employee, group) is discarded first.
    fn replace(&self, selection: BenefitSelection) -> BenefiaResult<BenefitSelection>;
    fn current(
        &self,
        employee_id: Uuid,
        group_id: Uuid,
    ) -> BenefiaResult<Option<BenefitSelection>>;
    fn list_for_employee(&self, employee_id: Uuid) -> BenefiaResult<Vec<BenefitSelection>>;
    fn list_for_group(&self, group_id: Uuid) -> BenefiaResult<Vec<BenefitSelection>>;
}

pub trait CustomerRepository {
    fn get_by_id(&self, id: Uuid) -> BenefiaResult<Customer>;
    fn list(&self) -> BenefiaResult<Vec<Customer>>;
    /// Whole-dossier replace; sub-collection edits go through this.
    fn save(&self, customer: Customer) -> BenefiaResult<Customer>;
}
