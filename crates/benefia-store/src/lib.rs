//! Benefia Store — in-memory repositories and seed data.
//!
//! This crate provides:
//! - The shared in-process container ([`Store`])
//! - Repository implementations for the `benefia-core` traits
//! - The seed fixture that initializes a session ([`Store::seeded`])
//! - Error types ([`StoreError`])
//!
//! There is deliberately no persistence: every mutation lives only as
//! long as the store, and dropping it discards the session.

mod error;
pub mod seed;
mod store;

pub use error::StoreError;
pub use store::{
    MemBenefitRepository, MemCustomerRepository, MemDiscountCodeRepository,
    MemOptionalGroupRepository, MemSelectionRepository, Store,
};
