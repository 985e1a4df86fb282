//! Domain models for Benefia.
//!
//! These are the core types shared across all crates.

pub mod benefit;
pub mod customer;
pub mod discount;
pub mod group;
pub mod permissions;
pub mod selection;
