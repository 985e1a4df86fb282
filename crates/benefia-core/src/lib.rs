//! Benefia Core — domain models shared across all crates.
//!
//! This crate defines:
//! - The benefit catalog model (standard/optional benefits, discount
//!   codes, selection groups) and the customer dossier aggregate
//! - The two-tier permission model and the visibility predicate
//! - Localized strings with a defined fallback order
//! - Repository trait definitions ([`repository`])
//! - Error types ([`BenefiaError`], [`BenefiaResult`])

pub mod error;
pub mod locale;
pub mod models;
pub mod repository;

pub use error::{BenefiaError, BenefiaResult};
pub use locale::{Locale, LocalizedString};
