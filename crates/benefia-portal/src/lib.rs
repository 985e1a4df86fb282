//! Benefia Portal — the service layer behind the portal's views.
//!
//! Services are generic over the `benefia-core` repository traits so
//! they have no dependency on a concrete store. This crate provides:
//! - Catalog filtering and admin CRUD ([`CatalogService`], [`BenefitFilter`])
//! - Optional-benefit selection ([`SelectionService`])
//! - Analytics aggregation ([`analytics`])
//! - Discount-code clipboard hand-off ([`clipboard`])
//! - The permission-driven customer-site view state ([`CustomerSiteView`])
//! - Permission-checked dossier editing ([`DossierService`])

pub mod analytics;
pub mod catalog;
pub mod clipboard;
pub mod dossier;
pub mod selection;
pub mod site;

pub use analytics::{monthly_trend, BenefitAnalytics, MonthlyTrendPoint};
pub use catalog::{filter_benefits, filter_discount_codes, BenefitFilter, CatalogService};
pub use clipboard::{copy_discount_code, Clipboard, ClipboardError, MemoryClipboard};
pub use dossier::DossierService;
pub use selection::{availability, SelectOutcome, SelectionAvailability, SelectionService};
pub use site::{CustomerSiteView, Section, SectionId, SECTIONS};
