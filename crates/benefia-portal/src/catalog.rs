//! Catalog filtering and admin CRUD.
//!
//! Filtering is a pure predicate over in-memory slices: search matches a
//! case-insensitive substring of the localized names and description,
//! category and status are exact matches, `None` means "all". The three
//! predicates are AND-combined and input order is preserved.

use benefia_core::models::benefit::{
    Benefit, BenefitCategory, BenefitStatus, CreateBenefit, UpdateBenefit,
};
use benefia_core::models::discount::{CreateDiscountCode, DiscountCode, UpdateDiscountCode};
use benefia_core::models::group::{
    CreateOptionalBenefitGroup, OptionalBenefitGroup, UpdateOptionalBenefitGroup,
};
use benefia_core::repository::{
    BenefitRepository, DiscountCodeRepository, OptionalGroupRepository,
};
use benefia_core::{BenefiaResult, LocalizedString};
use tracing::info;
use uuid::Uuid;

/// Filter criteria for the benefit catalog. `Default` is "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenefitFilter {
    pub search: String,
    pub category: Option<BenefitCategory>,
    pub status: Option<BenefitStatus>,
}

impl BenefitFilter {
    /// Whether any predicate is active. An empty result under an
    /// inactive filter means the catalog itself is empty, which the UI
    /// messages differently from "nothing matched".
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.status.is_some()
    }

    fn matches(&self, benefit: &Benefit) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = benefit.name.fi.to_lowercase().contains(&needle)
                || benefit.name.en.to_lowercase().contains(&needle)
                || benefit.name.sv.to_lowercase().contains(&needle)
                || benefit.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(category) = self.category {
            if benefit.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if benefit.status != status {
                return false;
            }
        }
        true
    }
}

/// Filter a catalog slice. Output is always a subset of the input, in
/// input order; an empty result is valid.
pub fn filter_benefits<'a>(catalog: &'a [Benefit], filter: &BenefitFilter) -> Vec<&'a Benefit> {
    catalog.iter().filter(|b| filter.matches(b)).collect()
}

/// Case-insensitive substring search over discount codes: partner name,
/// description, and category tags.
pub fn filter_discount_codes<'a>(
    codes: &'a [DiscountCode],
    search: &str,
) -> Vec<&'a DiscountCode> {
    if search.is_empty() {
        return codes.iter().collect();
    }
    let needle = search.to_lowercase();
    codes
        .iter()
        .filter(|c| {
            c.partner_name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
                || c.categories.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Admin-side catalog management for benefits, optional benefit groups,
/// and discount codes. Validation failures surface as
/// [`BenefiaError::Validation`](benefia_core::BenefiaError::Validation),
/// which the UI renders as a disabled confirm action.
pub struct CatalogService<B, G, D> {
    benefits: B,
    groups: G,
    discounts: D,
}

impl<B, G, D> CatalogService<B, G, D>
where
    B: BenefitRepository,
    G: OptionalGroupRepository,
    D: DiscountCodeRepository,
{
    pub fn new(benefits: B, groups: G, discounts: D) -> Self {
        Self {
            benefits,
            groups,
            discounts,
        }
    }

    // --- Benefits ---

    pub fn create_benefit(&self, input: CreateBenefit) -> BenefiaResult<Benefit> {
        let benefit = self.benefits.create(input)?;
        info!(id = %benefit.id, "benefit created");
        Ok(benefit)
    }

    pub fn update_benefit(&self, id: Uuid, input: UpdateBenefit) -> BenefiaResult<Benefit> {
        self.benefits.update(id, input)
    }

    pub fn delete_benefit(&self, id: Uuid) -> BenefiaResult<()> {
        self.benefits.delete(id)
    }

    /// Copy a benefit: fresh id, Finnish name suffixed " (kopio)", and
    /// status reset to draft so the copy never goes live unreviewed.
    pub fn duplicate_benefit(&self, id: Uuid) -> BenefiaResult<Benefit> {
        let source = self.benefits.get_by_id(id)?;
        let input = CreateBenefit {
            kind: source.kind,
            name: LocalizedString {
                fi: format!("{} (kopio)", source.name.fi),
                en: source.name.en,
                sv: source.name.sv,
            },
            description: source.description,
            category: source.category,
            value: source.value,
            status: BenefitStatus::Draft,
            valid_from: source.valid_from,
            valid_to: source.valid_to,
            icon: source.icon,
            external_link: source.external_link,
            target_groups: source.target_groups,
        };
        self.benefits.create(input)
    }

    /// Set status Archived on every listed benefit. Ids that resolve to
    /// nothing are skipped; returns the number archived.
    pub fn archive_benefits(&self, ids: &[Uuid]) -> BenefiaResult<usize> {
        let mut archived = 0;
        for &id in ids {
            let update = UpdateBenefit {
                status: Some(BenefitStatus::Archived),
                ..Default::default()
            };
            match self.benefits.update(id, update) {
                Ok(_) => archived += 1,
                Err(benefia_core::BenefiaError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        info!(count = archived, "benefits archived");
        Ok(archived)
    }

    pub fn list_benefits(&self) -> BenefiaResult<Vec<Benefit>> {
        self.benefits.list()
    }

    pub fn find_benefits(&self, filter: &BenefitFilter) -> BenefiaResult<Vec<Benefit>> {
        let catalog = self.benefits.list()?;
        Ok(filter_benefits(&catalog, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    // --- Optional benefit groups ---

    pub fn create_group(
        &self,
        input: CreateOptionalBenefitGroup,
    ) -> BenefiaResult<OptionalBenefitGroup> {
        self.groups.create(input)
    }

    pub fn update_group(
        &self,
        id: Uuid,
        input: UpdateOptionalBenefitGroup,
    ) -> BenefiaResult<OptionalBenefitGroup> {
        self.groups.update(id, input)
    }

    pub fn delete_group(&self, id: Uuid) -> BenefiaResult<()> {
        self.groups.delete(id)
    }

    pub fn list_groups(&self) -> BenefiaResult<Vec<OptionalBenefitGroup>> {
        self.groups.list()
    }

    // --- Discount codes ---

    pub fn create_discount_code(&self, input: CreateDiscountCode) -> BenefiaResult<DiscountCode> {
        self.discounts.create(input)
    }

    pub fn update_discount_code(
        &self,
        id: Uuid,
        input: UpdateDiscountCode,
    ) -> BenefiaResult<DiscountCode> {
        self.discounts.update(id, input)
    }

    pub fn delete_discount_code(&self, id: Uuid) -> BenefiaResult<()> {
        self.discounts.delete(id)
    }

    pub fn list_discount_codes(&self) -> BenefiaResult<Vec<DiscountCode>> {
        self.discounts.list()
    }
}
