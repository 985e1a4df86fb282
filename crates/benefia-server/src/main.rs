//! Benefia Server — application entry point.
//!
//! Seeds the in-memory store and logs a session summary. The rendered
//! UI sits on top of the portal services; this binary is the
//! composition root that wires them together.

use benefia_core::models::permissions::UserType;
use benefia_core::repository::SelectionRepository;
use benefia_core::BenefiaResult;
use benefia_portal::{BenefitAnalytics, CatalogService, CustomerSiteView, DossierService};
use benefia_store::{
    seed, MemBenefitRepository, MemCustomerRepository, MemDiscountCodeRepository,
    MemOptionalGroupRepository, MemSelectionRepository, Store,
};
use tracing_subscriber::EnvFilter;

fn main() -> BenefiaResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("benefia=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Benefia portal...");

    let store = Store::seeded();
    let catalog = CatalogService::new(
        MemBenefitRepository::new(store.clone()),
        MemOptionalGroupRepository::new(store.clone()),
        MemDiscountCodeRepository::new(store.clone()),
    );
    let dossiers = DossierService::new(MemCustomerRepository::new(store.clone()));
    let selections = MemSelectionRepository::new(store);

    let benefits = catalog.list_benefits()?;
    let groups = catalog.list_groups()?;
    let employee_selections = selections.list_for_employee(seed::DEMO_EMPLOYEE_ID)?;
    let customer = dossiers.get(seed::DEMO_CUSTOMER_ID)?;

    let analytics = BenefitAnalytics::compute(
        &benefits,
        &groups,
        &employee_selections,
        &customer.service_requests,
        customer.employee_count,
    );
    tracing::info!(
        benefits = benefits.len(),
        groups = groups.len(),
        discount_codes = catalog.list_discount_codes()?.len(),
        total_annual_cost = analytics.total_annual_cost,
        trend_months = analytics.monthly_trend.len(),
        "catalog seeded"
    );

    let staff_view = CustomerSiteView::new(UserType::Staff);
    let customer_view = CustomerSiteView::new(UserType::Customer);
    tracing::info!(
        customer = %customer.name,
        staff_sections = staff_view.visible_sections().len(),
        customer_sections = customer_view.visible_sections().len(),
        "customer site ready"
    );

    Ok(())
}
