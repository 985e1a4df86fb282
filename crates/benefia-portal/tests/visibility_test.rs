//! Integration tests for permission-gated visibility and dossier
//! editing over the seeded dossier.

use benefia_core::models::permissions::{UserPermissions, UserType};
use benefia_core::repository::CustomerRepository;
use benefia_core::BenefiaError;
use benefia_portal::{CustomerSiteView, DossierService};
use benefia_store::{seed, MemCustomerRepository, Store};

fn dossier_service() -> DossierService<MemCustomerRepository> {
    DossierService::new(MemCustomerRepository::new(Store::seeded()))
}

#[test]
fn redacted_dossier_contains_no_internal_records() {
    let service = dossier_service();
    let customer = UserPermissions::resolve(UserType::Customer);
    let dossier = service
        .get_redacted(seed::DEMO_CUSTOMER_ID, &customer)
        .unwrap();

    assert!(dossier.specialists.iter().all(|s| !s.is_internal_only));
    assert!(dossier.quick_links.iter().all(|l| !l.is_internal_only));
    assert!(dossier.billing.internal_instructions.is_none());
    assert!(dossier.work_instructions.is_empty());
}

#[test]
fn staff_dossier_is_unredacted() {
    let service = dossier_service();
    let staff = UserPermissions::resolve(UserType::Staff);
    let dossier = service.get_redacted(seed::DEMO_CUSTOMER_ID, &staff).unwrap();

    assert!(dossier.specialists.iter().any(|s| s.is_internal_only));
    assert!(dossier.quick_links.iter().any(|l| l.is_internal_only));
    assert!(dossier.billing.internal_instructions.is_some());
    assert!(!dossier.work_instructions.is_empty());
}

#[test]
fn redaction_leaves_shared_records_intact() {
    let repo = MemCustomerRepository::new(Store::seeded());
    let full = repo.get_by_id(seed::DEMO_CUSTOMER_ID).unwrap();
    let redacted = full.redacted(&UserPermissions::resolve(UserType::Customer));

    assert_eq!(redacted.contacts, full.contacts);
    assert_eq!(redacted.stakeholders, full.stakeholders);
    assert_eq!(
        redacted.specialists.len(),
        full.specialists
            .iter()
            .filter(|s| !s.is_internal_only)
            .count()
    );
}

#[test]
fn site_view_serves_redacted_dossier_after_demotion() {
    let repo = MemCustomerRepository::new(Store::seeded());
    let customer = repo.get_by_id(seed::DEMO_CUSTOMER_ID).unwrap();

    let mut view = CustomerSiteView::new(UserType::Staff);
    assert!(!view.dossier(&customer).work_instructions.is_empty());

    view.set_user_type(UserType::Customer);
    assert!(view.dossier(&customer).work_instructions.is_empty());
}

#[test]
fn contact_update_respects_capability_and_editability() {
    let service = dossier_service();
    let staff = UserPermissions::resolve(UserType::Staff);
    let customer = service.get(seed::DEMO_CUSTOMER_ID).unwrap();

    let mut contact = customer.contacts[0].clone();
    contact.phone = Some("+358 40 999 0000".into());
    let updated = service
        .update_contact(&staff, seed::DEMO_CUSTOMER_ID, contact.clone())
        .unwrap();
    assert_eq!(
        updated.contacts[0].phone.as_deref(),
        Some("+358 40 999 0000")
    );

    // A capability record without the edit right is refused.
    let mut no_edit = staff;
    no_edit.can_edit_contacts = false;
    let err = service
        .update_contact(&no_edit, seed::DEMO_CUSTOMER_ID, contact)
        .unwrap_err();
    assert!(matches!(err, BenefiaError::PermissionDenied { .. }));
}

#[test]
fn customer_user_cannot_edit_staff_managed_accrual() {
    let service = dossier_service();
    let customer_perms = UserPermissions::resolve(UserType::Customer);
    let dossier = service.get(seed::DEMO_CUSTOMER_ID).unwrap();

    let editable = dossier
        .accounting
        .accrual_settings
        .iter()
        .find(|a| a.is_customer_editable)
        .unwrap();
    let staff_managed = dossier
        .accounting
        .accrual_settings
        .iter()
        .find(|a| !a.is_customer_editable)
        .unwrap();

    let updated = service
        .set_accrual_percentage(&customer_perms, seed::DEMO_CUSTOMER_ID, editable.id, 20.0)
        .unwrap();
    let row = updated
        .accounting
        .accrual_settings
        .iter()
        .find(|a| a.id == editable.id)
        .unwrap();
    assert_eq!(row.percentage, 20.0);

    let err = service
        .set_accrual_percentage(
            &customer_perms,
            seed::DEMO_CUSTOMER_ID,
            staff_managed.id,
            30.0,
        )
        .unwrap_err();
    assert!(matches!(err, BenefiaError::PermissionDenied { .. }));
}

#[test]
fn accrual_percentage_is_range_checked() {
    let service = dossier_service();
    let staff = UserPermissions::resolve(UserType::Staff);
    let dossier = service.get(seed::DEMO_CUSTOMER_ID).unwrap();
    let row = &dossier.accounting.accrual_settings[0];

    let err = service
        .set_accrual_percentage(&staff, seed::DEMO_CUSTOMER_ID, row.id, 140.0)
        .unwrap_err();
    assert!(matches!(err, BenefiaError::Validation { .. }));
}

#[test]
fn bank_account_update_requires_capability() {
    let service = dossier_service();
    let staff = UserPermissions::resolve(UserType::Staff);
    let dossier = service.get(seed::DEMO_CUSTOMER_ID).unwrap();

    let mut account = dossier.bank_account.clone();
    account.bank_name = "OP".into();
    let updated = service
        .update_bank_account(&staff, seed::DEMO_CUSTOMER_ID, account.clone())
        .unwrap();
    assert_eq!(updated.bank_account.bank_name, "OP");

    let mut no_edit = staff;
    no_edit.can_edit_bank_account = false;
    assert!(matches!(
        service.update_bank_account(&no_edit, seed::DEMO_CUSTOMER_ID, account),
        Err(BenefiaError::PermissionDenied { .. })
    ));
}
