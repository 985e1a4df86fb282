//! Integration tests for the in-memory repositories.

use benefia_core::models::benefit::{
    BenefitCategory, BenefitKind, BenefitStatus, BenefitValue, CreateBenefit, UpdateBenefit,
    ValueUnit,
};
use benefia_core::models::discount::{CreateDiscountCode, UpdateDiscountCode};
use benefia_core::models::group::{
    CreateOptionalBenefitGroup, SelectionPeriod, UpdateOptionalBenefitGroup,
};
use benefia_core::models::selection::BenefitSelection;
use benefia_core::repository::{
    BenefitRepository, DiscountCodeRepository, OptionalGroupRepository, SelectionRepository,
};
use benefia_core::{BenefiaError, LocalizedString};
use benefia_store::{
    seed, MemBenefitRepository, MemDiscountCodeRepository, MemOptionalGroupRepository,
    MemSelectionRepository, Store,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

fn create_input(name: &str) -> CreateBenefit {
    CreateBenefit {
        kind: BenefitKind::Standard,
        name: LocalizedString::finnish(name),
        description: format!("{name} kuvaus"),
        category: BenefitCategory::Lunch,
        value: BenefitValue::new(12.0, ValueUnit::Day),
        status: BenefitStatus::Active,
        valid_from: Utc::now().date_naive(),
        valid_to: None,
        icon: None,
        external_link: None,
        target_groups: vec![],
    }
}

#[test]
fn create_and_get_benefit() {
    let repo = MemBenefitRepository::new(Store::new());
    let benefit = repo.create(create_input("Lounasetu")).unwrap();

    let fetched = repo.get_by_id(benefit.id).unwrap();
    assert_eq!(fetched.id, benefit.id);
    assert_eq!(fetched.name.fi, "Lounasetu");
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[test]
fn list_preserves_insertion_order() {
    let repo = MemBenefitRepository::new(Store::new());
    for name in ["Eka", "Toka", "Kolmas"] {
        repo.create(create_input(name)).unwrap();
    }
    let names: Vec<String> = repo
        .list()
        .unwrap()
        .into_iter()
        .map(|b| b.name.fi)
        .collect();
    assert_eq!(names, ["Eka", "Toka", "Kolmas"]);
}

#[test]
fn update_bumps_updated_at() {
    let repo = MemBenefitRepository::new(Store::new());
    let benefit = repo.create(create_input("Lounasetu")).unwrap();
    let updated = repo
        .update(
            benefit.id,
            UpdateBenefit {
                description: Some("uusi kuvaus".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.description, "uusi kuvaus");
    assert!(updated.updated_at >= benefit.updated_at);
}

#[test]
fn missing_id_is_not_found() {
    let repo = MemBenefitRepository::new(Store::new());
    assert!(matches!(
        repo.get_by_id(Uuid::new_v4()),
        Err(BenefiaError::NotFound { .. })
    ));
}

#[test]
fn create_validates_input() {
    let repo = MemBenefitRepository::new(Store::new());
    let mut input = create_input("Lounasetu");
    input.value.amount = 0.0;
    assert!(matches!(
        repo.create(input),
        Err(BenefiaError::Validation { .. })
    ));
}

#[test]
fn clones_share_state() {
    let store = Store::new();
    let writer = MemBenefitRepository::new(store.clone());
    let reader = MemBenefitRepository::new(store);
    writer.create(create_input("Lounasetu")).unwrap();
    assert_eq!(reader.list().unwrap().len(), 1);
}

#[test]
fn group_update_enforces_creation_invariants() {
    let repo = MemOptionalGroupRepository::new(Store::new());
    let now = Utc::now();
    let group = repo
        .create(CreateOptionalBenefitGroup {
            name: LocalizedString::finnish("Hyvinvointietu"),
            description: "Valitse yksi.".into(),
            options: vec![],
            selection_period: SelectionPeriod {
                start: now - Duration::days(10),
                end: now + Duration::days(10),
            },
            change_restrictions: String::new(),
        })
        .unwrap();

    // An inverted window is rejected on update, just like on create.
    let err = repo
        .update(
            group.id,
            UpdateOptionalBenefitGroup {
                selection_period: Some(SelectionPeriod {
                    start: now,
                    end: now - Duration::days(30),
                }),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, BenefiaError::Validation { .. }));

    // So is blanking the Finnish name.
    let err = repo
        .update(
            group.id,
            UpdateOptionalBenefitGroup {
                name: Some(LocalizedString::finnish("")),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, BenefiaError::Validation { .. }));

    // The stored group is untouched by the rejected updates.
    let stored = repo.get_by_id(group.id).unwrap();
    assert_eq!(stored.name.fi, "Hyvinvointietu");
    assert!(stored.selection_period.is_open(now));
}

#[test]
fn discount_update_enforces_creation_invariants() {
    let repo = MemDiscountCodeRepository::new(Store::new());
    let now = Utc::now();
    let code = repo
        .create(CreateDiscountCode {
            partner_name: "Finnkino".into(),
            partner_logo: None,
            description: "Elokuvaliput etuhintaan.".into(),
            code: "LEFFA-ETUSI".into(),
            discount_amount: "-25 %".into(),
            categories: vec!["culture".into()],
            valid_from: now - Duration::days(10),
            valid_to: now + Duration::days(90),
            partner_url: "https://finnkino.fi".into(),
        })
        .unwrap();

    let err = repo
        .update(
            code.id,
            UpdateDiscountCode {
                code: Some("  ".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, BenefiaError::Validation { .. }));

    // A rejected window move leaves every field as stored.
    let err = repo
        .update(
            code.id,
            UpdateDiscountCode {
                partner_name: Some("Elisa".into()),
                valid_to: Some(now - Duration::days(30)),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, BenefiaError::Validation { .. }));

    let stored = repo.get_by_id(code.id).unwrap();
    assert_eq!(stored.partner_name, "Finnkino");
    assert_eq!(stored.valid_to, code.valid_to);
}

#[test]
fn selection_replace_discards_prior_tuple() {
    let repo = MemSelectionRepository::new(Store::new());
    let employee = Uuid::new_v4();
    let group = Uuid::new_v4();
    let now = Utc::now();

    for option in [Uuid::new_v4(), Uuid::new_v4()] {
        repo.replace(BenefitSelection {
            employee_id: employee,
            group_id: group,
            selected_option_id: option,
            selected_at: now,
        })
        .unwrap();
    }
    assert_eq!(repo.list_for_employee(employee).unwrap().len(), 1);
}

#[test]
fn seeded_store_wires_selection_to_group_option() {
    let store = Store::seeded();
    let selections = MemSelectionRepository::new(store.clone());
    let groups =
        benefia_store::MemOptionalGroupRepository::new(store);

    let seeded = selections
        .list_for_employee(seed::DEMO_EMPLOYEE_ID)
        .unwrap();
    assert_eq!(seeded.len(), 1);

    use benefia_core::repository::OptionalGroupRepository;
    let group = groups.get_by_id(seeded[0].group_id).unwrap();
    assert!(group.option(seeded[0].selected_option_id).is_some());
}
