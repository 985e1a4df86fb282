//! Seed fixture.
//!
//! Supplies the catalogs and dossier a session starts from. The data is
//! deliberately relative to "now" so derived states (open selection
//! window, expiring discount, upcoming task) stay meaningful: the seed
//! is an injected read-only starting point, not a persistence layer.

use benefia_core::locale::LocalizedString;
use benefia_core::models::benefit::{
    Benefit, BenefitCategory, BenefitKind, BenefitStatus, BenefitValue, ValueUnit,
};
use benefia_core::models::customer::{
    AccountGroup, AccountingInfo, AccrualSetting, BankAccount, BillingInfo, CalendarEvent,
    CalendarEventKind, CollectiveAgreement, Contact, ContactRole, CostAllocation,
    CostAllocationKind, Customer, CustomerService, Dividers, ExperienceCalculation, Integration,
    IntegrationStatus, LinkCategory, LocalAgreement, MeetingMinutes, PaymentGroup,
    PlatformFeature, QuickLink, RepresentativeRole, ScheduledTask, ServiceDescription,
    ServiceRequestPoint, Specialist, SpecialistRole, Stakeholder, StakeholderKind, SystemAccess,
    TaskStatus, TrustRepresentative,
};
use benefia_core::models::discount::DiscountCode;
use benefia_core::models::group::{OptionalBenefitGroup, SelectionPeriod};
use benefia_core::models::selection::BenefitSelection;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::store::Store;

/// The demo employee all seeded selections belong to.
pub const DEMO_EMPLOYEE_ID: Uuid = Uuid::from_u128(0x0b1e_f1a0_0000_0000_0000_0000_0000_0001);

/// The seeded customer dossier.
pub const DEMO_CUSTOMER_ID: Uuid = Uuid::from_u128(0x0b1e_f1a0_0000_0000_0000_0000_0000_0002);

impl Store {
    /// A store initialized with the full seed fixture.
    pub fn seeded() -> Store {
        let now = Utc::now();
        // Collections are built directly; going through the repositories
        // would regenerate the ids the fixture wires together.
        let mut benefits = seed_benefits(now);
        let groups = seed_groups(now);
        let discount_codes = seed_discount_codes(now);
        let selections = seed_selections(&groups, now);
        let customer = seed_customer(now);

        // Group options also live in the flat catalog for admin views.
        for group in &groups {
            benefits.extend(group.options.iter().cloned());
        }

        let store =
            Store::from_parts(benefits, groups, discount_codes, selections, vec![customer]);
        info!("store seeded from fixture");
        store
    }
}

fn days_ago(now: DateTime<Utc>, days: i64) -> NaiveDate {
    (now - Duration::days(days)).date_naive()
}

fn benefit(
    kind: BenefitKind,
    name: LocalizedString,
    description: &str,
    category: BenefitCategory,
    value: BenefitValue,
    status: BenefitStatus,
    valid_from: NaiveDate,
    now: DateTime<Utc>,
) -> Benefit {
    Benefit {
        id: Uuid::new_v4(),
        kind,
        name,
        description: description.to_string(),
        category,
        value,
        status,
        valid_from,
        valid_to: None,
        icon: None,
        external_link: None,
        target_groups: vec![],
        created_at: now,
        updated_at: now,
    }
}

fn seed_benefits(now: DateTime<Utc>) -> Vec<Benefit> {
    vec![
        benefit(
            BenefitKind::Standard,
            LocalizedString::new("Lounasetu", "Lunch benefit", "Lunchförmån"),
            "Verovapaa lounasetu kaikille työntekijöille.",
            BenefitCategory::Lunch,
            BenefitValue::new(12.70, ValueUnit::Day),
            BenefitStatus::Active,
            days_ago(now, 400),
            now,
        ),
        benefit(
            BenefitKind::Standard,
            LocalizedString::new("Työmatkaetu", "Commute benefit", "Pendlingsförmån"),
            "Työsuhdematkalippu joukkoliikenteeseen.",
            BenefitCategory::Commute,
            BenefitValue::new(100.0, ValueUnit::Month),
            BenefitStatus::Active,
            days_ago(now, 400),
            now,
        ),
        benefit(
            BenefitKind::Standard,
            LocalizedString::new("Puhelinetu", "Phone benefit", "Telefonförmån"),
            "Työnantajan kustantama puhelinliittymä.",
            BenefitCategory::Phone,
            BenefitValue::new(20.0, ValueUnit::Month),
            BenefitStatus::Active,
            days_ago(now, 400),
            now,
        ),
        benefit(
            BenefitKind::Standard,
            LocalizedString::new("Laajennettu työterveys", "Extended healthcare", "Utökad företagshälsovård"),
            "Erikoislääkäritasoinen työterveyshuolto.",
            BenefitCategory::Healthcare,
            BenefitValue::new(350.0, ValueUnit::Year),
            BenefitStatus::Active,
            days_ago(now, 200),
            now,
        ),
        benefit(
            BenefitKind::Standard,
            LocalizedString::finnish("Polkupyöräetu"),
            "Työsuhdepolkupyörä leasing-sopimuksella.",
            BenefitCategory::Commute,
            BenefitValue::new(100.0, ValueUnit::Month),
            BenefitStatus::Draft,
            days_ago(now, -30),
            now,
        ),
        benefit(
            BenefitKind::Standard,
            LocalizedString::finnish("Vanha virkistysraha"),
            "Korvattu hyvinvointiedulla.",
            BenefitCategory::Wellbeing,
            BenefitValue::new(150.0, ValueUnit::Year),
            BenefitStatus::Archived,
            days_ago(now, 900),
            now,
        ),
    ]
}

fn seed_groups(now: DateTime<Utc>) -> Vec<OptionalBenefitGroup> {
    let wellbeing_options = vec![
        benefit(
            BenefitKind::Optional,
            LocalizedString::new("Liikuntaetu", "Sports benefit", "Motionsförmån"),
            "Liikuntasaldo kuntosaleille ja liikuntapalveluihin.",
            BenefitCategory::Sports,
            BenefitValue::new(400.0, ValueUnit::Year),
            BenefitStatus::Active,
            days_ago(now, 100),
            now,
        ),
        benefit(
            BenefitKind::Optional,
            LocalizedString::new("Kulttuurietu", "Culture benefit", "Kulturförmån"),
            "Saldo kulttuuritapahtumiin ja museoihin.",
            BenefitCategory::Culture,
            BenefitValue::new(400.0, ValueUnit::Year),
            BenefitStatus::Active,
            days_ago(now, 100),
            now,
        ),
        benefit(
            BenefitKind::Optional,
            LocalizedString::finnish("Hierontaetu"),
            "Hierontakäynnit sopimushoitoloissa.",
            BenefitCategory::Wellbeing,
            BenefitValue::new(35.0, ValueUnit::OneTime),
            BenefitStatus::Active,
            days_ago(now, 100),
            now,
        ),
    ];
    let insurance_options = vec![
        benefit(
            BenefitKind::Optional,
            LocalizedString::finnish("Vapaa-ajan tapaturmavakuutus"),
            "Laajennettu vakuutusturva vapaa-ajalle.",
            BenefitCategory::Insurance,
            BenefitValue::new(15.0, ValueUnit::Month),
            BenefitStatus::Active,
            days_ago(now, 300),
            now,
        ),
        benefit(
            BenefitKind::Optional,
            LocalizedString::finnish("Matkavakuutus"),
            "Vapaa-ajan matkavakuutus koko perheelle.",
            BenefitCategory::Insurance,
            BenefitValue::new(12.0, ValueUnit::Month),
            BenefitStatus::Active,
            days_ago(now, 300),
            now,
        ),
    ];

    vec![
        OptionalBenefitGroup {
            id: Uuid::new_v4(),
            name: LocalizedString::new("Hyvinvointietu", "Wellbeing benefit", "Välmåendeförmån"),
            description: "Valitse yksi hyvinvointia tukeva etu.".into(),
            options: wellbeing_options,
            selection_period: SelectionPeriod {
                start: now - Duration::days(30),
                end: now + Duration::days(30),
            },
            change_restrictions: "Valintaa voi muuttaa kerran vuodessa valintajakson aikana."
                .into(),
            created_at: now,
            updated_at: now,
        },
        OptionalBenefitGroup {
            id: Uuid::new_v4(),
            name: LocalizedString::finnish("Vakuutusetu"),
            description: "Valinnainen lisävakuutus.".into(),
            options: insurance_options,
            selection_period: SelectionPeriod {
                start: now - Duration::days(120),
                end: now - Duration::days(60),
            },
            change_restrictions: "Valintajakso on päättynyt tältä vuodelta.".into(),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn seed_discount_codes(now: DateTime<Utc>) -> Vec<DiscountCode> {
    let code = |partner: &str, description: &str, redemption: &str, amount: &str,
                categories: &[&str], from_days_ago: i64, to_in_days: i64, url: &str| {
        DiscountCode {
            id: Uuid::new_v4(),
            partner_name: partner.to_string(),
            partner_logo: None,
            description: description.to_string(),
            code: redemption.to_string(),
            discount_amount: amount.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            valid_from: now - Duration::days(from_days_ago),
            valid_to: now + Duration::days(to_in_days),
            partner_url: url.to_string(),
            created_at: now,
            updated_at: now,
        }
    };
    vec![
        code(
            "Elixia",
            "Alennus kuntosalijäsenyydestä.",
            "ELIXIA-HLO-24",
            "-20 %",
            &["sports", "wellbeing"],
            200,
            180,
            "https://elixia.fi",
        ),
        code(
            "Finnkino",
            "Elokuvaliput etuhintaan.",
            "LEFFA-ETUSI",
            "-25 %",
            &["culture"],
            100,
            20,
            "https://finnkino.fi",
        ),
        code(
            "Silmäasema",
            "Silmälasit ja näöntarkastus etuhintaan.",
            "NÄKÖ-2023",
            "-15 %",
            &["healthcare"],
            400,
            -10,
            "https://silmaasema.fi",
        ),
    ]
}

fn seed_selections(groups: &[OptionalBenefitGroup], now: DateTime<Utc>) -> Vec<BenefitSelection> {
    // The demo employee picked the first wellbeing option last month.
    match groups.first().and_then(|g| g.options.first()) {
        Some(option) => vec![BenefitSelection {
            employee_id: DEMO_EMPLOYEE_ID,
            group_id: groups[0].id,
            selected_option_id: option.id,
            selected_at: now - Duration::days(25),
        }],
        None => vec![],
    }
}

fn seed_customer(now: DateTime<Utc>) -> Customer {
    Customer {
        id: DEMO_CUSTOMER_ID,
        name: "Hellon Oy".into(),
        customer_number: "HEL-001".into(),
        contacts: vec![
            Contact {
                id: Uuid::new_v4(),
                name: "Minna Korhonen".into(),
                role: "HR-päällikkö".into(),
                email: "minna.korhonen@hellon.fi".into(),
                phone: Some("+358 40 123 4567".into()),
                system_access: vec![SystemAccess {
                    system_name: "Mepco".into(),
                    access_level: "Pääkäyttäjä".into(),
                    permissions: vec!["read".into(), "write".into(), "admin".into()],
                }],
                contact_role: ContactRole::DecisionMaker,
                is_editable: true,
            },
            Contact {
                id: Uuid::new_v4(),
                name: "Jukka Virtanen".into(),
                role: "Talousjohtaja".into(),
                email: "jukka.virtanen@hellon.fi".into(),
                phone: Some("+358 40 234 5678".into()),
                system_access: vec![SystemAccess {
                    system_name: "Mepco".into(),
                    access_level: "Katselija".into(),
                    permissions: vec!["read".into()],
                }],
                contact_role: ContactRole::DecisionMaker,
                is_editable: true,
            },
            Contact {
                id: Uuid::new_v4(),
                name: "Anna Laine".into(),
                role: "Palkanlaskija".into(),
                email: "anna.laine@hellon.fi".into(),
                phone: Some("+358 40 345 6789".into()),
                system_access: vec![SystemAccess {
                    system_name: "Lataamo".into(),
                    access_level: "Käyttäjä".into(),
                    permissions: vec!["read".into(), "write".into()],
                }],
                contact_role: ContactRole::ContactPerson,
                is_editable: true,
            },
        ],
        specialists: vec![
            Specialist {
                id: Uuid::new_v4(),
                name: "Kaisa Koivisto".into(),
                role: SpecialistRole::LeadPayrollSpecialist,
                role_label: "Päävastuullinen palkka-asiantuntija".into(),
                email: "kaisa.koivisto@benefia.fi".into(),
                phone: Some("+358 40 111 2222".into()),
                is_internal_only: false,
            },
            Specialist {
                id: Uuid::new_v4(),
                name: "Pekka Nieminen".into(),
                role: SpecialistRole::DeputyPayrollSpecialist,
                role_label: "Varavastuullinen palkka-asiantuntija".into(),
                email: "pekka.nieminen@benefia.fi".into(),
                phone: None,
                is_internal_only: false,
            },
            Specialist {
                id: Uuid::new_v4(),
                name: "Sari Mäkelä".into(),
                role: SpecialistRole::ResponsibleCell,
                role_label: "Vastuusolu".into(),
                email: "sari.makela@benefia.fi".into(),
                phone: None,
                is_internal_only: true,
            },
        ],
        employee_count: 85,
        trust_representatives: vec![TrustRepresentative {
            id: Uuid::new_v4(),
            name: "Timo Salminen".into(),
            role: RepresentativeRole::ShopSteward,
            area: Some("Helsinki".into()),
            email: Some("timo.salminen@hellon.fi".into()),
            phone: None,
        }],
        meeting_minutes: vec![MeetingMinutes {
            id: Uuid::new_v4(),
            date: days_ago(now, 45),
            title: "Kvartaalipalaveri Q2".into(),
            participants: vec!["Minna Korhonen".into(), "Kaisa Koivisto".into()],
            topics: vec!["Palvelutaso".into(), "Lomakausi".into()],
            document_url: Some("https://docs.example.com/hellon/q2".into()),
        }],
        customer_service_email: "asiakaspalvelu@benefia.fi".into(),
        services: vec![
            CustomerService {
                id: Uuid::new_v4(),
                name: "Palkanlaskenta".into(),
                description: Some("Kuukausittainen palkanlaskentapalvelu.".into()),
                is_active: true,
            },
            CustomerService {
                id: Uuid::new_v4(),
                name: "HR-järjestelmä".into(),
                description: None,
                is_active: true,
            },
        ],
        integrations: vec![Integration {
            id: Uuid::new_v4(),
            name: "Netvisor".into(),
            kind: "kirjanpito".into(),
            status: IntegrationStatus::Active,
            description: Some("Kirjanpitoaineiston siirto.".into()),
        }],
        platform_features: vec![PlatformFeature {
            id: Uuid::new_v4(),
            name: "Sähköinen palkkalaskelma".into(),
            is_enabled: true,
            category: "palkka".into(),
        }],
        bank_account: BankAccount {
            payer_id: "HEL-PAYER-1".into(),
            bank_account: "FI21 1234 5600 0007 85".into(),
            bank_name: "Nordea".into(),
            is_editable: true,
        },
        billing: BillingInfo {
            service_descriptions: vec![ServiceDescription {
                id: Uuid::new_v4(),
                name: "Palkanlaskennan palvelukuvaus".into(),
                valid_from: days_ago(now, 500),
                valid_to: None,
                document_url: Some("https://docs.example.com/hellon/palvelukuvaus".into()),
            }],
            general_instructions: "Laskutus kuukausittain jälkikäteen.".into(),
            agreed_principles: "Lisätyöt laskutetaan tuntiperusteisesti.".into(),
            internal_instructions: Some(
                "Avainasiakas. Lisätöistä sovittava etukäteen KK:n kanssa. Viite: HEL-2023-001."
                    .into(),
            ),
        },
        collective_agreements: vec![CollectiveAgreement {
            id: Uuid::new_v4(),
            name: "Teknologiateollisuuden TES".into(),
            code: "TT-2023".into(),
            valid_from: days_ago(now, 600),
            valid_to: Some(days_ago(now, -300)),
            document_url: None,
        }],
        local_agreements: vec![LocalAgreement {
            id: Uuid::new_v4(),
            name: "Liukuva työaika".into(),
            description: "Paikallinen sopimus liukuvasta työajasta.".into(),
            valid_from: days_ago(now, 600),
            valid_to: None,
            is_editable: true,
        }],
        payment_groups: vec![PaymentGroup {
            id: Uuid::new_v4(),
            name: "Kuukausipalkkaiset".into(),
            payment_date: "15.".into(),
            pay_period: "1.–31.".into(),
            assigned_specialist: Some("Kaisa Koivisto".into()),
        }],
        dividers: Dividers {
            day_divider: 21.5,
            hour_divider: 158.0,
        },
        experience_calculation: ExperienceCalculation {
            kind: "työkokemuslisä".into(),
            description: "Kokemuslisä TES:n mukaan.".into(),
            rules: vec!["5 vuotta: 5 %".into(), "10 vuotta: 8 %".into()],
        },
        accounting: AccountingInfo {
            reporting_date: 5,
            fiscal_year_start: "1.1.".into(),
            fiscal_year_end: "31.12.".into(),
            account_groups: vec![AccountGroup {
                id: Uuid::new_v4(),
                code: "5000".into(),
                name: "Palkat".into(),
            }],
            cost_allocations: vec![CostAllocation {
                id: Uuid::new_v4(),
                code: "KP-100".into(),
                name: "Hallinto".into(),
                kind: CostAllocationKind::CostCenter,
            }],
            accrual_settings: vec![
                AccrualSetting {
                    id: Uuid::new_v4(),
                    kind: "Lomapalkkavelka".into(),
                    percentage: 18.5,
                    is_customer_editable: true,
                },
                AccrualSetting {
                    id: Uuid::new_v4(),
                    kind: "Sivukulut".into(),
                    percentage: 22.0,
                    is_customer_editable: false,
                },
            ],
        },
        upcoming_tasks: vec![ScheduledTask {
            id: Uuid::new_v4(),
            name: "Lomapalkkavelan täsmäytys".into(),
            due_date: days_ago(now, -14),
            responsible: Some("Kaisa Koivisto".into()),
            status: TaskStatus::Upcoming,
            category: "kirjanpito".into(),
        }],
        annual_calendar: vec![CalendarEvent {
            id: Uuid::new_v4(),
            name: "Vuosi-ilmoitukset".into(),
            date: days_ago(now, -60),
            kind: CalendarEventKind::Deadline,
            description: None,
        }],
        stakeholders: vec![
            Stakeholder {
                id: Uuid::new_v4(),
                kind: StakeholderKind::PensionProvider,
                name: "Ilmarinen".into(),
                contact_person: None,
                email: None,
                phone: None,
                account_number: None,
                policy_number: Some("46-1234567".into()),
                notes: None,
                is_editable: true,
            },
            Stakeholder {
                id: Uuid::new_v4(),
                kind: StakeholderKind::OccupationalHealthcare,
                name: "Terveystalo".into(),
                contact_person: Some("Laura Aalto".into()),
                email: Some("yritysasiakkaat@terveystalo.fi".into()),
                phone: None,
                account_number: None,
                policy_number: None,
                notes: Some("Sopimus kattaa erikoislääkäritason.".into()),
                is_editable: true,
            },
        ],
        quick_links: vec![
            QuickLink {
                id: Uuid::new_v4(),
                label: "Mepco".into(),
                url: "https://mepco.example.com/hellon".into(),
                category: LinkCategory::System,
                is_internal_only: false,
            },
            QuickLink {
                id: Uuid::new_v4(),
                label: "Asiakasanalytiikka".into(),
                url: "https://analytics.example.com/hellon".into(),
                category: LinkCategory::Analytics,
                is_internal_only: false,
            },
            QuickLink {
                id: Uuid::new_v4(),
                label: "Kehitystaulu".into(),
                url: "https://jira.internal.example.com/hellon".into(),
                category: LinkCategory::Internal,
                is_internal_only: true,
            },
        ],
        service_requests: vec![
            ServiceRequestPoint {
                date: days_ago(now, 30),
                count: 12,
                avg_resolution_hours: 6.5,
            },
            ServiceRequestPoint {
                date: days_ago(now, 60),
                count: 9,
                avg_resolution_hours: 8.0,
            },
        ],
        work_instructions: vec![
            "Palkka-aineisto noudetaan Lataamosta viimeistään 10. päivä.".into(),
            "Poikkeustilanteissa yhteys vastuusoluun ennen asiakasta.".into(),
        ],
    }
}
