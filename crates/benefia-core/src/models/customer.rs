//! Customer account dossier.
//!
//! A large read-mostly aggregate of sub-records an account manager
//! browses: contacts, assigned specialists, billing, payroll agreements,
//! accounting settings, schedules, stakeholders, and quick links. Some
//! sub-records are internal-only and must be stripped before the dossier
//! reaches a non-staff user — see [`Customer::redacted`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::permissions::{UserPermissions, Visibility};

// -----------------------------------------------------------------------
// Collaboration
// -----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    DecisionMaker,
    ContactPerson,
    Stakeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAccess {
    pub system_name: String,
    pub access_level: String,
    pub permissions: Vec<String>,
}

/// A named contact on the customer's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: Option<String>,
    pub system_access: Vec<SystemAccess>,
    pub contact_role: ContactRole,
    pub is_editable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistRole {
    ResponsibleCell,
    LeadPayrollSpecialist,
    DeputyPayrollSpecialist,
    PaymentGroupSpecialist,
    LeadServiceContact,
    DeputyServiceContact,
    SystemAdministrator,
}

/// A platform-side specialist assigned to the account. Some assignments
/// are internal-only and never shown to the customer's own users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: Uuid,
    pub name: String,
    pub role: SpecialistRole,
    pub role_label: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_internal_only: bool,
}

impl Visibility for Specialist {
    fn visible_to(&self, permissions: &UserPermissions) -> bool {
        !self.is_internal_only || permissions.can_view_internal_sections
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentativeRole {
    ShopSteward,
    SafetyDelegate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustRepresentative {
    pub id: Uuid,
    pub name: String,
    pub role: RepresentativeRole,
    pub area: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMinutes {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub participants: Vec<String>,
    pub topics: Vec<String>,
    pub document_url: Option<String>,
}

// -----------------------------------------------------------------------
// Services & products
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerService {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Active,
    Inactive,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub status: IntegrationStatus,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFeature {
    pub id: Uuid,
    pub name: String,
    pub is_enabled: bool,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub payer_id: String,
    pub bank_account: String,
    pub bank_name: String,
    pub is_editable: bool,
}

// -----------------------------------------------------------------------
// Billing
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub id: Uuid,
    pub name: String,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub service_descriptions: Vec<ServiceDescription>,
    pub general_instructions: String,
    pub agreed_principles: String,
    /// Internal-only; stripped for non-staff users.
    pub internal_instructions: Option<String>,
}

// -----------------------------------------------------------------------
// Payroll
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectiveAgreement {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAgreement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub is_editable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentGroup {
    pub id: Uuid,
    pub name: String,
    pub payment_date: String,
    pub pay_period: String,
    pub assigned_specialist: Option<String>,
}

/// Salary dividers used by payroll calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dividers {
    pub day_divider: f64,
    pub hour_divider: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceCalculation {
    pub kind: String,
    pub description: String,
    pub rules: Vec<String>,
}

// -----------------------------------------------------------------------
// Accounting
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroup {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostAllocationKind {
    CostCenter,
    Project,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostAllocation {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub kind: CostAllocationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualSetting {
    pub id: Uuid,
    pub kind: String,
    pub percentage: f64,
    /// Whether a non-staff user may edit this row.
    pub is_customer_editable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingInfo {
    /// Day of month reports are delivered on.
    pub reporting_date: u8,
    pub fiscal_year_start: String,
    pub fiscal_year_end: String,
    pub account_groups: Vec<AccountGroup>,
    pub cost_allocations: Vec<CostAllocation>,
    pub accrual_settings: Vec<AccrualSetting>,
}

// -----------------------------------------------------------------------
// Schedule
// -----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Upcoming,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub responsible: Option<String>,
    pub status: TaskStatus,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventKind {
    Deadline,
    Reporting,
    Payment,
    Meeting,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub kind: CalendarEventKind,
    pub description: Option<String>,
}

// -----------------------------------------------------------------------
// Stakeholders & links
// -----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderKind {
    PensionProvider,
    AccidentInsurance,
    OccupationalHealthcare,
    BenefitPartner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: Uuid,
    pub kind: StakeholderKind,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub account_number: Option<String>,
    pub policy_number: Option<String>,
    pub notes: Option<String>,
    pub is_editable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    System,
    Analytics,
    Documents,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub category: LinkCategory,
    pub is_internal_only: bool,
}

impl Visibility for QuickLink {
    fn visible_to(&self, permissions: &UserPermissions) -> bool {
        !self.is_internal_only || permissions.can_view_internal_sections
    }
}

/// One day of service-request volume, carried as an analytics seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequestPoint {
    pub date: NaiveDate,
    pub count: u32,
    pub avg_resolution_hours: f64,
}

// -----------------------------------------------------------------------
// The aggregate
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    /// Human-readable account number, e.g. "HEL-001".
    pub customer_number: String,

    // Collaboration
    pub contacts: Vec<Contact>,
    pub specialists: Vec<Specialist>,
    pub employee_count: u32,
    pub trust_representatives: Vec<TrustRepresentative>,
    pub meeting_minutes: Vec<MeetingMinutes>,
    pub customer_service_email: String,

    // Services & products
    pub services: Vec<CustomerService>,
    pub integrations: Vec<Integration>,
    pub platform_features: Vec<PlatformFeature>,
    pub bank_account: BankAccount,

    // Billing
    pub billing: BillingInfo,

    // Payroll
    pub collective_agreements: Vec<CollectiveAgreement>,
    pub local_agreements: Vec<LocalAgreement>,
    pub payment_groups: Vec<PaymentGroup>,
    pub dividers: Dividers,
    pub experience_calculation: ExperienceCalculation,

    // Accounting
    pub accounting: AccountingInfo,

    // Schedule
    pub upcoming_tasks: Vec<ScheduledTask>,
    pub annual_calendar: Vec<CalendarEvent>,

    // Stakeholders & links
    pub stakeholders: Vec<Stakeholder>,
    pub quick_links: Vec<QuickLink>,

    // Analytics seed
    pub service_requests: Vec<ServiceRequestPoint>,

    /// Internal-only working notes; never rendered for non-staff users.
    pub work_instructions: Vec<String>,
}

impl Customer {
    /// Produce a copy with every internal-only record removed.
    ///
    /// For a staff user this is the identity. For anyone else:
    /// internal-only specialists and quick links are filtered out, the
    /// internal billing instructions are cleared, and the work
    /// instructions are emptied. Rendering must always go through this
    /// so the gating rule is applied in one place.
    pub fn redacted(&self, permissions: &UserPermissions) -> Customer {
        if permissions.can_view_internal_sections {
            return self.clone();
        }
        let mut dossier = self.clone();
        dossier.specialists.retain(|s| s.visible_to(permissions));
        dossier.quick_links.retain(|l| l.visible_to(permissions));
        dossier.billing.internal_instructions = None;
        dossier.work_instructions.clear();
        dossier
    }
}
