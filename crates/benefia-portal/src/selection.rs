//! Optional-benefit selection.
//!
//! An employee holds at most one selection per group. Selecting replaces
//! the previous choice wholesale; re-selecting the current choice is a
//! no-op. Changes are only accepted while the group's selection window
//! is open — callers use [`availability`] to disable
//! the action in the UI, and the service still refuses out-of-window
//! requests as a backstop.

use benefia_core::models::group::OptionalBenefitGroup;
use benefia_core::models::selection::BenefitSelection;
use benefia_core::repository::{OptionalGroupRepository, SelectionRepository};
use benefia_core::{BenefiaError, BenefiaResult};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Why the selection action is (un)available for a group right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAvailability {
    Open,
    /// The window has not started or has already ended; render the
    /// action disabled rather than letting it fail.
    WindowClosed,
}

/// UI-facing predicate for enabling the select action on a group.
pub fn availability(group: &OptionalBenefitGroup, now: DateTime<Utc>) -> SelectionAvailability {
    if group.selection_period.is_open(now) {
        SelectionAvailability::Open
    } else {
        SelectionAvailability::WindowClosed
    }
}

/// Outcome of a select request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was replaced (or created).
    Selected(BenefitSelection),
    /// The requested option was already current; nothing changed.
    AlreadySelected(BenefitSelection),
}

pub struct SelectionService<G, S> {
    groups: G,
    selections: S,
}

impl<G, S> SelectionService<G, S>
where
    G: OptionalGroupRepository,
    S: SelectionRepository,
{
    pub fn new(groups: G, selections: S) -> Self {
        Self { groups, selections }
    }

    /// The employee's current selection within a group, if any.
    pub fn current(
        &self,
        employee_id: Uuid,
        group_id: Uuid,
    ) -> BenefiaResult<Option<BenefitSelection>> {
        self.selections.current(employee_id, group_id)
    }

    /// All of the employee's selections.
    pub fn selections_for(&self, employee_id: Uuid) -> BenefiaResult<Vec<BenefitSelection>> {
        self.selections.list_for_employee(employee_id)
    }

    /// Select `option_id` in `group_id` for the employee.
    ///
    /// Idempotent: selecting the current option again returns
    /// [`SelectOutcome::AlreadySelected`] without touching the store.
    pub fn select_option(
        &self,
        employee_id: Uuid,
        group_id: Uuid,
        option_id: Uuid,
    ) -> BenefiaResult<SelectOutcome> {
        let now = Utc::now();
        let group = self.groups.get_by_id(group_id)?;

        if group.option(option_id).is_none() {
            return Err(BenefiaError::NotFound {
                entity: "Benefit".into(),
                id: option_id.to_string(),
            });
        }
        if !group.selection_period.is_open(now) {
            return Err(BenefiaError::SelectionWindowClosed {
                group_id: group_id.to_string(),
            });
        }
        if let Some(current) = self.selections.current(employee_id, group_id)? {
            if current.selected_option_id == option_id {
                return Ok(SelectOutcome::AlreadySelected(current));
            }
        }

        let selection = self.selections.replace(BenefitSelection {
            employee_id,
            group_id,
            selected_option_id: option_id,
            selected_at: now,
        })?;
        info!(
            employee = %employee_id,
            group = %group_id,
            option = %option_id,
            "benefit selection replaced"
        );
        Ok(SelectOutcome::Selected(selection))
    }
}
