//! Single entry point for user actions: `(state, action) -> state`.
//!
//! Randomness and "today" are passed in so a caller (or a test) controls both.

use crate::logic::confirmation::confirm_schedule;
use crate::logic::due_dates::update_match_due_date;
use crate::logic::group_editor::{handle_drag, DragEvent};
use crate::logic::partition::{generate_groups, set_group_size, set_roster};
use crate::logic::schedule::create_schedule;
use crate::models::{Outcome, RosterEntry, Scheduler, SchedulerError};
use chrono::NaiveDate;
use rand::Rng;

/// Everything an organizer can do to a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    SetGroupSize(i64),
    SetRoster(Vec<RosterEntry>),
    RegenerateGroups,
    CreateSchedule,
    Drag(DragEvent),
    UpdateDueDate { index: usize, due_date: NaiveDate },
    Confirm,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SetGroupSize(_) => "set_group_size",
            Action::SetRoster(_) => "set_roster",
            Action::RegenerateGroups => "regenerate_groups",
            Action::CreateSchedule => "create_schedule",
            Action::Drag(_) => "drag",
            Action::UpdateDueDate { .. } => "update_due_date",
            Action::Confirm => "confirm",
        }
    }
}

/// Apply an action in place. On error the scheduler is unchanged.
pub fn apply_action<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    action: Action,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Outcome, SchedulerError> {
    let name = action.name();
    let outcome = match action {
        Action::SetGroupSize(size) => set_group_size(scheduler, size, rng)?,
        Action::SetRoster(roster) => set_roster(scheduler, roster, rng)?,
        Action::RegenerateGroups => generate_groups(scheduler, rng)?,
        Action::CreateSchedule => create_schedule(scheduler, today),
        Action::Drag(event) => handle_drag(scheduler, event),
        Action::UpdateDueDate { index, due_date } => update_match_due_date(scheduler, index, due_date),
        Action::Confirm => confirm_schedule(scheduler),
    };

    match outcome {
        Outcome::Applied => log::info!(
            "scheduler {}: {} applied ({} groups, {} matches)",
            scheduler.id,
            name,
            scheduler.groups.len(),
            scheduler.matches.len()
        ),
        Outcome::Ignored(reason) => {
            log::debug!("scheduler {}: {} ignored ({:?})", scheduler.id, name, reason)
        }
    }
    Ok(outcome)
}

/// Pure form of [`apply_action`]: returns the next state and leaves `state` alone.
pub fn transition<R: Rng + ?Sized>(
    state: &Scheduler,
    action: Action,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Scheduler, SchedulerError> {
    let mut next = state.clone();
    apply_action(&mut next, action, rng, today)?;
    Ok(next)
}
