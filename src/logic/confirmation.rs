//! Confirmation gate: the one-way switch that freezes the schedule.

use crate::models::{Outcome, Scheduler};

/// Lock groups and matches for the rest of the session. Accepted with or without matches.
pub fn confirm_schedule(scheduler: &mut Scheduler) -> Outcome {
    scheduler.confirmed = true;
    Outcome::Applied
}
