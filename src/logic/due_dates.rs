//! Point edits of a single match's due date.

use crate::models::{IgnoreReason, Outcome, Scheduler, SchedulerError};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` calendar date as sent by a date input.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, SchedulerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| SchedulerError::InvalidDate(value.to_string()))
}

/// Overwrite the due date of the match at `index` in the flat match list.
/// No ordering checks, no re-sorting.
pub fn update_match_due_date(scheduler: &mut Scheduler, index: usize, due_date: NaiveDate) -> Outcome {
    if scheduler.confirmed {
        return Outcome::Ignored(IgnoreReason::Confirmed);
    }
    match scheduler.matches.get_mut(index) {
        Some(m) => {
            m.due_date = due_date;
            Outcome::Applied
        }
        None => Outcome::Ignored(IgnoreReason::UnknownMatch),
    }
}
