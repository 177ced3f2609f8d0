//! Scheduled round-robin match and the rule for spacing due dates.

use crate::models::group::GroupId;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// One pairing inside a group. Players are referenced by email, not by id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    /// Group the pairing was generated for. Emails can repeat across groups.
    pub group_id: GroupId,
    pub player1: String,
    pub player2: String,
    /// Serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
}

impl ScheduledMatch {
    pub fn new(
        group_id: GroupId,
        player1: impl Into<String>,
        player2: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            group_id,
            player1: player1.into(),
            player2: player2.into(),
            due_date,
        }
    }

    /// True when both players are in `emails`.
    pub fn is_between(&self, emails: &HashSet<&str>) -> bool {
        emails.contains(self.player1.as_str()) && emails.contains(self.player2.as_str())
    }
}

/// How far after the generation date a pairing at seats `(i, j)` is due.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueDateRule {
    /// `max(i, j) * 7` days: one week per seat of the later player.
    #[default]
    Weekly,
    /// `i + j` days.
    IndexSum,
}

impl DueDateRule {
    pub fn offset_days(self, i: usize, j: usize) -> u64 {
        match self {
            DueDateRule::Weekly => (i.max(j) as u64) * 7,
            DueDateRule::IndexSum => (i + j) as u64,
        }
    }

    /// Due date for seats `(i, j)`; saturates at `NaiveDate::MAX` if the calendar overflows.
    pub fn due_date(self, base: NaiveDate, i: usize, j: usize) -> NaiveDate {
        let offset = self.offset_days(i, j);
        base.checked_add_days(Days::new(offset)).unwrap_or_else(|| {
            log::warn!("Due date {} + {} days overflows; using {}", base, offset, NaiveDate::MAX);
            NaiveDate::MAX
        })
    }
}

impl FromStr for DueDateRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(DueDateRule::Weekly),
            "index-sum" | "index_sum" => Ok(DueDateRule::IndexSum),
            other => Err(format!("unknown due date rule: {other}")),
        }
    }
}
