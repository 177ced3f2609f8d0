//! Scheduler session state, transition outcomes, and errors.

use crate::models::game::{DueDateRule, ScheduledMatch};
use crate::models::group::{Group, GroupId};
use crate::models::player::{Player, PlayerId, RosterEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Group size used when nothing else is configured.
pub const DEFAULT_GROUP_SIZE: usize = 6;

/// Errors that can occur during scheduler operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchedulerError {
    /// Group size must be at least 1.
    InvalidGroupSize(i64),
    /// Roster source could not be read, or a row is not an email.
    InvalidRoster(String),
    /// A due date was not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::InvalidGroupSize(size) => {
                write!(f, "Group size must be a positive number (got {})", size)
            }
            SchedulerError::InvalidRoster(reason) => write!(f, "Invalid roster: {}", reason),
            SchedulerError::InvalidDate(value) => {
                write!(f, "Invalid due date '{}', expected YYYY-MM-DD", value)
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Why a transition left the state untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The schedule is confirmed; nothing may change.
    Confirmed,
    /// Drag source or drop target is not a group member.
    UnknownPlayer,
    /// Source and target already share a group.
    SameGroup,
    /// No match at that index.
    UnknownMatch,
}

/// Result of a transition that did not fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Unique identifier for a scheduler session.
pub type SchedulerId = Uuid;

/// Full state of one scheduling session: roster, groups, matches, and the confirmation flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler {
    pub id: SchedulerId,
    /// Source list the groups are drawn from.
    pub roster: Vec<RosterEntry>,
    pub group_size: usize,
    pub groups: Vec<Group>,
    /// Display label per group; labels may collide.
    pub group_labels: HashMap<GroupId, u32>,
    /// Flat list: all pairings of the first group, then the second, and so on.
    pub matches: Vec<ScheduledMatch>,
    pub due_date_rule: DueDateRule,
    /// Once set, never cleared.
    pub confirmed: bool,
}

impl Scheduler {
    /// Create an unpartitioned session. Rejects a zero group size.
    pub fn new(
        roster: Vec<RosterEntry>,
        group_size: usize,
        due_date_rule: DueDateRule,
    ) -> Result<Self, SchedulerError> {
        if group_size == 0 {
            return Err(SchedulerError::InvalidGroupSize(0));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            roster,
            group_size,
            groups: Vec::new(),
            group_labels: HashMap::new(),
            matches: Vec::new(),
            due_date_rule,
            confirmed: false,
        })
    }

    /// Label shown for a group (0 if the group is unknown).
    pub fn label_of(&self, group_id: GroupId) -> u32 {
        self.group_labels.get(&group_id).copied().unwrap_or_default()
    }

    /// Index of the group holding this player.
    pub fn group_index_of(&self, player_id: PlayerId) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(player_id))
    }

    pub fn find_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.groups
            .iter()
            .flat_map(|g| g.players.iter())
            .find(|p| p.id == player_id)
    }

    pub fn player_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Matches generated for this group whose two players are still in it, with
    /// their index in the flat match list.
    ///
    /// A match stops being listed once one of its players is moved elsewhere.
    pub fn matches_for_group(&self, group: &Group) -> Vec<(usize, &ScheduledMatch)> {
        let emails = group.emails();
        self.matches
            .iter()
            .enumerate()
            .filter(|(_, m)| m.group_id == group.id && m.is_between(&emails))
            .collect()
    }
}
