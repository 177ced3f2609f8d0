//! Data structures for the scheduler: players, groups, matches, session state.

mod game;
mod group;
mod player;
mod scheduler;

pub use game::{DueDateRule, ScheduledMatch};
pub use group::{Group, GroupId};
pub use player::{Player, PlayerId, PlayerRecord, RosterEntry};
pub use scheduler::{
    IgnoreReason, Outcome, Scheduler, SchedulerError, SchedulerId, DEFAULT_GROUP_SIZE,
};
