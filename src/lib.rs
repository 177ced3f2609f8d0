//! Round-robin group scheduler: library with models and business logic.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod roster;
pub mod view;

pub use config::Config;
pub use logic::{
    apply_action, confirm_schedule, create_schedule, generate_groups, group_matches, handle_drag,
    move_player, parse_due_date, partition_roster, round_robin_pairs, set_group_size, set_roster,
    transition, update_match_due_date, Action, DragEvent, GROUP_LABEL_LIMIT,
};
pub use models::{
    DueDateRule, Group, GroupId, IgnoreReason, Outcome, Player, PlayerId, PlayerRecord,
    RosterEntry, ScheduledMatch, Scheduler, SchedulerError, SchedulerId, DEFAULT_GROUP_SIZE,
};
pub use roster::{load_roster_file, parse_roster_csv, roster_from_emails, seed_roster};
pub use view::SchedulerView;
