//! Scheduler business logic: partitioning, scheduling, editing, confirmation.

mod action;
mod confirmation;
mod due_dates;
mod group_editor;
mod partition;
mod schedule;

pub use action::{apply_action, transition, Action};
pub use confirmation::confirm_schedule;
pub use due_dates::{parse_due_date, update_match_due_date};
pub use group_editor::{handle_drag, move_player, DragEvent};
pub use partition::{generate_groups, partition_roster, set_group_size, set_roster, GROUP_LABEL_LIMIT};
pub use schedule::{create_schedule, group_matches, round_robin_pairs};
