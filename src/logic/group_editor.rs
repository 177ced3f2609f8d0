//! Moving players between groups from drag-and-drop gestures.

use crate::models::{IgnoreReason, Outcome, PlayerId, Scheduler};
use serde::{Deserialize, Serialize};

/// A finished drag gesture: the dragged tile and the tile it was dropped on.
///
/// The UI decides which variant to send from the tiles' containers; the core
/// re-checks membership either way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DragEvent {
    ReorderWithinGroup { source: PlayerId, target: PlayerId },
    MoveAcrossGroups { source: PlayerId, target: PlayerId },
}

impl DragEvent {
    pub fn source(&self) -> PlayerId {
        match *self {
            DragEvent::ReorderWithinGroup { source, .. }
            | DragEvent::MoveAcrossGroups { source, .. } => source,
        }
    }

    pub fn target(&self) -> PlayerId {
        match *self {
            DragEvent::ReorderWithinGroup { target, .. }
            | DragEvent::MoveAcrossGroups { target, .. } => target,
        }
    }
}

/// Apply a drag gesture. Within-group reorders never change anything.
pub fn handle_drag(scheduler: &mut Scheduler, event: DragEvent) -> Outcome {
    if scheduler.confirmed {
        return Outcome::Ignored(IgnoreReason::Confirmed);
    }
    match event {
        DragEvent::ReorderWithinGroup { .. } => Outcome::Ignored(IgnoreReason::SameGroup),
        DragEvent::MoveAcrossGroups { source, target } => move_player(scheduler, source, target),
    }
}

/// Move `source` out of its group and insert it just before `target` in the target's group.
///
/// Ignored when confirmed, when either player is not in a group, or when both
/// share a group (dropping onto self included). Matches are left as they are.
pub fn move_player(scheduler: &mut Scheduler, source: PlayerId, target: PlayerId) -> Outcome {
    if scheduler.confirmed {
        return Outcome::Ignored(IgnoreReason::Confirmed);
    }
    let (Some(from), Some(to)) = (
        scheduler.group_index_of(source),
        scheduler.group_index_of(target),
    ) else {
        return Outcome::Ignored(IgnoreReason::UnknownPlayer);
    };
    if from == to {
        return Outcome::Ignored(IgnoreReason::SameGroup);
    }

    let Some(seat) = scheduler.groups[from].position_of(source) else {
        return Outcome::Ignored(IgnoreReason::UnknownPlayer);
    };
    let player = scheduler.groups[from].players.remove(seat);

    let target_group = &mut scheduler.groups[to];
    let insert_at = target_group.position_of(target).unwrap_or(target_group.len());
    target_group.players.insert(insert_at, player);
    Outcome::Applied
}
