//! Group partitioning: shuffle the roster and slice it into fixed-size groups.

use crate::models::{
    Group, GroupId, IgnoreReason, Outcome, Player, RosterEntry, Scheduler, SchedulerError,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Exclusive upper bound for the random display label of a group.
pub const GROUP_LABEL_LIMIT: u32 = 1000;

/// Split a roster into groups of `group_size` (the last one may be shorter).
///
/// 1. Shuffle a copy of the roster uniformly.
/// 2. Slice into consecutive chunks.
/// 3. Give every player a fresh id and a zeroed record, every group a fresh id and a label.
pub fn partition_roster<R: Rng + ?Sized>(
    roster: &[RosterEntry],
    group_size: usize,
    rng: &mut R,
) -> Result<(Vec<Group>, HashMap<GroupId, u32>), SchedulerError> {
    if group_size == 0 {
        return Err(SchedulerError::InvalidGroupSize(0));
    }

    let mut shuffled: Vec<&RosterEntry> = roster.iter().collect();
    shuffled.shuffle(rng);

    let mut labels = HashMap::new();
    let groups: Vec<Group> = shuffled
        .chunks(group_size)
        .map(|chunk| {
            let players = chunk.iter().map(|entry| Player::new(&entry.email)).collect();
            let group = Group::new(players);
            labels.insert(group.id, rng.gen_range(0..GROUP_LABEL_LIMIT));
            group
        })
        .collect();

    Ok((groups, labels))
}

/// Regenerate all groups from the roster and drop every match. Ignored once confirmed.
pub fn generate_groups<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    rng: &mut R,
) -> Result<Outcome, SchedulerError> {
    if scheduler.confirmed {
        return Ok(Outcome::Ignored(IgnoreReason::Confirmed));
    }
    let (groups, labels) = partition_roster(&scheduler.roster, scheduler.group_size, rng)?;
    install_groups(scheduler, groups, labels);
    Ok(Outcome::Applied)
}

/// Swap in a new partition; any schedule built on the old groups is dropped.
fn install_groups(scheduler: &mut Scheduler, groups: Vec<Group>, labels: HashMap<GroupId, u32>) {
    scheduler.groups = groups;
    scheduler.group_labels = labels;
    scheduler.matches.clear();
}

/// Change the group size and repartition. Sizes below 1 are rejected and leave state as is.
pub fn set_group_size<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    group_size: i64,
    rng: &mut R,
) -> Result<Outcome, SchedulerError> {
    if scheduler.confirmed {
        return Ok(Outcome::Ignored(IgnoreReason::Confirmed));
    }
    let size = usize::try_from(group_size)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(SchedulerError::InvalidGroupSize(group_size))?;
    scheduler.group_size = size;
    generate_groups(scheduler, rng)
}

/// Replace the roster and repartition with the current group size.
pub fn set_roster<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    roster: Vec<RosterEntry>,
    rng: &mut R,
) -> Result<Outcome, SchedulerError> {
    if scheduler.confirmed {
        return Ok(Outcome::Ignored(IgnoreReason::Confirmed));
    }
    let (groups, labels) = partition_roster(&roster, scheduler.group_size, rng)?;
    scheduler.roster = roster;
    install_groups(scheduler, groups, labels);
    Ok(Outcome::Applied)
}
