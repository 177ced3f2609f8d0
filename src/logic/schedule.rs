//! Round-robin schedule generation per group.

use crate::models::{DueDateRule, Group, IgnoreReason, Outcome, ScheduledMatch, Scheduler};
use chrono::NaiveDate;

/// Every seat pair `(i, j)` with `i < j` for a group of `n`, `i` then `j` ascending.
pub fn round_robin_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// All pairings of one group, due `rule.offset_days(i, j)` days after `base_date`.
///
/// Seats holding the same email are never paired with each other.
pub fn group_matches(group: &Group, base_date: NaiveDate, rule: DueDateRule) -> Vec<ScheduledMatch> {
    round_robin_pairs(group.len())
        .filter(|&(i, j)| group.players[i].email != group.players[j].email)
        .map(|(i, j)| {
            ScheduledMatch::new(
                group.id,
                &group.players[i].email,
                &group.players[j].email,
                rule.due_date(base_date, i, j),
            )
        })
        .collect()
}

/// Build the match schedule from the current groups, replacing any previous one
/// (manual due-date edits included). Ignored once confirmed.
pub fn create_schedule(scheduler: &mut Scheduler, base_date: NaiveDate) -> Outcome {
    if scheduler.confirmed {
        return Outcome::Ignored(IgnoreReason::Confirmed);
    }
    let rule = scheduler.due_date_rule;
    scheduler.matches = scheduler
        .groups
        .iter()
        .flat_map(|g| group_matches(g, base_date, rule))
        .collect();
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_ordered_and_complete() {
        let pairs: Vec<_> = round_robin_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn repeated_email_is_not_paired_with_itself() {
        let group = Group::new(vec![
            crate::models::Player::new("a@x"),
            crate::models::Player::new("b@x"),
            crate::models::Player::new("a@x"),
        ]);
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let matches = group_matches(&group, base, DueDateRule::Weekly);
        let pairs: Vec<(&str, &str)> = matches
            .iter()
            .map(|m| (m.player1.as_str(), m.player2.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a@x", "b@x"), ("b@x", "a@x")]);
        assert!(matches.iter().all(|m| m.group_id == group.id));
    }

    #[test]
    fn tiny_groups_have_no_pairs() {
        assert_eq!(round_robin_pairs(0).count(), 0);
        assert_eq!(round_robin_pairs(1).count(), 0);
    }
}
