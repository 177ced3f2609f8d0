//! Integration tests for round-robin schedule generation and due-date edits.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_scheduler_web::{
    create_schedule, generate_groups, seed_roster, update_match_due_date, DueDateRule, Group,
    IgnoreReason, Outcome, Player, RosterEntry, Scheduler,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn partitioned(n: usize, group_size: usize, rule: DueDateRule) -> Scheduler {
    let roster = (0..n).map(|i| RosterEntry::new(format!("p{i}@example.com"))).collect();
    let mut s = Scheduler::new(roster, group_size, rule).unwrap();
    generate_groups(&mut s, &mut StdRng::seed_from_u64(42)).unwrap();
    s
}

/// Scheduler with hand-built groups so seat order is known.
fn with_groups(groups: &[&[&str]], rule: DueDateRule) -> Scheduler {
    let mut s = Scheduler::new(Vec::new(), 6, rule).unwrap();
    s.groups = groups
        .iter()
        .map(|emails| Group::new(emails.iter().map(|e| Player::new(*e)).collect()))
        .collect();
    s
}

#[test]
fn six_players_one_group_gives_fifteen_matches() {
    let mut s = partitioned(6, 6, DueDateRule::Weekly);
    assert_eq!(s.groups.len(), 1);
    assert_eq!(create_schedule(&mut s, today()), Outcome::Applied);
    assert_eq!(s.matches.len(), 15);

    let pairs: HashSet<(String, String)> = s
        .matches
        .iter()
        .map(|m| {
            assert_ne!(m.player1, m.player2);
            let mut pair = [m.player1.clone(), m.player2.clone()];
            pair.sort();
            (pair[0].clone(), pair[1].clone())
        })
        .collect();
    assert_eq!(pairs.len(), 15);
}

#[test]
fn five_players_in_pairs_gives_two_matches() {
    let mut s = partitioned(5, 2, DueDateRule::Weekly);
    create_schedule(&mut s, today());
    assert_eq!(s.matches.len(), 2);
}

#[test]
fn matches_follow_group_then_seat_order() {
    let mut s = with_groups(&[&["a@x", "b@x", "c@x"], &["d@x", "e@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    let pairs: Vec<(&str, &str)> = s
        .matches
        .iter()
        .map(|m| (m.player1.as_str(), m.player2.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("a@x", "b@x"), ("a@x", "c@x"), ("b@x", "c@x"), ("d@x", "e@x")]
    );
}

#[test]
fn weekly_rule_spaces_by_later_seat() {
    let mut s = with_groups(&[&["a@x", "b@x", "c@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    let dates: Vec<NaiveDate> = s.matches.iter().map(|m| m.due_date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        ]
    );
}

#[test]
fn index_sum_rule_when_configured() {
    let mut s = with_groups(&[&["a@x", "b@x", "c@x"]], DueDateRule::IndexSum);
    create_schedule(&mut s, today());
    let offsets: Vec<i64> = s.matches.iter().map(|m| (m.due_date - today()).num_days()).collect();
    assert_eq!(offsets, vec![1, 2, 3]);
}

#[test]
fn regenerating_replaces_matches_and_edits() {
    let mut s = partitioned(8, 4, DueDateRule::Weekly);
    create_schedule(&mut s, today());
    let edited = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    update_match_due_date(&mut s, 0, edited);

    create_schedule(&mut s, today());
    assert_eq!(s.matches.len(), 12);
    assert!(s.matches.iter().all(|m| m.due_date != edited));
}

#[test]
fn matches_for_group_uses_current_membership() {
    let mut s = with_groups(&[&["a@x", "b@x"], &["c@x", "d@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    let first = s.groups[0].clone();
    let found: Vec<usize> = s.matches_for_group(&first).iter().map(|(i, _)| *i).collect();
    assert_eq!(found, vec![0]);
    let second = s.groups[1].clone();
    let found: Vec<usize> = s.matches_for_group(&second).iter().map(|(i, _)| *i).collect();
    assert_eq!(found, vec![1]);
}

#[test]
fn due_date_edit_changes_only_that_match() {
    let mut s = with_groups(&[&["a@x", "b@x", "c@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    let before = s.matches.clone();
    let new_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

    assert_eq!(update_match_due_date(&mut s, 1, new_date), Outcome::Applied);
    assert_eq!(s.matches[1].due_date, new_date);
    assert_eq!(s.matches[0], before[0]);
    assert_eq!(s.matches[2], before[2]);
}

#[test]
fn due_date_edit_out_of_range_is_ignored() {
    let mut s = with_groups(&[&["a@x", "b@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    assert_eq!(
        update_match_due_date(&mut s, 5, today()),
        Outcome::Ignored(IgnoreReason::UnknownMatch)
    );
}

#[test]
fn seed_roster_matches_belong_to_one_group_each() {
    for seed in 0..50 {
        let mut s = Scheduler::new(seed_roster(), 6, DueDateRule::Weekly).unwrap();
        generate_groups(&mut s, &mut StdRng::seed_from_u64(seed)).unwrap();
        create_schedule(&mut s, today());

        assert!(s.matches.iter().all(|m| m.player1 != m.player2));
        let mut listed = vec![0usize; s.matches.len()];
        for g in &s.groups {
            for (index, m) in s.matches_for_group(g) {
                assert_eq!(m.group_id, g.id);
                listed[index] += 1;
            }
        }
        assert!(listed.iter().all(|&n| n == 1), "seed {seed}: {listed:?}");
    }
}

#[test]
fn same_email_in_two_groups_keeps_matches_apart() {
    let mut s = with_groups(&[&["a@x", "b@x"], &["a@x", "b@x"]], DueDateRule::Weekly);
    create_schedule(&mut s, today());
    assert_eq!(s.matches.len(), 2);
    let first = s.groups[0].clone();
    let second = s.groups[1].clone();
    let found: Vec<usize> = s.matches_for_group(&first).iter().map(|(i, _)| *i).collect();
    assert_eq!(found, vec![0]);
    let found: Vec<usize> = s.matches_for_group(&second).iter().map(|(i, _)| *i).collect();
    assert_eq!(found, vec![1]);
}
