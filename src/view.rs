//! Read-only projection of a scheduler as rendered by the widget.

use crate::models::{
    DueDateRule, GroupId, PlayerId, PlayerRecord, ScheduledMatch, Scheduler, SchedulerId,
};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub email: String,
    /// Present only once the schedule is confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<PlayerRecord>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MatchView {
    /// Position in the flat match list; due-date edits address this.
    pub index: usize,
    #[serde(flatten)]
    pub scheduled: ScheduledMatch,
}

#[derive(Clone, Debug, Serialize)]
pub struct GroupView {
    pub id: GroupId,
    pub label: u32,
    pub players: Vec<PlayerView>,
    pub matches: Vec<MatchView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SchedulerView {
    pub id: SchedulerId,
    pub group_size: usize,
    pub due_date_rule: DueDateRule,
    pub confirmed: bool,
    pub roster_size: usize,
    pub match_count: usize,
    pub groups: Vec<GroupView>,
}

impl SchedulerView {
    pub fn from_scheduler(s: &Scheduler) -> Self {
        let groups = s
            .groups
            .iter()
            .map(|g| GroupView {
                id: g.id,
                label: s.label_of(g.id),
                players: g
                    .players
                    .iter()
                    .map(|p| PlayerView {
                        id: p.id,
                        email: p.email.clone(),
                        record: s.confirmed.then(|| p.record()),
                    })
                    .collect(),
                matches: s
                    .matches_for_group(g)
                    .into_iter()
                    .map(|(index, m)| MatchView {
                        index,
                        scheduled: m.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: s.id,
            group_size: s.group_size,
            due_date_rule: s.due_date_rule,
            confirmed: s.confirmed,
            roster_size: s.roster.len(),
            match_count: s.matches.len(),
            groups,
        }
    }
}
