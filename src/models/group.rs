//! Group: an ordered slice of the roster scheduled independently.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Order drives both display and the due-date offset of each pairing.
    pub players: Vec<Player>,
}

impl Group {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            players,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Position of a player within this group.
    pub fn position_of(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.position_of(player_id).is_some()
    }

    /// Current member emails, used to work out which matches belong here.
    pub fn emails(&self) -> HashSet<&str> {
        self.players.iter().map(|p| p.email.as_str()).collect()
    }
}
