//! Player and PlayerRecord data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (regenerated on every partition).
pub type PlayerId = Uuid;

/// Results view of a player (shown once the schedule is confirmed).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl PlayerRecord {
    pub fn from_player(p: &Player) -> Self {
        Self {
            wins: p.wins,
            losses: p.losses,
            ties: p.ties,
        }
    }
}

/// A player placed in a group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Identity used by matches; may repeat if the roster repeats it.
    pub email: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Player {
    /// Create a player with a fresh id and a zeroed record.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub fn record(&self) -> PlayerRecord {
        PlayerRecord::from_player(self)
    }
}

/// One roster row: the only thing the scheduler needs from a registration source.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub email: String,
}

impl RosterEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
