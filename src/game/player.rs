// src/game/player.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::Card;

/// Stable identity of a seat in the session. Players are compared by id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn is(&self, other: &Player) -> bool {
        self.id == other.id
    }
}

/// Identity comparison of two optional players. Absent on either side never matches.
pub fn same_player(a: Option<&Player>, b: Option<&Player>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.is(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_fields() {
        let alice = Player::new("Alice");
        let mut renamed = alice.clone();
        renamed.name = "Bob".to_string();
        let other_alice = Player::new("Alice");

        assert!(alice.is(&renamed));
        assert!(!alice.is(&other_alice));
    }

    #[test]
    fn test_absent_players_never_match() {
        let alice = Player::new("Alice");
        assert!(same_player(Some(&alice), Some(&alice)));
        assert!(!same_player(Some(&alice), None));
        assert!(!same_player(None, Some(&alice)));
        assert!(!same_player(None, None));
    }
}
