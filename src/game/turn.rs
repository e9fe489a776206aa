// src/game/turn.rs
use serde::{Deserialize, Serialize};

use super::card::{Card, CardColor};

/// Index into `Game::players`.
pub type PlayerIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    Color(CardColor),
    Number(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TurnAction {
    Hint {
        from: PlayerIndex,
        to: PlayerIndex,
        hint: Hint,
    },
    Play {
        from: PlayerIndex,
        card: Card,
    },
    Discard {
        from: PlayerIndex,
        card: Card,
    },
}

impl TurnAction {
    /// The player who took the action.
    pub fn from(&self) -> PlayerIndex {
        match self {
            TurnAction::Hint { from, .. }
            | TurnAction::Play { from, .. }
            | TurnAction::Discard { from, .. } => *from,
        }
    }
}

/// One past action, as recorded by the game state. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub action: TurnAction,
    /// Card the actor drew to refill their hand, if any.
    #[serde(default)]
    pub drawn: Option<Card>,
}

impl Turn {
    pub fn new(action: TurnAction) -> Self {
        Self { action, drawn: None }
    }

    pub fn with_drawn(mut self, card: Card) -> Self {
        self.drawn = Some(card);
        self
    }
}
