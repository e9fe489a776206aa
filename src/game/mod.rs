// src/game/mod.rs

//! Read-only snapshot of the shared game state the panel renders from.
//!
//! The game rules, turn-taking and synchronisation all live outside this
//! crate; these types only describe what a client currently knows.

pub mod card;
pub mod demo;
pub mod player;
pub mod source;
pub mod turn;

use serde::{Deserialize, Serialize};

pub use card::{Card, CardColor};
pub use player::{Player, PlayerId};
pub use turn::{Hint, PlayerIndex, Turn, TurnAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Lobby,
    #[default]
    Ongoing,
    Over,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOptions {
    pub players_count: usize,
    /// Feature flag for the turns history log.
    #[serde(default = "default_turns_history")]
    pub turns_history: bool,
}

fn default_turns_history() -> bool {
    true
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players_count: 2,
            turns_history: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub played_cards: Vec<Card>,
    #[serde(default)]
    pub discard_pile: Vec<Card>,
    /// Oldest first.
    #[serde(default)]
    pub turns_history: Vec<Turn>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub current_player: PlayerIndex,
    #[serde(default)]
    pub options: GameOptions,
    /// False while the latest turn has not been confirmed by every client.
    #[serde(default = "default_synced")]
    pub synced: bool,
}

fn default_synced() -> bool {
    true
}

impl Default for Game {
    fn default() -> Self {
        Self {
            status: GameStatus::default(),
            played_cards: Vec::new(),
            discard_pile: Vec::new(),
            turns_history: Vec::new(),
            players: Vec::new(),
            current_player: 0,
            options: GameOptions::default(),
            synced: default_synced(),
        }
    }
}

impl Game {
    pub fn player(&self, index: PlayerIndex) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current_player)
    }

    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Player who took `turn`, if the recorded index is known.
    pub fn actor(&self, turn: &Turn) -> Option<&Player> {
        self.player(turn.action.from())
    }

    /// Number of successfully played cards.
    pub fn score(&self) -> usize {
        self.played_cards.len()
    }
}
