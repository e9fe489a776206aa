// src/ui/widgets/turns_history/state.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::{Game, GameOptions, Player, Turn};

/// Most turns the expanded log ever shows.
pub const EXPANDED_HISTORY_CAP: usize = 100;

pub const EXPAND_GLYPH: &str = "▼";
pub const COLLAPSE_GLYPH: &str = "▲";
pub const SYNCING_GLYPH: &str = "⏳";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryExpansion {
    #[default]
    Collapsed,
    Expanded,
}

impl HistoryExpansion {
    pub fn is_expanded(&self) -> bool {
        matches!(self, HistoryExpansion::Expanded)
    }

    pub fn toggled(self) -> Self {
        match self {
            HistoryExpansion::Collapsed => HistoryExpansion::Expanded,
            HistoryExpansion::Expanded => HistoryExpansion::Collapsed,
        }
    }

    /// Label of the expand/collapse control.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            HistoryExpansion::Collapsed => EXPAND_GLYPH,
            HistoryExpansion::Expanded => COLLAPSE_GLYPH,
        }
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryIntent {
    Toggle,
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HistoryEvent {
    Toggled(HistoryExpansion),
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct HistoryStateMachine;

impl HistoryStateMachine {
    pub fn transition(
        state: HistoryExpansion,
        intent: HistoryIntent,
    ) -> (HistoryExpansion, Vec<HistoryEvent>) {
        match intent {
            HistoryIntent::Toggle => {
                let next = state.toggled();
                debug!(from = ?state, to = ?next, "turns history toggled");
                (next, vec![HistoryEvent::Toggled(next)])
            }
        }
    }
}

// ----------------------------------------------------------------------------
// WINDOWING
// ----------------------------------------------------------------------------

/// Turns shown while collapsed: one full round minus the viewer's own turn.
pub fn collapsed_window(players_count: usize) -> usize {
    players_count.saturating_sub(1)
}

pub fn window_size(players_count: usize, expansion: HistoryExpansion) -> usize {
    match expansion {
        HistoryExpansion::Collapsed => collapsed_window(players_count),
        HistoryExpansion::Expanded => EXPANDED_HISTORY_CAP,
    }
}

pub fn can_expand(history_len: usize, players_count: usize) -> bool {
    history_len > collapsed_window(players_count)
}

pub fn show_history(options: &GameOptions, history: &[Turn]) -> bool {
    options.turns_history && !history.is_empty()
}

/// The newest turns that fit the window, most recent first.
pub fn select_visible_turns(
    history: &[Turn],
    players_count: usize,
    expansion: HistoryExpansion,
) -> Vec<&Turn> {
    let size = window_size(players_count, expansion).min(history.len());
    history[history.len() - size..].iter().rev().collect()
}

// ----------------------------------------------------------------------------
// ROWS
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct HistoryRow<'a> {
    pub turn: &'a Turn,
    /// Latest turn not yet confirmed by every client.
    pub syncing: bool,
    /// Whether the card drawn during the turn may be revealed.
    pub show_drawn: bool,
}

/// Reveal the drawn card only to other players and never during interturn.
///
/// An actor that can't be resolved counts as hidden.
pub fn reveal_drawn(actor: Option<&Player>, self_player: Option<&Player>, interturn: bool) -> bool {
    if interturn {
        return false;
    }
    match (actor, self_player) {
        (Some(actor), Some(viewer)) => !actor.is(viewer),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

pub fn history_rows<'a>(
    game: &'a Game,
    self_player: Option<&Player>,
    interturn: bool,
    expansion: HistoryExpansion,
) -> Vec<HistoryRow<'a>> {
    select_visible_turns(&game.turns_history, game.options.players_count, expansion)
        .into_iter()
        .enumerate()
        .map(|(position, turn)| HistoryRow {
            turn,
            syncing: position == 0 && !game.synced,
            show_drawn: reveal_drawn(game.actor(turn), self_player, interturn),
        })
        .collect()
}
