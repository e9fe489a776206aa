// src/ui/widgets/instructions/state.rs
use crate::game::{GameStatus, Player};

pub const HELP_TIPS: [&str; 2] = [
    "Give a hint by tapping on your playmates' hand",
    "Play or discard by tapping on your own game",
];

pub const DISCARD_LINK: &str = "Check discarded cards";

/// Shown in place of a name when the current player is unknown.
pub const UNKNOWN_PLAYER: &str = "another player";

/// Text around the current player's name while waiting.
pub const WAITING_PREFIX: &str = "IT'S ";
pub const WAITING_SUFFIX: &str = "'S TURN";

/// Name as the waiting message shows it.
pub fn waiting_name(current_player: Option<&Player>) -> String {
    current_player
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PLAYER)
        .to_uppercase()
}

// ----------------------------------------------------------------------------
// SELECTION - exactly one message for every (status, is_current_player)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum Instruction<'a> {
    GameOver { score: usize },
    Waiting { current_player: Option<&'a Player> },
    ActiveTurn,
}

impl<'a> Instruction<'a> {
    pub fn select(
        status: GameStatus,
        is_current_player: bool,
        self_score: usize,
        current_player: Option<&'a Player>,
    ) -> Self {
        match (status, is_current_player) {
            (GameStatus::Over, _) => Instruction::GameOver { score: self_score },
            (_, false) => Instruction::Waiting { current_player },
            (_, true) => Instruction::ActiveTurn,
        }
    }

    pub fn headline(&self) -> String {
        match self {
            Instruction::GameOver { score } => {
                format!("The game is over! Your score is {} 🎉", score)
            }
            Instruction::Waiting { current_player } => {
                format!("{}{}{}", WAITING_PREFIX, waiting_name(*current_player), WAITING_SUFFIX)
            }
            Instruction::ActiveTurn => "Your turn!".to_uppercase(),
        }
    }

    pub fn is_active_turn(&self) -> bool {
        matches!(self, Instruction::ActiveTurn)
    }

    /// Activate the "check discarded cards" link.
    ///
    /// The link only exists on the active-turn message; elsewhere this does
    /// nothing and returns false.
    pub fn activate_discard_link<F: FnOnce()>(&self, on_select_discard: F) -> bool {
        match self {
            Instruction::ActiveTurn => {
                on_select_discard();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN_PROGRESS: [GameStatus; 2] = [GameStatus::Lobby, GameStatus::Ongoing];

    #[test]
    fn test_over_always_wins() {
        let bob = Player::new("Bob");
        for is_current in [true, false] {
            let instruction = Instruction::select(GameStatus::Over, is_current, 17, Some(&bob));
            assert!(matches!(instruction, Instruction::GameOver { score: 17 }));
            assert_eq!(instruction.headline(), "The game is over! Your score is 17 🎉");
        }
    }

    #[test]
    fn test_waiting_names_current_player() {
        let bob = Player::new("Bob");
        for status in IN_PROGRESS {
            let instruction = Instruction::select(status, false, 0, Some(&bob));
            assert!(matches!(instruction, Instruction::Waiting { .. }));
            assert_eq!(instruction.headline(), "IT'S BOB'S TURN");
        }
    }

    #[test]
    fn test_waiting_without_current_player() {
        let instruction = Instruction::select(GameStatus::Ongoing, false, 0, None);
        assert_eq!(instruction.headline(), "IT'S ANOTHER PLAYER'S TURN");
    }

    #[test]
    fn test_active_turn_for_current_player() {
        for status in IN_PROGRESS {
            let instruction = Instruction::select(status, true, 3, None);
            assert!(instruction.is_active_turn());
            assert_eq!(instruction.headline(), "YOUR TURN!");
        }
    }

    #[test]
    fn test_discard_link_calls_back_once() {
        let mut calls = 0;
        let activated = Instruction::ActiveTurn.activate_discard_link(|| calls += 1);

        assert!(activated);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_discard_link_absent_outside_active_turn() {
        let mut calls = 0;
        let over = Instruction::GameOver { score: 2 };
        let waiting = Instruction::Waiting { current_player: None };

        assert!(!over.activate_discard_link(|| calls += 1));
        assert!(!waiting.activate_discard_link(|| calls += 1));
        assert_eq!(calls, 0);
    }
}
