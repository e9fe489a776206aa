// src/ui/widgets/turn.rs

//! One-line description of a past turn, e.g. `Alice hinted Bob about red`.
use ratatui::text::Span;

use crate::game::{Game, Hint, PlayerIndex, Turn, TurnAction};
use crate::ui::components::UiComponent;

fn name(game: &Game, index: PlayerIndex) -> Span<'static> {
    match game.player(index) {
        Some(player) => UiComponent::player_name(&player.name),
        None => Span::raw("?"),
    }
}

fn hint_label(hint: &Hint) -> Span<'static> {
    match hint {
        Hint::Color(color) => Span::styled(
            color.name(),
            ratatui::style::Style::default().fg(color.terminal_color()),
        ),
        Hint::Number(number) => Span::raw(format!("{}s", number)),
    }
}

pub fn turn_spans(game: &Game, turn: &Turn, show_drawn: bool) -> Vec<Span<'static>> {
    let mut spans = match &turn.action {
        TurnAction::Hint { from, to, hint } => vec![
            name(game, *from),
            Span::raw(" hinted "),
            name(game, *to),
            Span::raw(" about "),
            hint_label(hint),
        ],
        TurnAction::Play { from, card } => vec![
            name(game, *from),
            Span::raw(" played "),
            UiComponent::card(card),
        ],
        TurnAction::Discard { from, card } => vec![
            name(game, *from),
            Span::raw(" discarded "),
            UiComponent::card(card),
        ],
    };

    if show_drawn {
        if let Some(drawn) = &turn.drawn {
            spans.push(Span::raw(", drew "));
            spans.push(UiComponent::card(drawn));
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Card, CardColor, GameOptions, Player};

    fn plain(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn game() -> Game {
        Game {
            players: vec![Player::new("Alice"), Player::new("Bob")],
            options: GameOptions { players_count: 2, turns_history: true },
            ..Game::default()
        }
    }

    #[test]
    fn test_describes_each_action() {
        let game = game();
        let hint = Turn::new(TurnAction::Hint { from: 0, to: 1, hint: Hint::Color(CardColor::Red) });
        let numbers = Turn::new(TurnAction::Hint { from: 1, to: 0, hint: Hint::Number(3) });
        let play = Turn::new(TurnAction::Play { from: 1, card: Card::new(CardColor::Blue, 2) });
        let discard = Turn::new(TurnAction::Discard { from: 0, card: Card::new(CardColor::White, 5) });

        assert_eq!(plain(&turn_spans(&game, &hint, true)), "Alice hinted Bob about red");
        assert_eq!(plain(&turn_spans(&game, &numbers, true)), "Bob hinted Alice about 3s");
        assert_eq!(plain(&turn_spans(&game, &play, true)), "Bob played B2");
        assert_eq!(plain(&turn_spans(&game, &discard, true)), "Alice discarded W5");
    }

    #[test]
    fn test_drawn_card_only_when_allowed() {
        let game = game();
        let play = Turn::new(TurnAction::Play { from: 0, card: Card::new(CardColor::Red, 1) })
            .with_drawn(Card::new(CardColor::Yellow, 4));

        assert_eq!(plain(&turn_spans(&game, &play, true)), "Alice played R1, drew Y4");
        assert_eq!(plain(&turn_spans(&game, &play, false)), "Alice played R1");
    }

    #[test]
    fn test_unknown_player_index() {
        let game = game();
        let play = Turn::new(TurnAction::Play { from: 7, card: Card::new(CardColor::Red, 1) });

        assert_eq!(plain(&turn_spans(&game, &play, false)), "? played R1");
    }
}
