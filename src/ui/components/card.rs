use ratatui::{
    prelude::{Style, Stylize},
    text::Span,
};

use super::UiComponent;
use crate::game::Card;

impl UiComponent {
    /// Compact `R3`-style label in the card's own color.
    pub fn card(card: &Card) -> Span<'static> {
        Span::styled(card.to_string(), Style::default().fg(card.color.terminal_color()).bold())
    }
}
