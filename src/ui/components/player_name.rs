use ratatui::{
    prelude::{Color, Style, Stylize},
    text::Span,
};

use super::UiComponent;

impl UiComponent {
    pub fn player_name(name: &str) -> Span<'static> {
        Span::styled(name.to_string(), Style::default().fg(Color::Yellow).bold())
    }
}
