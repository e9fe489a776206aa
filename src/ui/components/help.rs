use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Footer legend built from `(key, action)` pairs.
    pub fn help(bindings: &[(&'static str, &'static str)]) -> Paragraph<'static> {
        let spans: Vec<Span> = bindings
            .iter()
            .enumerate()
            .flat_map(|(i, (key, action))| {
                let separator = if i == 0 { "" } else { "  " };
                [
                    Span::raw(separator),
                    Span::styled(*key, Style::default().fg(Color::White)),
                    Span::raw(format!(" {}", action)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
    }
}
