use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use crate::app::App;
use crate::game::{Card, CardColor};
use crate::ui::components::UiComponent;
use crate::util::string::StringUtils;

/// Discarded cards grouped by color, lowest numbers first.
pub fn discard_lines(discards: &[Card]) -> Vec<Line<'static>> {
    CardColor::ALL
        .iter()
        .filter_map(|color| {
            let mut cards: Vec<&Card> = discards.iter().filter(|c| c.color == *color).collect();
            if cards.is_empty() {
                return None;
            }
            cards.sort_by_key(|c| c.number);

            let mut spans = vec![Span::styled(
                format!("{:<11}", color.name()),
                Style::default().fg(color.terminal_color()),
            )];
            for card in cards {
                spans.push(Span::raw(" "));
                spans.push(UiComponent::card(card));
            }
            Some(Line::from(spans))
        })
        .collect()
}

pub fn render_discard_pile(app: &mut App, area: Rect, buf: &mut Buffer) {
    let discards = &app.game.discard_pile;

    if discards.is_empty() {
        UiComponent::empty_message("Nothing has been discarded yet · Esc to go back", Some(Color::Gray))
            .render(area, buf);
        return;
    }

    let title = format!(
        " Discard pile ({}) · Esc to go back ",
        StringUtils::maybe_pluralize_count(discards.len(), ("card", "cards"))
    );

    Paragraph::new(discard_lines(discards))
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
        )
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_groups_by_color_in_order() {
        let discards = vec![
            Card::new(CardColor::Blue, 4),
            Card::new(CardColor::Red, 2),
            Card::new(CardColor::Blue, 1),
        ];

        let lines = discard_lines(&discards);
        assert_eq!(lines.len(), 2);
        assert_eq!(plain(&lines[0]).trim_end(), "red         R2");
        assert_eq!(plain(&lines[1]).trim_end(), "blue        B1 B4");
    }
}
