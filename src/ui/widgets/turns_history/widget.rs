// src/ui/widgets/turns_history/widget.rs
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};
use tui_scrollview::{ScrollView, ScrollViewState};

use super::state::{HistoryExpansion, HistoryRow, SYNCING_GLYPH};
use crate::game::Game;
use crate::ui::style;
use crate::ui::widgets::turn::turn_spans;

/// Scrollable log of the visible turns, newest at the top.
#[derive(Debug)]
pub struct TurnsHistoryWidget<'a> {
    game: &'a Game,
    rows: Vec<HistoryRow<'a>>,
    expansion: HistoryExpansion,
    can_expand: bool,
    pulse_clock: Duration,
    pulse_period: Duration,
}

impl<'a> TurnsHistoryWidget<'a> {
    pub fn new(
        game: &'a Game,
        rows: Vec<HistoryRow<'a>>,
        expansion: HistoryExpansion,
        can_expand: bool,
    ) -> Self {
        Self {
            game,
            rows,
            expansion,
            can_expand,
            pulse_clock: Duration::ZERO,
            pulse_period: Duration::from_millis(2000),
        }
    }

    pub fn pulse(mut self, clock: Duration, period: Duration) -> Self {
        self.pulse_clock = clock;
        self.pulse_period = period;
        self
    }

    fn row_line(&self, row: &HistoryRow) -> Line<'static> {
        let mut spans = turn_spans(self.game, row.turn, row.show_drawn);
        if !row.syncing {
            return Line::from(spans);
        }

        spans.push(Span::styled(format!(" {}", SYNCING_GLYPH), style::muted()));
        Line::from(spans).style(style::pulse(Style::default(), self.pulse_clock, self.pulse_period))
    }

    fn block(&self) -> Block<'static> {
        let title = format!(" Turns ({}/{}) ", self.rows.len(), self.game.turns_history.len());
        let block = Block::bordered()
            .title(title)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.can_expand {
            let toggle = format!(" {} [e] ", self.expansion.toggle_glyph());
            block.title_top(Line::from(toggle).right_aligned())
        } else {
            block
        }
    }
}

impl StatefulWidget for TurnsHistoryWidget<'_> {
    type State = ScrollViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let lines: Vec<Line> = self.rows.iter().map(|row| self.row_line(row)).collect();
        let content_height = lines.len() as u16;

        // Leave a column for the scrollbar once rows overflow
        let width = if content_height > inner.height {
            inner.width.saturating_sub(1)
        } else {
            inner.width
        };

        let mut scroll_view = ScrollView::new(Size::new(width, content_height));
        scroll_view.render_widget(Paragraph::new(lines), Rect::new(0, 0, width, content_height));
        scroll_view.render(inner, buf, state);
    }
}
