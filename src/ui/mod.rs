pub mod components;
pub mod screens;
pub mod style;
pub mod tutorial;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};
use crate::app::{App, AppMode};
use crate::ui::screens::{discard_pile::render_discard_pile, game::render_game};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            AppMode::Game => render_game(self, area, buf),
            AppMode::DiscardPile => render_discard_pile(self, area, buf),
        }
    }
}
