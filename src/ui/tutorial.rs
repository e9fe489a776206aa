// src/ui/tutorial.rs

//! Onboarding highlight drawn around a piece of the screen.
//!
//! Which step is active is decided by whoever runs the tutorial; a wrapper
//! only knows the step it belongs to.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Widget},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorialStep {
    Welcome,
}

impl TutorialStep {
    pub fn caption(&self) -> &'static str {
        match self {
            TutorialStep::Welcome => "Welcome! What to do next always shows up here [Enter]",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tutorial {
    step: TutorialStep,
    active: Option<TutorialStep>,
}

impl Tutorial {
    pub fn new(step: TutorialStep) -> Self {
        Self { step, active: None }
    }

    pub fn active(mut self, active: Option<TutorialStep>) -> Self {
        self.active = active;
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.active == Some(self.step)
    }

    /// Extra rows the wrapper takes around its content.
    pub fn overhead(&self) -> u16 {
        if self.is_highlighted() { 2 } else { 0 }
    }

    /// Draw the decoration and return the area left for the wrapped content.
    pub fn wrap(&self, area: Rect, buf: &mut Buffer) -> Rect {
        if !self.is_highlighted() {
            return area;
        }

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Magenta).bold())
            .title_bottom(Line::from(format!(" {} ", self.step.caption())).centered());
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }
}
