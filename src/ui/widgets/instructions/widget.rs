// src/ui/widgets/instructions/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use super::state::{
    waiting_name, Instruction, DISCARD_LINK, HELP_TIPS, WAITING_PREFIX, WAITING_SUFFIX,
};
use crate::ui::components::UiComponent;
use crate::ui::style;

/// Renders the selected instruction. Stateless: the help tips are open or
/// closed as the caller says.
#[derive(Debug)]
pub struct InstructionsWidget<'a> {
    instruction: Instruction<'a>,
    help_open: bool,
}

impl<'a> InstructionsWidget<'a> {
    pub fn new(instruction: Instruction<'a>, help_open: bool) -> Self {
        Self { instruction, help_open }
    }

    /// Rows needed to draw the instruction without clipping.
    pub fn height(&self) -> u16 {
        match self.instruction {
            Instruction::ActiveTurn if self.help_open => 2 + HELP_TIPS.len() as u16,
            Instruction::ActiveTurn => 2,
            _ => 1,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.instruction {
            Instruction::GameOver { .. } => {
                vec![Line::styled(self.instruction.headline(), style::heading())]
            }
            Instruction::Waiting { current_player } => {
                let name = waiting_name(current_player);
                let name = match current_player {
                    Some(_) => UiComponent::player_name(&name),
                    None => Span::raw(name),
                };
                vec![Line::from(vec![Span::raw(WAITING_PREFIX), name, Span::raw(WAITING_SUFFIX)])
                    .style(style::heading())]
            }
            Instruction::ActiveTurn => {
                let mut lines = vec![Line::from(vec![
                    Span::styled(self.instruction.headline(), style::heading()),
                    Span::styled("  ⓘ", style::muted()),
                ])];
                if self.help_open {
                    lines.extend(
                        HELP_TIPS
                            .iter()
                            .map(|tip| Line::styled(*tip, style::muted().italic())),
                    );
                }
                lines.push(Line::from(vec![
                    Span::styled(DISCARD_LINK, style::link()),
                    Span::styled(" [d]", style::muted()),
                ]));
                lines
            }
        }
    }
}

impl Widget for InstructionsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(self.lines()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn first_row(widget: InstructionsWidget) -> String {
        let area = Rect::new(0, 0, 40, widget.height());
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_waiting_line_matches_headline() {
        let bob = Player::new("Bob");
        for current_player in [Some(&bob), None] {
            let instruction = Instruction::Waiting { current_player };
            let rendered = first_row(InstructionsWidget::new(instruction, false));
            assert_eq!(rendered, instruction.headline());
        }
    }

    #[test]
    fn test_active_turn_height_grows_with_help() {
        assert_eq!(InstructionsWidget::new(Instruction::ActiveTurn, false).height(), 2);
        assert_eq!(InstructionsWidget::new(Instruction::ActiveTurn, true).height(), 4);
    }
}
