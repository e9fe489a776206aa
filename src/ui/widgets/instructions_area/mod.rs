// src/ui/widgets/instructions_area/mod.rs

//! The turn panel: what the viewer should do now, and what happened lately.
//!
//! Everything except the expand/collapse state of the history is recomputed
//! from [`PanelProps`] on every call, so the panel never holds on to the game
//! snapshot between renders.
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tui_scrollview::ScrollViewState;

use super::instructions::{Instruction, InstructionsWidget};
use super::turns_history::state::{can_expand, history_rows, show_history};
use super::turns_history::{
    HistoryExpansion, HistoryIntent, HistoryRow, HistoryStateMachine, TurnsHistoryWidget,
};
use crate::game::player::same_player;
use crate::game::{Game, Player};
use crate::log_debug;
use crate::ui::tutorial::{Tutorial, TutorialStep};

/// What the host hands the panel for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct PanelProps<'a> {
    pub game: &'a Game,
    pub self_player: Option<&'a Player>,
    /// A device-handoff screen is showing.
    pub interturn: bool,
    pub help_open: bool,
    pub tutorial: Option<TutorialStep>,
    /// Time since the host started, drives the syncing pulse.
    pub pulse_clock: Duration,
    pub pulse_period: Duration,
}

impl<'a> PanelProps<'a> {
    pub fn new(game: &'a Game, self_player: Option<&'a Player>) -> Self {
        Self {
            game,
            self_player,
            interturn: false,
            help_open: false,
            tutorial: None,
            pulse_clock: Duration::ZERO,
            pulse_period: Duration::from_millis(2000),
        }
    }
}

/// Values derived from the props; never stored.
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    pub current_player: Option<&'a Player>,
    pub is_current_player: bool,
    pub can_expand: bool,
    pub show_history: bool,
    pub instruction: Instruction<'a>,
}

impl<'a> PanelContext<'a> {
    pub fn derive(props: &PanelProps<'a>) -> Self {
        let game = props.game;
        let current_player = game.current_player();
        let is_current_player = same_player(current_player, props.self_player);

        Self {
            current_player,
            is_current_player,
            can_expand: can_expand(game.turns_history.len(), game.options.players_count),
            show_history: show_history(&game.options, &game.turns_history),
            instruction: Instruction::select(
                game.status,
                is_current_player,
                game.score(),
                current_player,
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct InstructionsArea {
    expansion: HistoryExpansion,
    scroll: ScrollViewState,
}

impl InstructionsArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> HistoryExpansion {
        self.expansion
    }

    /// Press the expand/collapse control. Returns false when the control
    /// isn't on screen.
    pub fn toggle_history(&mut self, props: &PanelProps) -> bool {
        let context = PanelContext::derive(props);
        if !context.show_history || !context.can_expand {
            return false;
        }

        let (expansion, events) = HistoryStateMachine::transition(self.expansion, HistoryIntent::Toggle);
        self.expansion = expansion;
        self.scroll.scroll_to_top();

        for event in events {
            log_debug!("turns history: {:?}", event);
        }
        true
    }

    /// Press the "check discarded cards" link, calling `on_select_discard`
    /// once if the link is on screen.
    pub fn select_discard<F: FnOnce()>(&self, props: &PanelProps, on_select_discard: F) -> bool {
        PanelContext::derive(props)
            .instruction
            .activate_discard_link(on_select_discard)
    }

    pub fn scroll_history_up(&mut self) {
        self.scroll.scroll_up();
    }

    pub fn scroll_history_down(&mut self) {
        self.scroll.scroll_down();
    }

    /// Rows the history would show right now, newest first. Empty when the
    /// history is hidden.
    pub fn visible_rows<'a>(&self, props: &PanelProps<'a>) -> Vec<HistoryRow<'a>> {
        if !show_history(&props.game.options, &props.game.turns_history) {
            return Vec::new();
        }
        history_rows(props.game, props.self_player, props.interturn, self.expansion)
    }

    pub fn render(&mut self, props: &PanelProps, area: Rect, buf: &mut Buffer) {
        let context = PanelContext::derive(props);

        let instructions = InstructionsWidget::new(context.instruction, props.help_open);
        let tutorial = Tutorial::new(TutorialStep::Welcome).active(props.tutorial);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(instructions.height() + tutorial.overhead()),
                Constraint::Length(1), // Spacing
                Constraint::Min(0),    // History
            ])
            .split(area);

        let inner = tutorial.wrap(chunks[0], buf);
        instructions.render(inner, buf);

        if !context.show_history {
            return;
        }

        let rows = self.visible_rows(props);
        TurnsHistoryWidget::new(props.game, rows, self.expansion, context.can_expand)
            .pulse(props.pulse_clock, props.pulse_period)
            .render(chunks[2], buf, &mut self.scroll);
    }
}
