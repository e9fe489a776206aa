use crate::config::PanelConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::game::{demo::demo_game, source::load_game, Game, Player, PlayerId};
use crate::ui::tutorial::TutorialStep;
use crate::ui::widgets::turns_history::state::show_history;
use crate::ui::widgets::{InstructionsArea, PanelProps};
use crate::{log_debug, log_error, log_info, log_warn};
use ratatui::{
    DefaultTerminal,
    buffer::Buffer,
    layout::Rect,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Game,
    DiscardPile,
}

/// Host-owned flags the panel reads but never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelView {
    pub interturn: bool,
    pub help_open: bool,
    pub tutorial: Option<TutorialStep>,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current screen
    pub mode: AppMode,
    /// Latest game snapshot
    pub game: Game,
    /// Seat of the local viewer
    pub self_player: Option<PlayerId>,
    pub view: PanelView,
    /// The turn panel and its expand/collapse state
    pub instructions: InstructionsArea,
    pub config: PanelConfig,
    /// Event handler.
    pub events: EventHandler,
    pub start_time: Instant,
    /// Last load failure, shown in the header
    pub status_message: Option<String>,
}

fn panel_props<'a>(
    game: &'a Game,
    self_player: Option<PlayerId>,
    view: PanelView,
    clock: Duration,
    period: Duration,
) -> PanelProps<'a> {
    PanelProps {
        game,
        self_player: self_player.and_then(|id| game.find_player(id)),
        interturn: view.interturn,
        help_open: view.help_open,
        tutorial: view.tutorial,
        pulse_clock: clock,
        pulse_period: period,
    }
}

/// Seat for `name`, falling back to the first player.
fn resolve_seat(game: &Game, name: Option<&str>) -> Option<PlayerId> {
    if let Some(name) = name {
        match game.player_by_name(name) {
            Some(player) => return Some(player.id),
            None => log_warn!("No player named {} in the game, using the first seat", name),
        }
    }
    game.players.first().map(|p| p.id)
}

impl App {
    /// Constructs a new instance of [`App`] reading terminal events.
    pub fn new(config: PanelConfig) -> Result<Self> {
        Self::with_events(config, EventHandler::new())
    }

    pub fn with_events(config: PanelConfig, events: EventHandler) -> Result<Self> {
        let game = Self::load_game(&config)?;
        let self_player = resolve_seat(&game, config.self_player.as_deref());
        let view = PanelView {
            tutorial: config.tutorial.then_some(TutorialStep::Welcome),
            ..PanelView::default()
        };

        Ok(Self {
            running: true,
            mode: AppMode::Game,
            game,
            self_player,
            view,
            instructions: InstructionsArea::new(),
            config,
            events,
            start_time: Instant::now(),
            status_message: None,
        })
    }

    fn load_game(config: &PanelConfig) -> crate::error::Result<Game> {
        match &config.game_path {
            Some(path) => load_game(path),
            None => {
                log_info!(
                    "No game snapshot configured, generating a {} player demo game",
                    config.demo_players
                );
                Ok(demo_game(config.demo_players, config.demo_turns, &mut rand::thread_rng()))
            }
        }
    }

    pub fn self_player(&self) -> Option<&Player> {
        self.self_player.and_then(|id| self.game.find_player(id))
    }

    pub fn clock(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn render_panel(&mut self, area: Rect, buf: &mut Buffer) {
        let props = panel_props(
            &self.game,
            self.self_player,
            self.view,
            self.clock(),
            self.config.pulse_period(),
        );
        self.instructions.render(&props, area, buf);
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(Event::Tick) => {
                    // Only the syncing pulse animates
                    needs_redraw = self.is_pulsing();
                }
                Ok(Event::Crossterm(crossterm::event::Event::Key(key_event))) => {
                    self.handle_key_events(key_event)?;
                }
                Ok(Event::Crossterm(crossterm::event::Event::Resize(_, _))) => needs_redraw = true,
                Ok(Event::Crossterm(_)) => {}
                Ok(Event::App(app_event)) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
                Err(e) => log_error!("Event error: {}", e),
            }
        }
        Ok(())
    }

    pub fn is_pulsing(&self) -> bool {
        self.mode == AppMode::Game
            && !self.game.synced
            && show_history(&self.game.options, &self.game.turns_history)
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return Ok(());
            }
        }

        if self.mode == AppMode::DiscardPile {
            match key_event.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('d') => self.events.send(AppEvent::Back),
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('e') => self.events.send(AppEvent::ToggleHistory),
            KeyCode::Char('d') => self.events.send(AppEvent::SelectDiscard),
            KeyCode::Char('i') => self.events.send(AppEvent::ToggleHelp),
            KeyCode::Char('t') => self.events.send(AppEvent::ToggleInterturn),
            KeyCode::Char('p') => self.events.send(AppEvent::NextSeat),
            KeyCode::Char('r') => self.events.send(AppEvent::ReloadGame),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::ScrollHistoryUp),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::ScrollHistoryDown),
            KeyCode::Enter => self.events.send(AppEvent::DismissTutorial),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        log_debug!("App event: {:?}", app_event);

        match app_event {
            AppEvent::ToggleHistory => self.toggle_history(),
            AppEvent::SelectDiscard => self.select_discard(),
            AppEvent::ToggleHelp => self.view.help_open = !self.view.help_open,
            AppEvent::ScrollHistoryUp => self.instructions.scroll_history_up(),
            AppEvent::ScrollHistoryDown => self.instructions.scroll_history_down(),
            AppEvent::ShowDiscardPile => self.mode = AppMode::DiscardPile,
            AppEvent::ToggleInterturn => self.view.interturn = !self.view.interturn,
            AppEvent::NextSeat => self.next_seat(),
            AppEvent::DismissTutorial => self.view.tutorial = None,
            AppEvent::ReloadGame => self.reload_game(),
            AppEvent::Back => self.mode = AppMode::Game,
            AppEvent::Quit => self.quit(),
        }
    }

    /// Handle every app event already queued.
    pub fn process_pending(&mut self) {
        while let Some(event) = self.events.try_next() {
            if let Event::App(app_event) = event {
                self.handle_app_event(app_event);
            }
        }
    }

    fn toggle_history(&mut self) {
        let props = panel_props(
            &self.game,
            self.self_player,
            self.view,
            Duration::ZERO,
            self.config.pulse_period(),
        );
        if !self.instructions.toggle_history(&props) {
            log_debug!("Turns history has nothing more to show");
        }
    }

    fn select_discard(&mut self) {
        let props = panel_props(
            &self.game,
            self.self_player,
            self.view,
            Duration::ZERO,
            self.config.pulse_period(),
        );
        let events = &mut self.events;
        self.instructions
            .select_discard(&props, || events.send(AppEvent::ShowDiscardPile));
    }

    /// Pass the device to the next seat, hiding private details until the
    /// handoff is acknowledged.
    fn next_seat(&mut self) {
        let count = self.game.players.len();
        if count == 0 {
            return;
        }

        let index = self
            .self_player
            .and_then(|id| self.game.players.iter().position(|p| p.id == id))
            .map(|i| (i + 1) % count)
            .unwrap_or(0);

        self.self_player = Some(self.game.players[index].id);
        self.view.interturn = true;
        log_info!("Seat passed to {}", self.game.players[index].name);
    }

    fn reload_game(&mut self) {
        let seat_name = self.self_player().map(|p| p.name.clone());

        match Self::load_game(&self.config) {
            Ok(game) => {
                self.self_player = resolve_seat(&game, seat_name.as_deref());
                self.game = game;
                self.status_message = None;
            }
            Err(e) => {
                log_error!("Failed to reload game: {}", e);
                self.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::turns_history::HistoryExpansion;
    use serde_json::json;
    use std::fs;
    use tempfile::NamedTempFile;

    fn app() -> App {
        let config = PanelConfig {
            demo_players: 3,
            demo_turns: 9,
            ..PanelConfig::default()
        };
        App::with_events(config, EventHandler::detached()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_events(KeyEvent::from(code)).unwrap();
        app.process_pending();
    }

    #[test]
    fn test_demo_game_seats_first_player() {
        let app = app();
        assert_eq!(app.self_player().unwrap().name, "Alice");
        assert_eq!(app.view.tutorial, Some(TutorialStep::Welcome));
    }

    #[test]
    fn test_discard_link_opens_pile_on_own_turn() {
        let mut app = app();
        // 9 turns with 3 players: back to Alice
        assert_eq!(app.game.current_player, 0);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, AppMode::DiscardPile);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Game);
        assert!(app.running);
    }

    #[test]
    fn test_discard_link_absent_while_waiting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.self_player().unwrap().name, "Bob");
        assert!(app.view.interturn);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, AppMode::Game);
    }

    #[test]
    fn test_history_toggle_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.instructions.expansion(), HistoryExpansion::Expanded);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.instructions.expansion(), HistoryExpansion::Collapsed);
    }

    #[test]
    fn test_help_and_tutorial_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert!(app.view.help_open);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.tutorial, None);
    }

    fn snapshot(names: &[&str], turns: usize) -> String {
        let players: Vec<_> = names.iter().map(|name| json!({ "name": name })).collect();
        let turns: Vec<_> = (0..turns)
            .map(|i| {
                json!({ "action": {
                    "type": "discard",
                    "from": i % names.len(),
                    "card": { "color": "red", "number": 1 }
                } })
            })
            .collect();
        json!({
            "players": players,
            "current_player": 0,
            "options": { "players_count": names.len() },
            "turns_history": turns
        })
        .to_string()
    }

    fn app_from_file(file: &NamedTempFile, seat: &str) -> App {
        let config = PanelConfig {
            game_path: Some(file.path().to_path_buf()),
            self_player: Some(seat.to_string()),
            ..PanelConfig::default()
        };
        App::with_events(config, EventHandler::detached()).unwrap()
    }

    fn snapshot_file(content: &str) -> NamedTempFile {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_reload_keeps_expansion_and_seat() {
        let file = snapshot_file(&snapshot(&["Alice", "Bob", "Chloe"], 6));
        let mut app = app_from_file(&file, "Bob");
        assert_eq!(app.self_player().unwrap().name, "Bob");

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.instructions.expansion(), HistoryExpansion::Expanded);

        fs::write(file.path(), snapshot(&["Alice", "Bob", "Chloe"], 7)).unwrap();
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.game.turns_history.len(), 7);
        assert_eq!(app.instructions.expansion(), HistoryExpansion::Expanded);
        // Ids are regenerated on load, so the seat has to be found by name
        assert_eq!(app.self_player, Some(app.game.players[1].id));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_reload_falls_back_to_first_seat() {
        let file = snapshot_file(&snapshot(&["Alice", "Bob"], 3));
        let mut app = app_from_file(&file, "bob");
        assert_eq!(app.self_player().unwrap().name, "Bob");

        fs::write(file.path(), snapshot(&["Alice", "Chloe"], 3)).unwrap();
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.self_player().unwrap().name, "Alice");
    }

    #[test]
    fn test_failed_reload_keeps_previous_game() {
        let file = snapshot_file(&snapshot(&["Alice", "Bob"], 3));
        let mut app = app_from_file(&file, "Bob");

        fs::write(file.path(), "{ not json").unwrap();
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.game.turns_history.len(), 3);
        assert_eq!(app.self_player().unwrap().name, "Bob");
        assert!(app.status_message.as_deref().unwrap().starts_with("Reload failed"));
    }

    #[test]
    fn test_pulse_follows_history_visibility() {
        let mut app = app();
        app.game.synced = false;
        assert!(app.is_pulsing());

        app.game.options.turns_history = false;
        assert!(!app.is_pulsing());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
