use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame rate of tick events, enough for a smooth syncing pulse.
const TICK_FPS: f64 = 15.0;

/// Everything the main loop reacts to.
#[derive(Clone, Debug)]
pub enum Event {
    /// Redraw opportunity for the syncing pulse; ignored while the snapshot
    /// is synced.
    Tick,
    /// Key presses and resizes.
    Crossterm(CrosstermEvent),
    /// Actions decided from keys or raised by the panel's callbacks.
    App(AppEvent),
}

/// Panel actions first, then actions that only the host can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // Panel
    ToggleHistory,
    SelectDiscard,
    ToggleHelp,
    ScrollHistoryUp,
    ScrollHistoryDown,

    // Host
    ShowDiscardPile,
    ToggleInterturn,
    NextSeat,
    DismissTutorial,
    ReloadGame,
    Back,
    Quit,
}

/// Single queue the app drains: terminal input, ticks, and its own events.
///
/// The discard-link callback can only queue [`AppEvent::ShowDiscardPile`]
/// here; switching screens happens when the loop picks it up.
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new [`EventHandler`] and spawns the terminal reader task.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task = EventTask::new(sender.clone());
        tokio::spawn(async { task.run().await });
        Self { sender, receiver }
    }

    /// Handler with no terminal reader attached; only queued app events arrive.
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives the next event.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Pops an already queued event without waiting.
    pub fn try_next(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// Forwards crossterm events and pulse ticks until the handler is dropped.
struct EventTask {
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / TICK_FPS);
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);

        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
