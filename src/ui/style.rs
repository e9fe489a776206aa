use std::time::Duration;

#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::style::Color;

pub fn heading() -> Style {
    Style::default().fg(Color::White).bold()
}

pub fn link() -> Style {
    Style::default().fg(Color::Cyan).underlined()
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Whether the pulse is in its faded half at `clock`.
///
/// The pulse has no timer of its own: the host passes the time elapsed
/// since it started and redraws on its tick.
pub fn pulse_is_faded(clock: Duration, period: Duration) -> bool {
    let period_ms = period.as_millis().max(1);
    let phase = clock.as_millis() % period_ms;
    phase >= period_ms / 2
}

pub fn pulse(style: Style, clock: Duration, period: Duration) -> Style {
    if pulse_is_faded(clock, period) { style.dim() } else { style }
}
