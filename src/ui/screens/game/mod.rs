use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use crate::app::App;
use crate::ui::components::UiComponent;

const KEYS: [(&str, &str); 7] = [
    ("e", "history"),
    ("d", "discards"),
    ("i", "help"),
    ("t", "interturn"),
    ("p", "pass seat"),
    ("r", "reload"),
    ("q", "quit"),
];

pub fn render_game(app: &mut App, area: Rect, buf: &mut Buffer) {
    let header_constraints = Constraint::Length(3);
    let main_content_constraints = Constraint::Min(1);
    let footer_constraints = Constraint::Length(3);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            header_constraints,
            main_content_constraints,
            footer_constraints,
        ])
        .split(area);

    render_header(app, main_layout[0], buf);

    let panel_block = Block::bordered()
        .title(" Instructions ")
        .border_type(BorderType::Rounded)
        .fg(Color::Gray);
    let panel_area = panel_block.inner(main_layout[1]);
    panel_block.render(main_layout[1], buf);

    app.render_panel(panel_area, buf);

    UiComponent::help(&KEYS).render(main_layout[2], buf);
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    if let Some(message) = &app.status_message {
        UiComponent::status(message, "Error").render(area, buf);
        return;
    }

    let seat = app
        .self_player()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "spectator".to_string());

    if app.view.interturn {
        let handoff = format!("Pass the device to {} [t when ready]", seat);
        UiComponent::status(&handoff, "Interturn").render(area, buf);
        return;
    }

    Paragraph::new(format!("Hanab · playing as {}", seat))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
        )
        .fg(Color::Green)
        .alignment(Alignment::Center)
        .render(area, buf);
}
