use std::fs::File;
use std::sync::Mutex;

use turns_panel::{app::App, config::PanelConfig, util::log};

/// Route `tracing` output to a file; the terminal belongs to the TUI.
fn init_tracing(config: &PanelConfig) -> color_eyre::Result<()> {
    let file = File::create(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = PanelConfig::load(&PanelConfig::path_from_env())?;
    log::init(&config.log_dir)?;
    init_tracing(&config)?;

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
