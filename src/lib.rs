pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod ui;
pub mod util;

pub use config::PanelConfig;
pub use error::{PanelError, Result};
pub use ui::widgets::{InstructionsArea, PanelContext, PanelProps};
