//! Small presentational building blocks shared by the screens and widgets.
pub mod card;
pub mod empty_message;
pub mod help;
pub mod player_name;
pub mod status;

pub struct UiComponent;
