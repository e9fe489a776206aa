pub mod state;
pub mod widget;

pub use state::{HistoryExpansion, HistoryIntent, HistoryRow, HistoryStateMachine};
pub use widget::TurnsHistoryWidget;
