pub mod state;
pub mod widget;

pub use state::Instruction;
pub use widget::InstructionsWidget;
