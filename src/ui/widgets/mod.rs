pub mod instructions;
pub mod instructions_area;
pub mod turn;
pub mod turns_history;

pub use instructions_area::{InstructionsArea, PanelContext, PanelProps};
