pub mod discard_pile;
pub mod game;
