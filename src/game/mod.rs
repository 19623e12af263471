pub mod capture;
pub mod controller;
pub mod movegen;
pub mod state;

pub use controller::{ClickOutcome, Phase, TurnController};
pub use state::{GameState, MoveOutcome, TerminalStatus, DEFAULT_MAX_MOVES};
