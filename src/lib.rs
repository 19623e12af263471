// Hnefatafl rule engine with random and greedy scored self-play
pub mod board;
pub mod encoder;
pub mod error;
pub mod eval;
pub mod game;
pub mod perft;
pub mod policy;
pub mod selfplay;

pub use board::{Layout, Move, Piece, PieceKind, Position, Side};
pub use error::{MoveError, PolicyError, SetupError};
pub use game::{GameState, MoveOutcome, TerminalStatus, TurnController};
