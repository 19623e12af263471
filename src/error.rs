use crate::board::{Position, Side};
use thiserror::Error;

/// Rejected move. Never fatal: the state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPiece(Position),
    #[error("piece at {at} belongs to {owner}, but it is {turn}'s turn")]
    NotYourTurn { at: Position, owner: Side, turn: Side },
    #[error("{to} is not a legal destination for the piece at {from}")]
    IllegalDestination { from: Position, to: Position },
    #[error("game is already over")]
    GameOver,
}

/// Broken board construction or a corrupted state. The game must not continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("expected exactly one king, found {0}")]
    KingCount(usize),
    #[error("unknown tile '{ch}' at {at}")]
    UnknownTile { ch: char, at: Position },
    #[error("layout row {row} has {len} tiles, expected {dim}")]
    Ragged { row: usize, len: usize, dim: usize },
    #[error("layout of dimension {0} is not supported")]
    BadDimension(usize),
    #[error("two pieces placed on {0}")]
    DuplicateSquare(Position),
    #[error("{0} is off the board")]
    OutOfBounds(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),
    #[error("game is already over")]
    GameOver,
    #[error("chosen move was rejected: {0}")]
    Rejected(#[from] MoveError),
}
