pub mod layout;
pub mod piece;
pub mod position;

pub use layout::{Layout, Tile, STANDARD_DIM, STANDARD_ROWS};
pub use piece::{Piece, PieceId, PieceKind, Side};
pub use position::{Direction, Move, Position};
