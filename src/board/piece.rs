use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Attacker => 0,
            Side::Defender => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "Attacker"),
            Side::Defender => write!(f, "Defender"),
        }
    }
}

/// The king fights for the defenders; it is a kind, not a third side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Attacker,
    Defender,
    King,
}

impl PieceKind {
    pub const fn side(self) -> Side {
        match self {
            PieceKind::Attacker => Side::Attacker,
            PieceKind::Defender | PieceKind::King => Side::Defender,
        }
    }

    /// Only the king may land on the corners or the throne.
    pub const fn may_enter_special(self) -> bool { matches!(self, PieceKind::King) }

    pub const fn is_king(self) -> bool { matches!(self, PieceKind::King) }

    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Attacker => 'a',
            PieceKind::Defender => 'd',
            PieceKind::King => 'K',
        }
    }
}

pub type PieceId = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(id: PieceId, kind: PieceKind) -> Self { Self { id, kind } }
    pub const fn side(&self) -> Side { self.kind.side() }
    pub const fn may_enter_special(&self) -> bool { self.kind.may_enter_special() }
    pub const fn is_king(&self) -> bool { self.kind.is_king() }
}
