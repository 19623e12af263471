use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self { Self { row, col } }

    /// Row-major index into a `dim * dim` cell array.
    pub fn index(self, dim: usize) -> usize { self.row as usize * dim + self.col as usize }

    pub fn from_index(idx: usize, dim: usize) -> Self {
        Self { row: (idx / dim) as u8, col: (idx % dim) as u8 }
    }

    pub fn in_bounds(self, dim: usize) -> bool { (self.row as usize) < dim && (self.col as usize) < dim }

    /// Neighbouring square in `dir`, or `None` past the board edge.
    pub fn step(self, dir: Direction, dim: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if r < 0 || c < 0 || r >= dim as i32 || c >= dim as i32 { return None; }
        Some(Position::new(r as u8, c as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self { Self::new(row, col) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
