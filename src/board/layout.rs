use crate::board::{PieceKind, Position};
use crate::error::SetupError;

/// Canonical 11x11 starting pattern.
///   x corner, a attacker, d defender, c throne (king), . empty
pub const STANDARD_ROWS: [&str; 11] = [
    "x..aaaaa..x",
    ".....a.....",
    "...........",
    "a....d....a",
    "a...ddd...a",
    "aa.ddcdd.aa",
    "a...ddd...a",
    "a....d....a",
    "...........",
    ".....a.....",
    "x..aaaaa..x",
];

pub const STANDARD_DIM: usize = 11;

/// Positions are packed into `u8` rows/cols.
const MAX_DIM: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Plain,
    Corner,
    Throne,
}

impl Tile {
    /// Corners and the throne: only the king may stand here, and they are
    /// hostile territory for ordinary captures.
    pub const fn is_special(self) -> bool { !matches!(self, Tile::Plain) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    dim: usize,
    tiles: Vec<Tile>,
    start: Vec<Option<PieceKind>>,
    throne: Position,
}

impl Layout {
    pub fn standard() -> Self {
        // The built-in rows are known good.
        match Self::parse(&STANDARD_ROWS) {
            Ok(l) => l,
            Err(e) => unreachable!("standard layout rejected: {e}"),
        }
    }

    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, SetupError> {
        let dim = rows.len();
        if dim < 3 || dim > MAX_DIM { return Err(SetupError::BadDimension(dim)); }
        let mut tiles = Vec::with_capacity(dim * dim);
        let mut start = Vec::with_capacity(dim * dim);
        let mut throne = None;
        let mut kings = 0usize;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != dim { return Err(SetupError::Ragged { row: r, len, dim }); }
            for (c, ch) in row.chars().enumerate() {
                let at = Position::new(r as u8, c as u8);
                let (tile, occupant) = match ch {
                    '.' => (Tile::Plain, None),
                    'x' => (Tile::Corner, None),
                    'a' => (Tile::Plain, Some(PieceKind::Attacker)),
                    'd' => (Tile::Plain, Some(PieceKind::Defender)),
                    'c' => { throne = Some(at); kings += 1; (Tile::Throne, Some(PieceKind::King)) }
                    _ => return Err(SetupError::UnknownTile { ch, at }),
                };
                tiles.push(tile);
                start.push(occupant);
            }
        }
        // The king starts on the throne, so one king means one throne.
        let throne = match throne {
            Some(t) if kings == 1 => t,
            _ => return Err(SetupError::KingCount(kings)),
        };
        Ok(Self { dim, tiles, start, throne })
    }

    pub fn dim(&self) -> usize { self.dim }

    pub fn tile(&self, pos: Position) -> Tile { self.tiles[pos.index(self.dim)] }

    pub fn is_special(&self, pos: Position) -> bool { self.tile(pos).is_special() }

    pub fn is_corner(&self, pos: Position) -> bool { self.tile(pos) == Tile::Corner }

    pub fn is_throne(&self, pos: Position) -> bool { pos == self.throne }

    pub fn throne(&self) -> Position { self.throne }

    pub fn corners(&self) -> impl Iterator<Item = Position> + '_ {
        self.special_squares().filter(move |&p| self.is_corner(p))
    }

    pub fn special_squares(&self) -> impl Iterator<Item = Position> + '_ {
        let dim = self.dim;
        self.tiles.iter().enumerate().filter(|(_, t)| t.is_special()).map(move |(i, _)| Position::from_index(i, dim))
    }

    /// Starting occupants in row-major order.
    pub fn start_pieces(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        let dim = self.dim;
        self.start.iter().enumerate().filter_map(move |(i, k)| k.map(|k| (Position::from_index(i, dim), k)))
    }
}

impl Default for Layout {
    fn default() -> Self { Self::standard() }
}
