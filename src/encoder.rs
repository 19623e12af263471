use crate::board::{Move, PieceKind, Position};
use crate::game::GameState;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub const EMPTY: u8 = 0;
pub const ATTACKER: u8 = 1;
pub const DEFENDER: u8 = 2;
pub const KING: u8 = 3;

/// Cell code used in snapshots and model inputs.
pub const fn code(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::Attacker => ATTACKER,
        PieceKind::Defender => DEFENDER,
        PieceKind::King => KING,
    }
}

/// Row-major `dim x dim` array of cell codes. This is the only thing a scorer
/// ever sees of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    dim: usize,
    cells: Vec<u8>,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let dim = state.dim();
        let mut cells = vec![EMPTY; dim * dim];
        for (pos, piece) in state.all_pieces() {
            cells[pos.index(dim)] = code(piece.kind);
        }
        Self { dim, cells }
    }

    pub fn dim(&self) -> usize { self.dim }
    pub fn cells(&self) -> &[u8] { &self.cells }

    pub fn get(&self, pos: Position) -> u8 {
        if !pos.in_bounds(self.dim) { return EMPTY; }
        self.cells[pos.index(self.dim)]
    }

    pub fn count(&self, code: u8) -> usize { self.cells.iter().filter(|&&c| c == code).count() }

    pub fn king_position(&self) -> Option<Position> {
        self.cells.iter().position(|&c| c == KING).map(|i| Position::from_index(i, self.dim))
    }

    /// Flat `f32` vector, one entry per cell, for model input.
    pub fn as_features(&self) -> Vec<f32> { self.cells.iter().map(|&c| c as f32).collect() }

    /// Slide the piece along `mv` until the returned guard is dropped.
    /// Captures are not applied: a probe is a cheap relocation only.
    pub fn probe(&mut self, mv: Move) -> Probe<'_> {
        let from = mv.from.index(self.dim);
        let to = mv.to.index(self.dim);
        let moved = self.cells[from];
        let displaced = self.cells[to];
        self.cells[from] = EMPTY;
        self.cells[to] = moved;
        Probe { snap: self, from, to, moved, displaced }
    }
}

/// Scoped probe of a snapshot. The move is undone on every exit path,
/// including early returns and unwinding.
pub struct Probe<'a> {
    snap: &'a mut Snapshot,
    from: usize,
    to: usize,
    moved: u8,
    displaced: u8,
}

impl Deref for Probe<'_> {
    type Target = Snapshot;
    fn deref(&self) -> &Snapshot { self.snap }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.snap.cells[self.to] = self.displaced;
        self.snap.cells[self.from] = self.moved;
    }
}
