use crate::board::{Layout, Move, Piece, PieceId, PieceKind, Position, Side};
use crate::encoder::Snapshot;
use crate::error::{MoveError, SetupError};
use crate::game::{capture, movegen};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Move ceiling after which an undecided game is scored as a draw.
pub const DEFAULT_MAX_MOVES: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    InProgress,
    DefenderWinEscape,
    AttackerWinCapture,
    Draw,
}

impl TerminalStatus {
    pub const fn is_terminal(self) -> bool { !matches!(self, TerminalStatus::InProgress) }

    pub const fn winner(self) -> Option<Side> {
        match self {
            TerminalStatus::DefenderWinEscape => Some(Side::Defender),
            TerminalStatus::AttackerWinCapture => Some(Side::Attacker),
            TerminalStatus::InProgress | TerminalStatus::Draw => None,
        }
    }

    /// +1 win, -1 loss, 0 otherwise, from `side`'s point of view.
    pub fn reward(self, side: Side) -> f32 {
        match self.winner() {
            Some(w) if w == side => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalStatus::InProgress => write!(f, "in progress"),
            TerminalStatus::DefenderWinEscape => write!(f, "king escaped, defenders win"),
            TerminalStatus::AttackerWinCapture => write!(f, "king captured, attackers win"),
            TerminalStatus::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub side: Side,
    /// Squares emptied by custodian capture (and the king's square, if taken).
    pub captured: Vec<Position>,
    pub king_captured: bool,
    pub status: TerminalStatus,
}

#[derive(Debug, Clone)]
pub struct GameState {
    layout: Layout,
    cells: Vec<Option<Piece>>,
    king: Option<Position>,
    turn: Side,
    move_count: u32,
    max_moves: u32,
    status: TerminalStatus,
}

impl Default for GameState {
    fn default() -> Self { Self::new_game() }
}

impl GameState {
    /// Standard 11x11 opening position, attackers to move.
    pub fn new_game() -> Self {
        let layout = Layout::standard();
        let pieces: Vec<(Position, PieceKind)> = layout.start_pieces().collect();
        let mut state = Self::empty(layout, DEFAULT_MAX_MOVES);
        for (id, (pos, kind)) in pieces.into_iter().enumerate() {
            state.place(pos, Piece::new(id as PieceId, kind));
        }
        state
    }

    pub fn new(layout: Layout, max_moves: u32) -> Result<Self, SetupError> {
        let pieces: Vec<(Position, PieceKind)> = layout.start_pieces().collect();
        Self::from_pieces(layout, &pieces, Side::Attacker).map(|s| s.with_max_moves(max_moves))
    }

    /// Arbitrary position on `layout`'s tiles; the layout's own starting
    /// pieces are ignored.
    pub fn from_pieces(layout: Layout, pieces: &[(Position, PieceKind)], turn: Side) -> Result<Self, SetupError> {
        let dim = layout.dim();
        let mut state = Self::empty(layout, DEFAULT_MAX_MOVES);
        state.turn = turn;
        for (id, &(pos, kind)) in pieces.iter().enumerate() {
            if !pos.in_bounds(dim) { return Err(SetupError::OutOfBounds(pos)); }
            if state.piece_at(pos).is_some() { return Err(SetupError::DuplicateSquare(pos)); }
            state.place(pos, Piece::new(id as PieceId, kind));
        }
        state.check_invariants()?;
        Ok(state)
    }

    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    fn empty(layout: Layout, max_moves: u32) -> Self {
        let n = layout.dim() * layout.dim();
        Self {
            layout,
            cells: vec![None; n],
            king: None,
            turn: Side::Attacker,
            move_count: 0,
            max_moves,
            status: TerminalStatus::InProgress,
        }
    }

    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn dim(&self) -> usize { self.layout.dim() }
    pub fn turn(&self) -> Side { self.turn }
    pub fn move_count(&self) -> u32 { self.move_count }
    pub fn max_moves(&self) -> u32 { self.max_moves }
    pub fn status(&self) -> TerminalStatus { self.status }
    pub fn is_over(&self) -> bool { self.status.is_terminal() }
    pub fn king_position(&self) -> Option<Position> { self.king }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds(self.dim()) { return None; }
        self.cells[pos.index(self.dim())]
    }

    pub fn is_empty(&self, pos: Position) -> bool { self.piece_at(pos).is_none() }

    /// Pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.all_pieces().filter(move |(_, p)| p.side() == side)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        let dim = self.dim();
        self.cells.iter().enumerate().filter_map(move |(i, c)| c.map(|p| (Position::from_index(i, dim), p)))
    }

    pub fn piece_count(&self, side: Side) -> usize { self.pieces(side).count() }

    /// Legal destinations for the piece on `from`, which must belong to the
    /// side to move.
    pub fn legal_moves(&self, from: Position) -> Result<BTreeSet<Position>, MoveError> {
        let piece = self.own_piece(from)?;
        Ok(movegen::destinations(self, from, piece))
    }

    pub fn is_legal(&self, from: Position, to: Position) -> bool {
        self.legal_moves(from).map(|set| set.contains(&to)).unwrap_or(false)
    }

    /// Validate, relocate, resolve captures, then settle the status and the
    /// turn. On error nothing is changed.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        let piece = self.own_piece(from)?;
        if !movegen::destinations(self, from, piece).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        let mv = Move::new(from, to);
        let side = self.turn;
        self.relocate(mv);
        let report = capture::resolve(self, mv, piece);
        if !report.captured.is_empty() {
            debug!("{} {} captured {:?}", side, mv, report.captured);
        }
        self.move_count += 1;

        if report.escaped {
            self.status = TerminalStatus::DefenderWinEscape;
        } else if report.king_captured {
            self.status = TerminalStatus::AttackerWinCapture;
        } else if self.move_count >= self.max_moves {
            self.status = TerminalStatus::Draw;
        } else {
            self.turn = side.opposite();
            if !movegen::has_any_move(self, self.turn) {
                debug!("{} is immobilised after {}", self.turn, mv);
                self.status = TerminalStatus::Draw;
            }
        }
        if self.status.is_terminal() {
            info!("game over after {} moves: {}", self.move_count, self.status);
        }
        debug_assert!(self.check_invariants().is_ok(), "invariant broken after {mv}");

        Ok(MoveOutcome { mv, side, captured: report.captured, king_captured: report.king_captured, status: self.status })
    }

    /// Exactly one king while the game lasts; none once it has been captured.
    pub fn check_invariants(&self) -> Result<(), SetupError> {
        let kings: Vec<Position> = self.all_pieces().filter(|(_, p)| p.is_king()).map(|(pos, _)| pos).collect();
        let expected = if self.status == TerminalStatus::AttackerWinCapture { 0 } else { 1 };
        if kings.len() != expected || kings.first().copied() != self.king {
            return Err(SetupError::KingCount(kings.len()));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot { Snapshot::from_state(self) }

    fn own_piece(&self, from: Position) -> Result<Piece, MoveError> {
        if self.is_over() { return Err(MoveError::GameOver); }
        let piece = self.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.side() != self.turn {
            return Err(MoveError::NotYourTurn { at: from, owner: piece.side(), turn: self.turn });
        }
        Ok(piece)
    }

    fn place(&mut self, pos: Position, piece: Piece) {
        let dim = self.dim();
        if piece.is_king() { self.king = Some(pos); }
        self.cells[pos.index(dim)] = Some(piece);
    }

    fn relocate(&mut self, mv: Move) {
        let dim = self.dim();
        if let Some(piece) = self.cells[mv.from.index(dim)].take() {
            self.place(mv.to, piece);
        }
    }

    pub(crate) fn remove(&mut self, pos: Position) -> Option<Piece> {
        let dim = self.dim();
        let taken = self.cells[pos.index(dim)].take();
        if taken.map_or(false, |p| p.is_king()) { self.king = None; }
        taken
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        for r in 0..dim {
            for c in 0..dim {
                let pos = Position::new(r as u8, c as u8);
                let ch = match self.piece_at(pos) {
                    Some(p) => p.kind.symbol(),
                    None if self.layout.is_corner(pos) => 'x',
                    None if self.layout.is_throne(pos) => '+',
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move, move {}, {}", self.turn, self.move_count, self.status)
    }
}
