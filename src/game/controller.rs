use crate::board::{Position, Side};
use crate::error::MoveError;
use crate::game::state::{GameState, MoveOutcome, TerminalStatus};
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    AwaitingSelection(Side),
    PieceSelected { side: Side, from: Position, legal: BTreeSet<Position> },
    GameOver(TerminalStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Nothing happened (foreign piece, empty square with nothing selected,
    /// another piece while one is selected, or the game is over).
    Ignored,
    Selected(Position),
    Deselected,
    /// Empty square outside the selected piece's legal set.
    Rejected(MoveError),
    Moved(MoveOutcome),
}

/// Click-driven turn sequencing for an input collaborator that has already
/// mapped its events to board squares.
#[derive(Debug, Clone)]
pub struct TurnController {
    initial: GameState,
    state: GameState,
    phase: Phase,
}

impl Default for TurnController {
    fn default() -> Self { Self::new(GameState::new_game()) }
}

impl TurnController {
    pub fn new(state: GameState) -> Self {
        let phase = Self::resting_phase(&state);
        Self { initial: state.clone(), state, phase }
    }

    pub fn state(&self) -> &GameState { &self.state }
    pub fn phase(&self) -> &Phase { &self.phase }

    pub fn selected(&self) -> Option<(Position, &BTreeSet<Position>)> {
        match &self.phase {
            Phase::PieceSelected { from, legal, .. } => Some((*from, legal)),
            _ => None,
        }
    }

    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        match &self.phase {
            Phase::GameOver(_) => ClickOutcome::Ignored,
            Phase::AwaitingSelection(_) => match self.select(pos) {
                Ok(()) => ClickOutcome::Selected(pos),
                Err(_) => ClickOutcome::Ignored,
            },
            Phase::PieceSelected { from, .. } => {
                if *from == pos {
                    self.deselect();
                    ClickOutcome::Deselected
                } else if self.state.piece_at(pos).is_some() {
                    ClickOutcome::Ignored
                } else {
                    match self.submit(pos) {
                        Ok(outcome) => ClickOutcome::Moved(outcome),
                        Err(e) => ClickOutcome::Rejected(e),
                    }
                }
            }
        }
    }

    /// Select one of the side-to-move's pieces and cache its destinations.
    /// Fails without changing anything if a piece is already selected.
    pub fn select(&mut self, pos: Position) -> Result<(), MoveError> {
        let side = match self.phase {
            Phase::AwaitingSelection(side) => side,
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::PieceSelected { from, .. } => return Err(MoveError::IllegalDestination { from, to: pos }),
        };
        let legal = self.state.legal_moves(pos)?;
        debug!("{} selected {} with {} destinations", side, pos, legal.len());
        self.phase = Phase::PieceSelected { side, from: pos, legal };
        Ok(())
    }

    pub fn deselect(&mut self) {
        if let Phase::PieceSelected { side, .. } = self.phase {
            self.phase = Phase::AwaitingSelection(side);
        }
    }

    /// Commit the selected piece to `to`. An illegal destination keeps the
    /// selection.
    pub fn submit(&mut self, to: Position) -> Result<MoveOutcome, MoveError> {
        let from = match &self.phase {
            Phase::PieceSelected { from, legal, .. } => {
                if !legal.contains(&to) { return Err(MoveError::IllegalDestination { from: *from, to }); }
                *from
            }
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::AwaitingSelection(_) => return Err(MoveError::NoPiece(to)),
        };
        let outcome = self.state.apply_move(from, to)?;
        self.phase = Self::resting_phase(&self.state);
        Ok(outcome)
    }

    /// Discard the current game and start over from the initial position.
    pub fn new_game(&mut self) {
        self.state = self.initial.clone();
        self.phase = Self::resting_phase(&self.state);
    }

    fn resting_phase(state: &GameState) -> Phase {
        if state.is_over() { Phase::GameOver(state.status()) } else { Phase::AwaitingSelection(state.turn()) }
    }
}
