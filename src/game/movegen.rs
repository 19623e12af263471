use crate::board::{Direction, Move, Piece, Position, Side};
use crate::game::state::GameState;
use std::collections::BTreeSet;

/// Squares the piece on `from` can slide to. Each direction is scanned until
/// the edge or the first occupied square; special squares are dropped unless
/// the piece may enter them. The piece's side is not checked here.
pub fn destinations(state: &GameState, from: Position, piece: Piece) -> BTreeSet<Position> {
    let dim = state.dim();
    let mut out = BTreeSet::new();
    for dir in Direction::ALL {
        let mut cur = from;
        while let Some(next) = cur.step(dir, dim) {
            if !state.is_empty(next) { break; }
            out.insert(next);
            cur = next;
        }
    }
    if !piece.may_enter_special() {
        let layout = state.layout();
        out.retain(|&p| !layout.is_special(p));
    }
    out
}

/// Every piece of `side` with its destination set, row-major, skipping
/// pieces that cannot move.
pub fn movable_pieces(state: &GameState, side: Side) -> Vec<(Position, BTreeSet<Position>)> {
    state
        .pieces(side)
        .map(|(pos, piece)| (pos, destinations(state, pos, piece)))
        .filter(|(_, set)| !set.is_empty())
        .collect()
}

pub fn legal_moves_for_side(state: &GameState, side: Side) -> Vec<Move> {
    movable_pieces(state, side)
        .into_iter()
        .flat_map(|(from, set)| set.into_iter().map(move |to| Move::new(from, to)))
        .collect()
}

pub fn has_any_move(state: &GameState, side: Side) -> bool {
    state.pieces(side).any(|(pos, piece)| !destinations(state, pos, piece).is_empty())
}
