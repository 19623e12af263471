use crate::board::{Move, Piece, Position};
use crate::error::PolicyError;
use crate::game::{movegen, GameState};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform piece, then uniform destination. A piece with no destinations is
/// redrawn, so the piece choice is uniform over pieces that can move.
pub fn select_random_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Result<Move, PolicyError> {
    if state.is_over() { return Err(PolicyError::GameOver); }
    let side = state.turn();
    if !movegen::has_any_move(state, side) { return Err(PolicyError::NoLegalMoves(side)); }
    let pieces: Vec<(Position, Piece)> = state.pieces(side).collect();
    loop {
        let Some(&(from, piece)) = pieces.choose(rng) else { return Err(PolicyError::NoLegalMoves(side)) };
        let dests = movegen::destinations(state, from, piece);
        if dests.is_empty() { continue; }
        let idx = rng.gen_range(0..dests.len());
        if let Some(&to) = dests.iter().nth(idx) {
            return Ok(Move::new(from, to));
        }
    }
}
