use crate::board::Move;
use crate::game::{movegen, GameState};

/// Count move sequences of length `depth`. Finished games are leaves.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 || state.is_over() { return 1; }
    let moves = movegen::legal_moves_for_side(state, state.turn());
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = state.clone();
        if child.apply_move(m.from, m.to).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Per root move node counts, in move generation order.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 || state.is_over() { return Vec::new(); }
    movegen::legal_moves_for_side(state, state.turn())
        .into_iter()
        .filter_map(|m| {
            let mut child = state.clone();
            child.apply_move(m.from, m.to).ok().map(|_| (m, perft(&child, depth - 1)))
        })
        .collect()
}
