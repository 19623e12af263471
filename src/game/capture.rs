use crate::board::{Direction, Move, Piece, Position, Side};
use crate::game::state::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureReport {
    pub captured: Vec<Position>,
    pub king_captured: bool,
    pub escaped: bool,
}

/// Settle the board after `piece` has been relocated along `mv`.
pub fn resolve(state: &mut GameState, mv: Move, piece: Piece) -> CaptureReport {
    let mut report = CaptureReport::default();
    let mover = piece.side();

    for pos in custodian_captures(state, mv.to, mover) {
        state.remove(pos);
        report.captured.push(pos);
    }

    if piece.is_king() && state.layout().is_corner(mv.to) {
        report.escaped = true;
        return report;
    }

    // Only an attacker move can close the ring around the king.
    if mover == Side::Attacker && king_surrounded(state) {
        if let Some(k) = state.king_position() {
            state.remove(k);
            report.captured.push(k);
            report.king_captured = true;
        }
    }
    report
}

/// Enemy non-king pieces sandwiched against `to` by a piece of `mover`, or
/// by a special square that is not holding the king.
pub fn custodian_captures(state: &GameState, to: Position, mover: Side) -> Vec<Position> {
    let dim = state.dim();
    let layout = state.layout();
    let mut out = Vec::new();
    for dir in Direction::ALL {
        let Some(n) = to.step(dir, dim) else { continue };
        let Some(target) = state.piece_at(n) else { continue };
        if target.side() == mover || target.is_king() { continue; }
        let Some(m) = n.step(dir, dim) else { continue };
        let anvil = state.piece_at(m);
        let own = anvil.map_or(false, |p| p.side() == mover);
        let hostile = layout.is_special(m) && !anvil.map_or(false, |p| p.is_king());
        if own || hostile { out.push(n); }
    }
    out
}

/// True when every orthogonal neighbour of the king holds an attacker or is a
/// special square. Squares past the edge never count, so a king on the edge
/// cannot be taken.
pub fn king_surrounded(state: &GameState) -> bool {
    let Some(k) = state.king_position() else { return false };
    let dim = state.dim();
    let layout = state.layout();
    Direction::ALL.iter().all(|&dir| match k.step(dir, dim) {
        Some(n) => layout.is_special(n) || state.piece_at(n).map_or(false, |p| p.side() == Side::Attacker),
        None => false,
    })
}
