use crate::board::Move;
use crate::encoder::Snapshot;
use crate::error::PolicyError;
use crate::eval::Scorer;
use crate::game::{movegen, GameState};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Score reported for a candidate whose scorer call failed or returned NaN.
/// Such candidates rank below every scored one, whatever its value.
pub const FAILED_SCORE: f32 = f32::NEG_INFINITY;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GreedyParams {
    /// Log a warning for scorer calls slower than this. Calls are never
    /// cancelled.
    pub slow_call: Option<Duration>,
}

pub fn select_best_move<S: Scorer + ?Sized>(state: &GameState, scorer: &S) -> Result<(Move, f32), PolicyError> {
    select_best_move_with(state, scorer, &GreedyParams::default())
}

/// One-ply greedy selection. Each candidate is probed on a snapshot of the
/// board (relocation only, no captures), scored, and reverted.
///
/// Ties keep the earliest candidate: pieces in row-major order, then
/// destinations in ascending (row, col) order. Only a strictly greater score
/// replaces the current best, and any scored candidate replaces a failed one.
pub fn select_best_move_with<S: Scorer + ?Sized>(
    state: &GameState,
    scorer: &S,
    params: &GreedyParams,
) -> Result<(Move, f32), PolicyError> {
    if state.is_over() { return Err(PolicyError::GameOver); }
    let side = state.turn();
    let mut snap = state.snapshot();
    // (move, score, scored successfully)
    let mut best: Option<(Move, f32, bool)> = None;
    for (from, dests) in movegen::movable_pieces(state, side) {
        for to in dests {
            let mv = Move::new(from, to);
            let scored = {
                let probe = snap.probe(mv);
                score_candidate(scorer, &probe, mv, params)
            };
            let better = match (best, scored) {
                (None, _) => true,
                (Some((_, b, true)), Some(v)) => v > b,
                (Some((_, _, false)), Some(_)) => true,
                (Some(_), None) => false,
            };
            if better { best = Some((mv, scored.unwrap_or(FAILED_SCORE), scored.is_some())); }
        }
    }
    best.map(|(mv, score, _)| (mv, score)).ok_or(PolicyError::NoLegalMoves(side))
}

fn score_candidate<S: Scorer + ?Sized>(scorer: &S, snap: &Snapshot, mv: Move, params: &GreedyParams) -> Option<f32> {
    let t0 = Instant::now();
    let res = scorer.score(snap);
    if let Some(limit) = params.slow_call {
        let dt = t0.elapsed();
        if dt > limit { warn!("scorer took {:.1}ms on {} (limit {:.1}ms)", dt.as_secs_f64() * 1e3, mv, limit.as_secs_f64() * 1e3); }
    }
    match res {
        Ok(v) if !v.is_nan() => Some(v),
        Ok(_) => { debug!("scorer returned NaN for {mv}"); None }
        Err(e) => { debug!("scorer failed for {mv}: {e:#}"); None }
    }
}
