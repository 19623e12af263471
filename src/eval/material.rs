use crate::board::{Direction, Position, Side};
use crate::encoder::{Snapshot, ATTACKER, DEFENDER};
use crate::eval::Scorer;

const ATTACKER_VALUE: f32 = 1.0;
const DEFENDER_VALUE: f32 = 2.0;
// Per step of Manhattan distance between the king and its nearest corner.
const KING_DISTANCE: f32 = 0.25;
// Per attacker touching the king.
const KING_PRESSURE: f32 = 1.5;
pub const WIN_SCORE: f32 = 1000.0;

/// Defender-positive heuristic: material, king distance to the nearest corner
/// and attackers pressing on the king. Corners are the four board corners.
pub fn material_eval_side_agnostic(snap: &Snapshot) -> f32 {
    let dim = snap.dim();
    let Some(king) = snap.king_position() else { return -WIN_SCORE };
    let last = (dim - 1) as u8;
    let corners = [Position::new(0, 0), Position::new(0, last), Position::new(last, 0), Position::new(last, last)];
    if corners.contains(&king) { return WIN_SCORE; }

    let material = snap.count(DEFENDER) as f32 * DEFENDER_VALUE - snap.count(ATTACKER) as f32 * ATTACKER_VALUE;
    let dist = corners
        .iter()
        .map(|c| (c.row as i32 - king.row as i32).abs() + (c.col as i32 - king.col as i32).abs())
        .min()
        .unwrap_or(0);
    let pressure = Direction::ALL
        .iter()
        .filter_map(|&d| king.step(d, dim))
        .filter(|&n| snap.get(n) == ATTACKER)
        .count();
    material - dist as f32 * KING_DISTANCE - pressure as f32 * KING_PRESSURE
}

/// Material heuristic from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialScorer {
    pub side: Side,
}

impl MaterialScorer {
    pub const fn new(side: Side) -> Self { Self { side } }
}

impl Scorer for MaterialScorer {
    fn score(&self, snapshot: &Snapshot) -> anyhow::Result<f32> {
        let base = material_eval_side_agnostic(snapshot);
        Ok(if self.side == Side::Defender { base } else { -base })
    }
}
