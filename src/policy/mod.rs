pub mod greedy;
pub mod random;

pub use greedy::{select_best_move, select_best_move_with, GreedyParams, FAILED_SCORE};
pub use random::select_random_move;

use crate::board::Move;
use crate::error::PolicyError;
use crate::eval::Scorer;
use crate::game::{GameState, MoveOutcome};
use rand::Rng;

/// Non-interactive stand-in for a player's input.
#[derive(Clone, Copy)]
pub enum Policy<'a> {
    Random,
    Greedy { scorer: &'a (dyn Scorer + Sync), params: GreedyParams },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub mv: Move,
    /// Scorer's value for the chosen move; `None` for random play.
    pub predicted: Option<f32>,
}

impl Policy<'_> {
    pub fn choose<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Result<Choice, PolicyError> {
        match self {
            Policy::Random => select_random_move(state, rng).map(|mv| Choice { mv, predicted: None }),
            Policy::Greedy { scorer, params } => {
                select_best_move_with(state, *scorer, params).map(|(mv, s)| Choice { mv, predicted: Some(s) })
            }
        }
    }
}

/// Choose a move for the side to move and commit it through the normal
/// validation path.
pub fn play_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    policy: &Policy<'_>,
    rng: &mut R,
) -> Result<(MoveOutcome, Choice), PolicyError> {
    let choice = policy.choose(state, rng)?;
    let outcome = state.apply_move(choice.mv.from, choice.mv.to)?;
    Ok((outcome, choice))
}
