pub mod material;

pub use material::MaterialScorer;

use crate::encoder::Snapshot;

/// Scoring oracle: maps a board snapshot to a value for the side using it.
/// Higher is better. Calls are synchronous and may fail; callers decide what
/// a failure is worth.
pub trait Scorer {
    fn score(&self, snapshot: &Snapshot) -> anyhow::Result<f32>;
}

impl<F> Scorer for F
where
    F: Fn(&Snapshot) -> anyhow::Result<f32>,
{
    fn score(&self, snapshot: &Snapshot) -> anyhow::Result<f32> { self(snapshot) }
}
