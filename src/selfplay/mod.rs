use crate::board::{Move, Side};
use crate::encoder::Snapshot;
use crate::eval::Scorer;
use crate::game::{GameState, TerminalStatus, DEFAULT_MAX_MOVES};
use crate::policy::{play_turn, GreedyParams, Policy};
use anyhow::{Context, Result};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum PolicyKind {
    Random,
    Greedy,
}

#[derive(Debug, Clone)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_moves: u32,
    pub threads: usize,
    pub seed: u64,
    pub attacker: PolicyKind,
    pub defender: PolicyKind,
    pub greedy: GreedyParams,
    pub smooth_plies: usize, // how many final targets to smooth toward the result
    pub record_states: bool,   // keep per-move snapshots in the record
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self {
            games: 1,
            max_moves: DEFAULT_MAX_MOVES,
            threads: 1,
            seed: 42,
            attacker: PolicyKind::Greedy,
            defender: PolicyKind::Random,
            greedy: GreedyParams::default(),
            smooth_plies: 10,
            record_states: true,
        }
    }
}

/// Scoring oracles for greedy sides. Ignored for random sides.
#[derive(Clone, Copy)]
pub struct Scorers<'a> {
    pub attacker: &'a (dyn Scorer + Sync),
    pub defender: &'a (dyn Scorer + Sync),
}

impl<'a> Scorers<'a> {
    pub fn for_side(&self, side: Side) -> &'a (dyn Scorer + Sync) {
        match side {
            Side::Attacker => self.attacker,
            Side::Defender => self.defender,
        }
    }
}

/// One side's view of a finished game: the position after each of its moves,
/// what its scorer predicted there, and the corrected training targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub states: Vec<Snapshot>,
    pub predicted: Vec<f32>,
    pub targets: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub moves: Vec<Move>,
    pub outcome: TerminalStatus,
    pub attacker: Trajectory,
    pub defender: Trajectory,
}

impl GameRecord {
    pub fn trajectory(&self, side: Side) -> &Trajectory {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    fn trajectory_mut(&mut self, side: Side) -> &mut Trajectory {
        match side {
            Side::Attacker => &mut self.attacker,
            Side::Defender => &mut self.defender,
        }
    }
}

/// Per-game seed derived from the run seed (splitmix64 step).
pub fn game_seed(seed: u64, index: usize) -> u64 {
    let mut z = seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn policy_for<'a>(params: &SelfPlayParams, scorers: &Scorers<'a>, side: Side) -> Policy<'a> {
    let kind = match side {
        Side::Attacker => params.attacker,
        Side::Defender => params.defender,
    };
    match kind {
        PolicyKind::Random => Policy::Random,
        PolicyKind::Greedy => Policy::Greedy { scorer: scorers.for_side(side), params: params.greedy },
    }
}

/// Play one game from the standard opening until it ends. Each game owns a
/// fresh state and its own rng.
pub fn play_game(params: &SelfPlayParams, seed: u64, scorers: &Scorers<'_>) -> GameRecord {
    let mut state = GameState::new_game().with_max_moves(params.max_moves);
    let mut rng = SmallRng::seed_from_u64(seed);
    let attacker = policy_for(params, scorers, Side::Attacker);
    let defender = policy_for(params, scorers, Side::Defender);
    let mut record = GameRecord {
        seed,
        moves: Vec::new(),
        outcome: TerminalStatus::InProgress,
        attacker: Trajectory::default(),
        defender: Trajectory::default(),
    };

    while !state.is_over() {
        let side = state.turn();
        let policy = if side == Side::Attacker { &attacker } else { &defender };
        match play_turn(&mut state, policy, &mut rng) {
            Ok((outcome, choice)) => {
                record.moves.push(outcome.mv);
                let snap = if params.record_states { Some(state.snapshot()) } else { None };
                let t = record.trajectory_mut(side);
                if let Some(s) = snap { t.states.push(s); }
                t.predicted.push(choice.predicted.unwrap_or(0.0));
            }
            Err(e) => {
                warn!("game {seed:#x} stopped after {} moves: {e}", state.move_count());
                break;
            }
        }
    }

    record.outcome = state.status();
    for side in [Side::Attacker, Side::Defender] {
        let reward = record.outcome.reward(side);
        let t = record.trajectory_mut(side);
        t.targets = corrected_scores(&t.predicted, reward);
        smooth_corrected_scores(&mut t.targets, params.smooth_plies);
    }
    debug!("game {seed:#x}: {} in {} moves", record.outcome, record.moves.len());
    record
}

pub fn generate_games(params: &SelfPlayParams, scorers: &Scorers<'_>) -> Vec<GameRecord> {
    generate_games_with_progress(params, scorers, |_| {})
}

/// Run `params.games` independent games. With `threads > 1` they run on a
/// rayon pool; results come back in game order and depend only on the seed.
pub fn generate_games_with_progress<F>(params: &SelfPlayParams, scorers: &Scorers<'_>, on_game: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |gi: usize| {
        let rec = play_game(params, game_seed(params.seed, gi), scorers);
        on_game(&rec);
        rec
    };
    if params.threads <= 1 {
        return (0..params.games).map(run).collect();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
        Ok(pool) => pool.install(|| (0..params.games).into_par_iter().map(run).collect()),
        Err(e) => {
            warn!("could not build a {}-thread pool ({e}); running serially", params.threads);
            (0..params.games).map(run).collect()
        }
    }
}

/// Shift a side's predictions one step forward and close with the final
/// reward: target `t` is the prediction made at `t + 1`, the last target is
/// the game result.
pub fn corrected_scores(predicted: &[f32], reward: f32) -> Vec<f32> {
    predicted.iter().skip(1).copied().chain(std::iter::once(reward)).take(predicted.len()).collect()
}

/// Blend the last `n` targets backwards: each becomes the mean of itself and
/// the (already blended) target after it.
pub fn smooth_corrected_scores(scores: &mut [f32], n: usize) {
    let len = scores.len();
    let n = n.min(len);
    for i in 0..n.saturating_sub(1) {
        let cur = len - i - 2;
        scores[cur] = (scores[cur] + scores[cur + 1]) / 2.0;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub games: usize,
    pub attacker_wins: usize,
    pub defender_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
}

pub fn summarize(records: &[GameRecord]) -> Summary {
    let mut s = Summary { games: records.len(), ..Summary::default() };
    let mut total = 0usize;
    for r in records {
        total += r.moves.len();
        match r.outcome.winner() {
            Some(Side::Attacker) => s.attacker_wins += 1,
            Some(Side::Defender) => s.defender_wins += 1,
            None => s.draws += 1,
        }
    }
    if !records.is_empty() { s.avg_moves = total as f64 / records.len() as f64; }
    s
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[GameRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("create {}", path.display()))?);
    for r in records {
        serde_json::to_writer(&mut w, r).context("encode game record")?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let r = BufReader::new(File::open(path).with_context(|| format!("open {}", path.display()))?);
    let mut out = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let rec = serde_json::from_str(&line).with_context(|| format!("{}:{}: bad game record", path.display(), i + 1))?;
        out.push(rec);
    }
    Ok(out)
}
