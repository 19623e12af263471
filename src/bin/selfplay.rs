use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use taflbot::eval::MaterialScorer;
use taflbot::policy::GreedyParams;
use taflbot::selfplay::{generate_games_with_progress, summarize, write_records, PolicyKind, Scorers, SelfPlayParams};
use taflbot::Side;

#[derive(Parser, Debug)]
#[command(name = "taflbot-selfplay", about = "Play Hnefatafl games between random and greedy policies")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    /// Move ceiling before a game is declared drawn
    #[arg(long, default_value_t = 1000)]
    max_moves: u32,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    attacker: PolicyKind,
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    defender: PolicyKind,
    /// Number of final training targets blended toward the result
    #[arg(long, default_value_t = 10)]
    smooth_plies: usize,
    /// Warn when a single scorer call exceeds this many milliseconds
    #[arg(long)]
    slow_call_ms: Option<u64>,
    /// Write game records as JSON lines
    #[arg(long)]
    out: Option<PathBuf>,
    /// Leave per-move board snapshots out of the records
    #[arg(long, default_value_t = false)]
    no_states: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_moves: a.max_moves,
        threads: a.threads.max(1),
        seed: a.seed,
        attacker: a.attacker,
        defender: a.defender,
        greedy: GreedyParams { slow_call: a.slow_call_ms.map(Duration::from_millis) },
        smooth_plies: a.smooth_plies,
        record_states: !a.no_states,
    };
    let attacker = MaterialScorer::new(Side::Attacker);
    let defender = MaterialScorer::new(Side::Defender);
    let scorers = Scorers { attacker: &attacker, defender: &defender };

    eprintln!("Playing {} games (attacker={:?}, defender={:?}, threads={}, seed={})", a.games, a.attacker, a.defender, params.threads, a.seed);
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")?);
    let games = generate_games_with_progress(&params, &scorers, |rec| {
        pb.set_message(format!("last: {} in {} moves", rec.outcome, rec.moves.len()));
        pb.inc(1);
    });
    pb.finish_and_clear();

    let s = summarize(&games);
    println!(
        "games={} attacker_wins={} defender_wins={} draws={} avg_moves={:.1}",
        s.games, s.attacker_wins, s.defender_wins, s.draws, s.avg_moves
    );
    if let Some(out) = a.out {
        write_records(&out, &games)?;
        eprintln!("Wrote {} records to {}", games.len(), out.display());
    }
    Ok(())
}
