use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;
use taflbot::game::movegen;
use taflbot::perft::{perft, perft_divide};
use taflbot::GameState;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Move generation node counts from the opening position")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print node counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let base = GameState::new_game();

    if args.divide {
        let mut total = 0u64;
        for (m, n) in perft_divide(&base, args.depth) {
            println!("{m}: {n}");
            total += n;
        }
        println!("nodes: {total}");
        return Ok(());
    }

    let t0 = Instant::now();
    let nodes = if args.threads <= 1 || args.depth < 2 {
        perft(&base, args.depth)
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        let root = movegen::legal_moves_for_side(&base, base.turn());
        pool.install(|| {
            root.par_iter()
                .map(|m| {
                    let mut child = base.clone();
                    match child.apply_move(m.from, m.to) {
                        Ok(_) => perft(&child, args.depth - 1),
                        Err(_) => 0,
                    }
                })
                .sum::<u64>()
        })
    };
    let dt = t0.elapsed().as_secs_f64();
    let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
    println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    Ok(())
}
