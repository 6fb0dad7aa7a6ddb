use clap::Parser;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use salvo::{init_logging, GameEngine, ShotResult, BOARD_SIZE};
use serde_json::json;

/// Play one seeded game by firing at every square in a shuffled order and
/// print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed used for both the fleet layout and the firing order.
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut engine = GameEngine::with_fleet(&mut rng)?;

    let n = BOARD_SIZE as usize;
    let mut targets: Vec<(usize, usize)> = (0..n * n).map(|i| (i / n, i % n)).collect();
    targets.shuffle(&mut rng);

    let mut sunk = Vec::new();
    for (r, c) in targets {
        if engine.status().is_over() {
            break;
        }
        let outcome = engine.shoot(r, c)?;
        if let ShotResult::Sunk(kind) = outcome.result {
            sunk.push(kind.name());
        }
    }

    let snapshot = engine.snapshot();
    let result = json!({
        "seed": args.seed,
        "status": snapshot.status,
        "score": snapshot.score,
        "shots_fired": snapshot.shots_fired,
        "sunk": sunk,
        "ships": snapshot.ships,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
