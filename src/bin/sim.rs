use battleship::{Game, GameConfig, RandomPlayer, Side};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play random-vs-random games without a terminal and print a JSON summary.
#[derive(Parser)]
struct Args {
    /// Seed of the first game; later games use the following seeds.
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long, default_value_t = battleship::DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = battleship::DEFAULT_NUM_SHIPS)]
    ships: usize,
}

fn main() -> anyhow::Result<()> {
    battleship::init_logging();
    let args = Args::parse();
    let config = GameConfig::new(args.size, args.ships);
    config.validate()?;

    let mut results = Vec::new();
    let mut human_wins = 0u64;
    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&config, &mut rng)?;
        let mut p1 = RandomPlayer::new();
        let mut p2 = RandomPlayer::new();
        let winner = game.run(&mut p1, &mut p2, &mut rng)?;
        if winner == Side::Human {
            human_wins += 1;
        }
        results.push(json!({
            "seed": seed,
            "winner": winner,
            "shots": game.shots(),
        }));
    }

    let summary = json!({
        "config": config,
        "games": results,
        "player1_wins": human_wins,
        "player2_wins": args.games - human_wins,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
