#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship::{
    cli::{login_menu, InputReader},
    init_logging, CliPlayer, CredentialStore, FileCredentialStore, Game, GameConfig,
    MemoryCredentialStore, RandomPlayer, Side, BOARD_SIZES, DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS,
    SHIP_COUNTS,
};
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum FirstPlayer {
    Human,
    Computer,
}

#[cfg(feature = "std")]
impl From<FirstPlayer> for Side {
    fn from(p: FirstPlayer) -> Self {
        match p {
            FirstPlayer::Human => Side::Human,
            FirstPlayer::Computer => Side::Computer,
        }
    }
}

/// Play Battleship against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Side length of each board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE as u8, value_parser = clap::value_parser!(u8).range(*BOARD_SIZES.start() as i64..=*BOARD_SIZES.end() as i64))]
    size: u8,
    /// Ships placed on each board.
    #[arg(long, default_value_t = DEFAULT_NUM_SHIPS as u8, value_parser = clap::value_parser!(u8).range(*SHIP_COUNTS.start() as i64..=*SHIP_COUNTS.end() as i64))]
    ships: u8,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Who fires the first shot.
    #[arg(long, value_enum, default_value_t = FirstPlayer::Human)]
    first: FirstPlayer,
    /// File holding registered users. Without it, accounts last for this session only.
    #[arg(long)]
    credentials: Option<PathBuf>,
    /// Skip the login menu.
    #[arg(long)]
    guest: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut input = InputReader::stdio();
    input.say("Welcome to Battleship!")?;

    let mut config = GameConfig::new(usize::from(cli.size), usize::from(cli.ships))
        .with_first(cli.first.into());

    if !cli.guest {
        let mut store: Box<dyn CredentialStore> = match &cli.credentials {
            Some(path) => Box::new(FileCredentialStore::open(path).with_context(|| {
                format!("failed to open credential store {}", path.display())
            })?),
            None => Box::new(MemoryCredentialStore::new()),
        };
        match login_menu(store.as_mut(), &mut input)? {
            Some(username) => config = config.with_human_name(&username),
            None => {
                input.say("Goodbye!")?;
                return Ok(());
            }
        }
    }

    let mut rng = if let Some(s) = cli.seed {
        input.say(format!("Using fixed seed: {} (game will be reproducible)", s))?;
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(&config, &mut rng)?;
    input.say(format!(
        "{} ships hidden on each {}x{} board. Enter shots as row,col.",
        config.ship_count, config.size, config.size
    ))?;

    let mut human = CliPlayer::new(input);
    let mut computer = RandomPlayer::new();
    game.run(&mut human, &mut computer, &mut rng)?;
    Ok(())
}
