use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, GameResult, Recorder, Strategy};
use quadwar::Player;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Strategy for the blue side (moves first)
    #[arg(value_enum)]
    blue: Strategy,

    /// Strategy for the red side
    #[arg(value_enum)]
    red: Strategy,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// Declare a tie once a game exceeds this many turns
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record each game's moves as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = match args.record_games_to_directory {
        Some(dir_path) => Some(Recorder::new(dir_path)?),
        None => None,
    };

    let mut wins = [0usize; 2]; // blue, red
    let mut ties = 0usize;
    for game_idx in 0..args.num_games {
        match play_game(&mut rng, [args.blue, args.red], args.max_turns, &mut recorder)? {
            GameResult::WonBy { player, reason } => {
                debug!(game_idx, ?player, %reason, "game won");
                match player {
                    Player::Blue => wins[0] += 1,
                    Player::Red => wins[1] += 1,
                }
            }
            GameResult::Tie { reason } => {
                debug!(game_idx, %reason, "tie");
                ties += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by blue ({:?})\n- {} wins by red ({:?})\n- {} ties",
        wins[0], args.blue, wins[1], args.red, ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
