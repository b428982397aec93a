//! Kivi simulator
//!
//! Plays headless games between automated seats and reports the results.
//! Set `RUST_LOG=kivi=debug` to watch every roll and placement.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kivi::{GameConfig, GameSession, PlayerConfig, MAX_PLAYERS, SEAT_COLORS};

/// Upper bound on turns in one game; a game that has not ended by then is abandoned.
const TURN_LIMIT: u32 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "kivi_sim", about = "Play automated Kivi games")]
struct Args {
    /// Number of automated seats
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
    players: u8,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Seed for the first game; later games use consecutive seeds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stones per player
    #[arg(long, default_value_t = kivi::core::DEFAULT_STONES)]
    stones: u32,

    /// Seconds per turn (automated seats never run the clock down)
    #[arg(long, default_value_t = kivi::core::DEFAULT_TURN_SECONDS)]
    turn_time: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(?args, "starting simulation");

    let mut wins = vec![0u32; args.players as usize];
    for game in 0..args.games {
        let mut config = GameConfig::new()
            .with_stones_per_player(args.stones)
            .with_turn_time(args.turn_time);
        for seat in 0..args.players as usize {
            config = config.with_player(PlayerConfig::cpu(format!("CPU {}", seat + 1), SEAT_COLORS[seat]));
        }
        if let Some(seed) = args.seed {
            config = config.with_seed(seed.wrapping_add(u64::from(game)));
        }

        let mut session = GameSession::new(config);
        let turns = session.run_automated_turns(TURN_LIMIT);

        match session.outcome() {
            Some(outcome) => {
                wins[outcome.winner.index()] += 1;
                info!(
                    game,
                    seed = session.seed(),
                    turns,
                    winner = %outcome.winner,
                    scores = ?outcome.final_scores,
                    "game finished"
                );
            }
            None => warn!(game, seed = session.seed(), turns, "game abandoned at turn limit"),
        }
    }

    for (seat, count) in wins.iter().enumerate() {
        println!("CPU {}: {} win(s)", seat + 1, count);
    }
}
