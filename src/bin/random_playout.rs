//! Standalone seeded random-playout runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout -- --games 10 --seed 1234`
//! `RUST_LOG=debug cargo run --bin random_playout -- --verbose`

use chrono::Local;
use clap::Parser;
use log::info;

use plum_ataxx::game_state::ataxx_rules::STARTING_POSITION_FEN;
use plum_ataxx::utils::playout_harness::{play_random_game, PlayoutConfig};
use plum_ataxx::AtaxxResult;

#[derive(Parser, Debug)]
#[command(name = "random_playout", about = "Play seeded random Ataxx games and report the results")]
struct Cli {
    /// Number of games; game `i` uses seed `seed + i`.
    #[arg(long, default_value_t = 1)]
    games: u32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 400)]
    max_plies: u32,

    /// Starting position in FEN.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Print every move and the final board.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> AtaxxResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    info!(
        "random_playout started {} games={} seed={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        cli.games,
        cli.seed
    );

    for game in 0..cli.games {
        let config = PlayoutConfig {
            max_plies: cli.max_plies,
            seed: cli.seed.wrapping_add(u64::from(game)),
            start_fen: cli.fen.clone(),
        };
        let result = play_random_game(&config)?;

        println!("game={} seed={} {}", game + 1, config.seed, result.report());
        if cli.verbose {
            let moves: Vec<String> = result.moves.iter().map(|mv| mv.to_string()).collect();
            println!("moves: {}", moves.join(" "));
            println!("{}", result.final_board);
        }
    }

    Ok(())
}
