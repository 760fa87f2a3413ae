//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series -- --player1 killer --player2 random`
//! `RUST_LOG=info cargo run --release --bin match_series -- --board-size 6 --games 20`

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use plum_checkers::config::CheckersConfig;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_search::SearchEngine;
use plum_checkers::engines::engine_tablebase::TablebaseEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::errors::CheckersResult;
use plum_checkers::search::search_types::SearchAlgorithm;
use plum_checkers::tablebase::persistence::{load_or_build, BincodeFileStore};
use plum_checkers::tablebase::tablebase::Tablebase;
use plum_checkers::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Random,
    Minimax,
    AlphaBeta,
    Killer,
    /// Killer alpha-beta backed by an endgame tablebase
    Tablebase,
}

#[derive(Parser)]
#[command(name = "match_series", about = "Play checkers engines against each other", version)]
struct Args {
    #[arg(long, value_enum, default_value_t = EngineKind::Killer)]
    player1: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    player2: EngineKind,

    #[arg(long, default_value_t = 8)]
    board_size: u8,

    /// Search depth in plies for the search engines
    #[arg(long, default_value_t = 5)]
    depth: u8,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Tablebase file for the tablebase engine; built when missing
    #[arg(long, value_name = "FILE")]
    tablebase: Option<PathBuf>,
}

fn make_engine(
    kind: EngineKind,
    config: &CheckersConfig,
    table: Option<&Arc<Tablebase>>,
    seed: u64,
) -> Box<dyn Engine> {
    let search = |algorithm| SearchEngine::new(config.search_config(algorithm));
    match kind {
        EngineKind::Random => Box::new(RandomEngine::seeded(seed)),
        EngineKind::Minimax => Box::new(search(SearchAlgorithm::Minimax)),
        EngineKind::AlphaBeta => Box::new(search(SearchAlgorithm::AlphaBeta)),
        EngineKind::Killer => Box::new(search(SearchAlgorithm::KillerAlphaBeta)),
        EngineKind::Tablebase => match table {
            Some(table) => Box::new(TablebaseEngine::new(
                Arc::clone(table),
                search(SearchAlgorithm::KillerAlphaBeta),
            )),
            None => Box::new(search(SearchAlgorithm::KillerAlphaBeta)),
        },
    }
}

fn main() -> CheckersResult<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CheckersConfig {
        board_size: args.board_size,
        search_depth: args.depth,
        ..CheckersConfig::default()
    };
    config.validate()?;

    let table = if args.player1 == EngineKind::Tablebase || args.player2 == EngineKind::Tablebase {
        let path = args.tablebase.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "tablebase_{}x{}_{}.bin",
                config.board_size, config.board_size, config.endgame_piece_limit
            ))
        });
        let store = BincodeFileStore::new(path);
        Some(Arc::new(load_or_build(&store, config.tablebase_config())))
    } else {
        None
    };

    let stats = play_engine_match_series(
        || make_engine(args.player1, &config, table.as_ref(), args.seed),
        || make_engine(args.player2, &config, table.as_ref(), args.seed ^ 0xFFFF),
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                game: config,
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
