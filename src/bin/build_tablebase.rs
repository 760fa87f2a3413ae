//! Build (or load) an endgame tablebase and report what it holds.
//!
//! Run with:
//! `cargo run --release --bin build_tablebase -- --board-size 6 --piece-limit 3`
//! `RUST_LOG=debug cargo run --release --bin build_tablebase -- --force`

use std::path::PathBuf;

use clap::Parser;
use log::info;

use plum_checkers::config::CheckersConfig;
use plum_checkers::errors::CheckersResult;
use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::tablebase::persistence::{load_or_build, BincodeFileStore, TablebaseStore};
use plum_checkers::tablebase::tablebase::Tablebase;

#[derive(Parser)]
#[command(name = "build_tablebase", about = "Solve small checkers endgames", version)]
struct Args {
    /// Board edge length (even, 4..=16)
    #[arg(long, default_value_t = 8)]
    board_size: u8,

    /// Maximum number of pieces on the board
    #[arg(long, default_value_t = 4)]
    piece_limit: u8,

    /// Tablebase file to read and write
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Rebuild even when a matching file exists
    #[arg(long)]
    force: bool,
}

fn main() -> CheckersResult<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CheckersConfig {
        board_size: args.board_size,
        endgame_piece_limit: args.piece_limit,
        ..CheckersConfig::default()
    };
    config.validate()?;
    let table_config = config.tablebase_config();

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "tablebase_{}x{}_{}.bin",
            args.board_size, args.board_size, args.piece_limit
        ))
    });
    let store = BincodeFileStore::new(path);

    let table = if args.force {
        let table = Tablebase::build(table_config);
        store.save(&table)?;
        table
    } else {
        load_or_build(&store, table_config)
    };

    info!("tablebase ready at {}", store.path().display());
    println!(
        "board={}x{} piece_limit={} built_at={} red_wins={} black_wins={}",
        table_config.board_size,
        table_config.board_size,
        table_config.piece_limit,
        table.built_at().to_rfc3339(),
        table.wins_for(Color::Red).len(),
        table.wins_for(Color::Black).len()
    );
    let longest = [Color::Red, Color::Black]
        .into_iter()
        .filter_map(|color| table.wins_for(color).values().copied().max())
        .max()
        .unwrap_or(0);
    println!("longest forced win: {longest} plies");
    Ok(())
}
