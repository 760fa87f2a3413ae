//! Zobrist hashing for position identity and memoisation.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which keeps memo behaviour and tablebase files reproducible. Keys are
//! laid out on the largest supported grid and smaller boards index into the
//! same table.

use std::sync::OnceLock;

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::MAX_BOARD_SIZE;
use crate::game_state::checkers_types::*;

const GRID: usize = MAX_BOARD_SIZE as usize;

#[derive(Debug)]
struct ZobristTables {
    cell_state: [[u64; 4]; GRID * GRID],
    black_to_move: u64,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut cell_state = [[0u64; 4]; GRID * GRID];
    for cell in &mut cell_state {
        for key in cell {
            *key = next_random_u64(&mut seed);
        }
    }

    ZobristTables {
        cell_state,
        black_to_move: next_random_u64(&mut seed),
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Key contribution of `cell` standing on `coord`; zero for an empty cell.
#[inline]
pub fn cell_key(coord: Coord, cell: Cell) -> u64 {
    match cell.occupancy_index() {
        Some(state) => {
            tables().cell_state[usize::from(coord.row) * GRID + usize::from(coord.col)][state]
        }
        None => 0,
    }
}

#[inline]
pub fn side_to_move_key() -> u64 {
    tables().black_to_move
}

/// Compute a full key from scratch.
pub fn compute_zobrist_key(board: &Board, side_to_move: Color) -> u64 {
    let mut key = board
        .iter()
        .fold(0u64, |acc, (coord, cell)| acc ^ cell_key(coord, cell));
    if side_to_move == Color::Black {
        key ^= side_to_move_key();
    }
    key
}
