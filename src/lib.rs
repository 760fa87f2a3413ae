//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, endgame tablebase, engines, and utility helpers) so binaries,
//! tests, and benchmarks can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_capture;
    pub mod legal_moves_simple;
    pub mod move_generator;
    pub mod move_path;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod killer_moves;
    pub mod memo_table;
    pub mod minimax;
    pub mod search_types;
    pub mod zobrist;
}

pub mod tablebase {
    pub mod builder;
    pub mod enumerate;
    pub mod persistence;
    pub mod retrograde;
    pub mod tablebase;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_tablebase;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_diagram;
    pub mod match_harness;
    pub mod random_position;
    pub mod render_board;
}
