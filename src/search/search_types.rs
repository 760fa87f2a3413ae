//! Shared search configuration, result types and the variant dispatcher.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::{DEFAULT_KILLER_SLOTS, DEFAULT_SEARCH_DEPTH};
use crate::game_state::checkers_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::move_path::MovePath;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::board_scoring::{BoardScorer, WIN_SCORE};
use crate::search::minimax::minimax_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
    KillerAlphaBeta,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Minimax,
        SearchAlgorithm::AlphaBeta,
        SearchAlgorithm::KillerAlphaBeta,
    ];
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchAlgorithm::Minimax => "minimax",
            SearchAlgorithm::AlphaBeta => "alpha-beta",
            SearchAlgorithm::KillerAlphaBeta => "killer",
        })
    }
}

impl FromStr for SearchAlgorithm {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(SearchAlgorithm::AlphaBeta),
            "killer" | "killer-alpha-beta" => Ok(SearchAlgorithm::KillerAlphaBeta),
            other => Err(CheckersError::InvalidConfig(format!(
                "unknown search algorithm '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub algorithm: SearchAlgorithm,
    /// Killer moves remembered per ply; only the killer variant reads it.
    pub killer_slots: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
            algorithm: SearchAlgorithm::KillerAlphaBeta,
            killer_slots: DEFAULT_KILLER_SLOTS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub memo_hits: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<MovePath>,
    /// Value of the root from the side to move's point of view.
    pub best_score: i32,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Plies to a forced outcome, when the score encodes one.
    pub fn forced_outcome_distance(&self) -> Option<u32> {
        let magnitude = self.best_score.unsigned_abs();
        let win = WIN_SCORE.unsigned_abs();
        (magnitude > win / 2).then(|| win - magnitude)
    }
}

/// Score of a terminal node reached `ply` plies below the root.
#[inline]
pub(crate) fn terminal_score(position: &Position, perspective: Color, ply: u8) -> i32 {
    match position.outcome().winner() {
        Some(winner) if winner == perspective => WIN_SCORE - i32::from(ply),
        Some(_) => -WIN_SCORE + i32::from(ply),
        None => 0,
    }
}

/// Run the configured search variant on `position`.
pub fn search_position<S: BoardScorer + ?Sized>(
    position: &Position,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let result = match config.algorithm {
        SearchAlgorithm::Minimax => minimax_search(position, scorer, config),
        SearchAlgorithm::AlphaBeta | SearchAlgorithm::KillerAlphaBeta => {
            alpha_beta_search(position, scorer, config)
        }
    };
    debug!(
        "{} depth {}: score {} nodes {} memo hits {} cutoffs {}",
        config.algorithm,
        config.max_depth,
        result.best_score,
        result.stats.nodes,
        result.stats.memo_hits,
        result.stats.cutoffs
    );
    result
}
