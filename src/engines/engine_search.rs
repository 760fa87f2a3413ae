//! Depth-limited search engine.
//!
//! Wraps `search_position` behind the `Engine` trait. The variant, depth and
//! killer slots all come from the `SearchConfig` it was built with.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::search_types::{search_position, SearchConfig};

pub struct SearchEngine<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
}

impl SearchEngine<MaterialScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialScorer)
    }
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for SearchEngine<S> {
    fn name(&self) -> &str {
        "PlumCheckers Search"
    }

    fn choose_move(&mut self, position: &Position) -> EngineOutput {
        let result = search_position(position, &self.scorer, self.config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string search_engine algorithm {} depth {}",
            self.config.algorithm, self.config.max_depth
        ));
        out.info_lines.push(format!(
            "info string search_engine score {} nodes {} memo_hits {} cutoffs {}",
            result.best_score, result.stats.nodes, result.stats.memo_hits, result.stats.cutoffs
        ));
        if let Some(plies) = result.forced_outcome_distance() {
            let verdict = if result.best_score > 0 { "win" } else { "loss" };
            out.info_lines.push(format!(
                "info string search_engine forced_{verdict} plies {plies}"
            ));
        }
        out.best_move = result.best_move;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::SearchEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord};
    use crate::game_state::position::Position;
    use crate::search::search_types::{SearchAlgorithm, SearchConfig};

    #[test]
    fn takes_the_winning_capture() {
        let mut board = Board::empty(6);
        board.set(Coord::new(3, 2), Cell::RedMan);
        board.set(Coord::new(2, 3), Cell::BlackMan);
        let position = Position::new(board, Color::Red);

        for algorithm in SearchAlgorithm::ALL {
            let mut engine = SearchEngine::new(SearchConfig {
                max_depth: 3,
                algorithm,
                killer_slots: 2,
            });
            let out = engine.choose_move(&position);
            assert_eq!(out.flat_move(), Some(vec![3, 2, 1, 4]), "{algorithm}");
            assert!(out
                .info_lines
                .iter()
                .any(|line| line.contains("forced_win plies 1")));
        }
    }

    #[test]
    fn no_move_in_a_finished_position() {
        let mut board = Board::empty(6);
        board.set(Coord::new(3, 2), Cell::RedMan);
        let position = Position::new(board, Color::Black);
        let mut engine = SearchEngine::default();
        assert!(engine.choose_move(&position).best_move.is_none());
    }
}
