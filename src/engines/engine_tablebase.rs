//! Tablebase-backed engine.
//!
//! Plays perfect moves inside the table's bound and hands everything else to
//! a search engine.

use std::sync::Arc;

use crate::engines::engine_search::SearchEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::tablebase::tablebase::{Probe, Tablebase};

pub struct TablebaseEngine {
    table: Arc<Tablebase>,
    fallback: SearchEngine,
}

impl TablebaseEngine {
    pub fn new(table: Arc<Tablebase>, fallback: SearchEngine) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &Tablebase {
        &self.table
    }
}

impl Engine for TablebaseEngine {
    fn name(&self) -> &str {
        "PlumCheckers Tablebase"
    }

    fn new_game(&mut self) {
        self.fallback.new_game();
    }

    fn choose_move(&mut self, position: &Position) -> EngineOutput {
        let probe = self.table.probe(position);
        if probe == Probe::Unresolved {
            let mut out = self.fallback.choose_move(position);
            out.info_lines
                .insert(0, "info string tablebase_engine miss".to_owned());
            return out;
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(match probe {
            Probe::Win { winner, distance } => format!(
                "info string tablebase_engine hit winner {winner} distance {distance}"
            ),
            _ => "info string tablebase_engine hit draw".to_owned(),
        });
        out.best_move = self
            .table
            .best_move(position)
            .map(|chosen| chosen.path.clone());
        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::TablebaseEngine;
    use crate::engines::engine_search::SearchEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord};
    use crate::game_state::position::Position;
    use crate::search::search_types::SearchConfig;
    use crate::tablebase::tablebase::{Tablebase, TablebaseConfig};

    fn engine() -> TablebaseEngine {
        let table = Tablebase::build(TablebaseConfig {
            board_size: 6,
            piece_limit: 2,
        });
        let fallback = SearchEngine::new(SearchConfig {
            max_depth: 2,
            ..SearchConfig::default()
        });
        TablebaseEngine::new(Arc::new(table), fallback)
    }

    #[test]
    fn covered_position_uses_the_table() {
        let mut board = Board::empty(6);
        board.set(Coord::new(3, 2), Cell::RedMan);
        board.set(Coord::new(2, 3), Cell::BlackMan);
        let position = Position::new(board, Color::Red);

        let out = engine().choose_move(&position);
        assert_eq!(out.flat_move(), Some(vec![3, 2, 1, 4]));
        assert!(out.info_lines[0].contains("hit winner red distance 1"));
    }

    #[test]
    fn uncovered_position_falls_back_to_search() {
        let start = Position::new_game(6);
        let out = engine().choose_move(&start);
        assert!(out.info_lines[0].contains("miss"));
        let path = out.best_move.expect("search finds a move");
        assert!(start.successors().iter().any(|mv| mv.path == path));
    }
}
