//! Read-only endgame tablebase.
//!
//! Built once for both colours; afterwards it answers, for any position within
//! its piece bound, whether a side can force a win and in how many plies.
//! In-bound positions won by neither colour are draws.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::game_state::checkers_rules::{DEFAULT_BOARD_SIZE, DEFAULT_ENDGAME_PIECE_LIMIT};
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::GeneratedMove;
use crate::move_generation::move_path::MovePath;
use crate::tablebase::builder::{solve_wins_for, WinDistances};
use crate::tablebase::enumerate::enumerate_positions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablebaseConfig {
    pub board_size: u8,
    pub piece_limit: u8,
}

impl Default for TablebaseConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            piece_limit: DEFAULT_ENDGAME_PIECE_LIMIT,
        }
    }
}

/// Raw lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Win { winner: Color, distance: u16 },
    Draw,
    /// Outside the table's bound; callers fall back to search.
    Unresolved,
}

/// Lookup result relative to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Win(u16),
    Loss(u16),
    Draw,
}

#[derive(Debug, Clone)]
pub struct Tablebase {
    config: TablebaseConfig,
    built_at: DateTime<Utc>,
    wins: [WinDistances; 2],
}

impl Tablebase {
    pub fn build(config: TablebaseConfig) -> Self {
        let universe = enumerate_positions(config);
        let red = solve_wins_for(&universe, Color::Red, config.piece_limit);
        let black = solve_wins_for(&universe, Color::Black, config.piece_limit);
        let table = Self::from_parts(config, Utc::now(), red, black);
        info!(
            "tablebase built: {} red wins, {} black wins, {} draws",
            table.wins[Color::Red.index()].len(),
            table.wins[Color::Black.index()].len(),
            universe.len().saturating_sub(table.len())
        );
        table
    }

    pub fn from_parts(
        config: TablebaseConfig,
        built_at: DateTime<Utc>,
        red_wins: WinDistances,
        black_wins: WinDistances,
    ) -> Self {
        Self {
            config,
            built_at,
            wins: [red_wins, black_wins],
        }
    }

    #[inline]
    pub fn config(&self) -> TablebaseConfig {
        self.config
    }

    #[inline]
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Number of won positions stored (both colours).
    pub fn len(&self) -> usize {
        self.wins.iter().map(|wins| wins.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn wins_for(&self, color: Color) -> &WinDistances {
        &self.wins[color.index()]
    }

    /// Whether `position` lies in the solved universe.
    pub fn covers(&self, position: &Position) -> bool {
        let board = position.board();
        board.size() == self.config.board_size
            && position.total_pieces() <= usize::from(self.config.piece_limit)
            && board.iter().all(|(coord, cell)| {
                cell.is_king()
                    || !matches!(cell.color(), Some(color) if coord.row == board.promotion_row(color))
            })
    }

    pub fn probe(&self, position: &Position) -> Probe {
        if !self.covers(position) {
            return Probe::Unresolved;
        }
        if let Some(winner) = position.outcome().winner() {
            return Probe::Win {
                winner,
                distance: 0,
            };
        }
        for color in [Color::Red, Color::Black] {
            if let Some(&distance) = self.wins[color.index()].get(position) {
                return Probe::Win {
                    winner: color,
                    distance,
                };
            }
        }
        Probe::Draw
    }

    /// `None` when the position is outside the table's bound.
    pub fn classify(&self, position: &Position, side: Color) -> Option<Classification> {
        match self.probe(position) {
            Probe::Win { winner, distance } if winner == side => Some(Classification::Win(distance)),
            Probe::Win { distance, .. } => Some(Classification::Loss(distance)),
            Probe::Draw => Some(Classification::Draw),
            Probe::Unresolved => None,
        }
    }

    /// Every successor's move path with its table value.
    pub fn successor_distances(&self, position: &Position) -> Vec<(MovePath, Probe)> {
        position
            .successors()
            .iter()
            .map(|mv| (mv.path.clone(), self.probe(&mv.position_after)))
            .collect()
    }

    /// Table move for the side to move: the fastest win, otherwise a drawing
    /// move, otherwise the longest resistance. `None` when the position is out
    /// of bound or has no moves.
    pub fn best_move<'a>(&self, position: &'a Position) -> Option<&'a GeneratedMove> {
        if !self.covers(position) {
            return None;
        }
        let side = position.side_to_move();
        // Lower rank is better for `side`; ties keep the first generated move.
        position
            .successors()
            .iter()
            .min_by_key(|mv| match self.probe(&mv.position_after) {
                Probe::Win { winner, distance } if winner == side => (0, i32::from(distance)),
                Probe::Draw | Probe::Unresolved => (1, 0),
                Probe::Win { distance, .. } => (2, -i32::from(distance)),
            })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;
    use rand::SeedableRng;

    use super::{Classification, Probe, Tablebase, TablebaseConfig};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord};
    use crate::game_state::position::Position;
    use crate::search::alpha_beta::alpha_beta_search;
    use crate::search::board_scoring::{MaterialScorer, WIN_SCORE};
    use crate::search::search_types::{SearchAlgorithm, SearchConfig};
    use crate::tablebase::enumerate::enumerate_positions;

    fn search_value(position: &Position, depth: u8) -> i32 {
        let config = SearchConfig {
            max_depth: depth,
            algorithm: SearchAlgorithm::AlphaBeta,
            killer_slots: 2,
        };
        alpha_beta_search(position, &MaterialScorer, config).best_score
    }

    fn check_against_search(config: TablebaseConfig, max_distance: u16, draw_samples: usize) {
        let table = Tablebase::build(config);
        let universe = enumerate_positions(config);

        for position in &universe {
            let Probe::Win { winner, distance } = table.probe(position) else {
                continue;
            };
            if distance == 0 || distance > max_distance {
                continue;
            }
            let value = search_value(position, distance as u8);
            let expected = if winner == position.side_to_move() {
                WIN_SCORE - i32::from(distance)
            } else {
                -WIN_SCORE + i32::from(distance)
            };
            assert_eq!(value, expected, "distance {distance} mismatch on\n{position}");
        }

        let mut rng = StdRng::seed_from_u64(17);
        let draws = universe
            .iter()
            .filter(|position| table.probe(position) == Probe::Draw)
            .choose_multiple(&mut rng, draw_samples);
        for position in draws {
            let value = search_value(position, 8);
            assert!(
                value.abs() < WIN_SCORE / 2,
                "search finds a forced result in a table draw\n{position}"
            );
        }
    }

    #[test]
    fn small_board_table_matches_search() {
        check_against_search(
            TablebaseConfig {
                board_size: 4,
                piece_limit: 3,
            },
            8,
            40,
        );
    }

    #[test]
    fn six_by_six_two_piece_table_matches_search() {
        check_against_search(
            TablebaseConfig {
                board_size: 6,
                piece_limit: 2,
            },
            6,
            40,
        );
    }

    #[test]
    fn classification_and_table_moves() {
        let table = Tablebase::build(TablebaseConfig {
            board_size: 6,
            piece_limit: 2,
        });

        let mut board = Board::empty(6);
        board.set(Coord::new(3, 2), Cell::RedMan);
        board.set(Coord::new(2, 3), Cell::BlackMan);
        let position = Position::new(board, Color::Red);

        assert_eq!(table.classify(&position, Color::Red), Some(Classification::Win(1)));
        assert_eq!(table.classify(&position, Color::Black), Some(Classification::Loss(1)));
        let best = table.best_move(&position).expect("winning move");
        assert_eq!(best.path.to_flat(), vec![3, 2, 1, 4]);

        let crowded = Position::new_game(6);
        assert_eq!(table.probe(&crowded), Probe::Unresolved);
        assert!(table.best_move(&crowded).is_none());
        assert_eq!(table.classify(&crowded, Color::Red), None);
    }

    #[test]
    fn distances_are_consistent_with_successors() {
        let config = TablebaseConfig {
            board_size: 4,
            piece_limit: 3,
        };
        let table = Tablebase::build(config);
        for position in enumerate_positions(config) {
            let side = position.side_to_move();
            let successors = table.successor_distances(&position);
            match table.probe(&position) {
                Probe::Win { winner, distance } if distance > 0 && winner == side => {
                    let fastest = successors
                        .iter()
                        .filter_map(|(_, probe)| match probe {
                            Probe::Win { winner: w, distance: d } if *w == side => Some(*d),
                            _ => None,
                        })
                        .min();
                    assert_eq!(fastest, Some(distance - 1));
                }
                Probe::Win { winner, distance } if distance > 0 => {
                    assert!(successors.iter().all(|(_, probe)| matches!(
                        probe,
                        Probe::Win { winner: w, distance: d } if *w == winner && *d < distance
                    )));
                }
                Probe::Draw => {
                    assert!(successors.iter().any(|(_, probe)| *probe == Probe::Draw));
                    assert!(successors.iter().all(|(_, probe)| !matches!(
                        probe,
                        Probe::Win { winner: w, .. } if *w == side
                    )));
                }
                _ => {}
            }
        }
    }
}
