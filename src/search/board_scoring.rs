//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search delegates static scoring to `BoardScorer`, so alternate heuristics
//! can be swapped in without touching the search code.

use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;

/// Score of a forced win. Search subtracts the ply so nearer wins rank higher;
/// every material score stays far below this.
pub const WIN_SCORE: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score `position` from `perspective`'s point of view.
    fn score(&self, position: &Position, perspective: Color) -> i32;
}

/// Men count one, kings two; forced outcomes score `±WIN_SCORE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    fn material(position: &Position, color: Color) -> i32 {
        let counts = position.counts(color);
        i32::from(counts.men) + 2 * i32::from(counts.kings)
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position, perspective: Color) -> i32 {
        match position.outcome() {
            Outcome::Ongoing => {
                Self::material(position, perspective)
                    - Self::material(position, perspective.opposite())
            }
            Outcome::Draw => 0,
            outcome if outcome.winner() == Some(perspective) => WIN_SCORE,
            _ => -WIN_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, WIN_SCORE};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord};
    use crate::game_state::position::Position;

    #[test]
    fn kings_count_double() {
        let mut board = Board::empty(8);
        board.set(Coord::new(5, 0), Cell::RedMan);
        board.set(Coord::new(5, 2), Cell::RedMan);
        board.set(Coord::new(2, 3), Cell::BlackKing);
        board.set(Coord::new(2, 5), Cell::BlackMan);
        let position = Position::new(board, Color::Red);
        assert_eq!(MaterialScorer.score(&position, Color::Red), -1);
        assert_eq!(MaterialScorer.score(&position, Color::Black), 1);
    }

    #[test]
    fn start_is_balanced() {
        assert_eq!(MaterialScorer.score(&Position::new_game(8), Color::Black), 0);
    }

    #[test]
    fn forced_outcomes_dominate_material() {
        let mut board = Board::empty(8);
        board.set(Coord::new(5, 0), Cell::RedMan);
        let position = Position::new(board, Color::Black);
        assert_eq!(MaterialScorer.score(&position, Color::Red), WIN_SCORE);
        assert_eq!(MaterialScorer.score(&position, Color::Black), -WIN_SCORE);
    }
}
