//! Seedable pseudo-random positions for property tests and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;

/// Probability that a placed piece is a king.
const KING_PROBABILITY: f64 = 0.25;

/// Scatter `pieces_per_side` pieces of each colour over random dark cells.
///
/// Men never land on their own promotion row. The piece count is clamped to
/// what the board can hold for each side. The result may be terminal.
pub fn random_position<R: Rng + ?Sized>(
    rng: &mut R,
    board_size: u8,
    pieces_per_side: usize,
    side_to_move: Color,
) -> Position {
    let mut board = Board::empty(board_size);
    let per_side = pieces_per_side.min(board.max_pieces_per_side());

    let mut free: Vec<Coord> = board.dark_cells().collect();
    free.shuffle(rng);

    for color in [Color::Red, Color::Black] {
        let mut placed = 0;
        let mut index = 0;
        while placed < per_side && index < free.len() {
            let coord = free[index];
            let king = rng.random_bool(KING_PROBABILITY);
            if !king && coord.row == board.promotion_row(color) {
                index += 1;
                continue;
            }
            board.set(coord, if king { Cell::king(color) } else { Cell::man(color) });
            free.swap_remove(index);
            placed += 1;
        }
    }

    Position::new(board, side_to_move)
}
