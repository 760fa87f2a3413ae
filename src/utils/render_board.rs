//! Plain-text board renderer.
//!
//! Produces the same diagram format `board_diagram` parses: one line per row
//! from row 0 (Black's home side) downwards, cells separated by spaces.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

pub const LIGHT_CELL: char = '-';
pub const EMPTY_DARK_CELL: char = '.';

#[inline]
pub fn cell_symbol(coord: Coord, cell: Cell) -> char {
    match cell {
        Cell::Empty if coord.is_dark() => EMPTY_DARK_CELL,
        Cell::Empty => LIGHT_CELL,
        Cell::RedMan => 'r',
        Cell::RedKing => 'R',
        Cell::BlackMan => 'b',
        Cell::BlackKing => 'B',
    }
}

pub fn render_board(board: &Board) -> String {
    let size = usize::from(board.size());
    let mut out = String::with_capacity(size * size * 2);

    for (coord, cell) in board.iter() {
        out.push(cell_symbol(coord, cell));
        if usize::from(coord.col) + 1 < size {
            out.push(' ');
        } else if usize::from(coord.row) + 1 < size {
            out.push('\n');
        }
    }

    out
}
