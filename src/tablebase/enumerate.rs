//! Bounded enumeration of candidate endgame positions.
//!
//! Boards are grown one piece at a time: every `k`-piece board comes from a
//! `(k - 1)`-piece board plus one piece, in any state, on any empty dark cell.
//! Two cheap filters apply. A man never stands on its own promotion row, and
//! a board holding a single colour is kept only with the empty side to move.
//! Other boards that legal play can never reach are kept; they are classified
//! by their true game value like any other position.

use std::collections::HashSet;

use log::{debug, info};

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;
use crate::tablebase::tablebase::TablebaseConfig;

const ALL_PIECES: [Cell; 4] = [Cell::RedMan, Cell::RedKing, Cell::BlackMan, Cell::BlackKing];

/// Whether `cell` may stand on `coord` in an enumerated board.
#[inline]
pub fn placement_allowed(board: &Board, coord: Coord, cell: Cell) -> bool {
    match cell.color() {
        Some(color) if !cell.is_king() => coord.row != board.promotion_row(color),
        Some(_) => true,
        None => false,
    }
}

/// Every board holding between one and `config.piece_limit` pieces.
pub fn enumerate_boards(config: TablebaseConfig) -> Vec<Board> {
    let mut layer: HashSet<Board> = HashSet::from([Board::empty(config.board_size)]);
    let mut all = Vec::new();

    for pieces in 1..=usize::from(config.piece_limit) {
        let mut next = HashSet::with_capacity(layer.len() * 8);
        for board in &layer {
            extend_board(board, &mut next);
        }
        debug!("enumerated {} boards with {pieces} pieces", next.len());
        if next.is_empty() {
            break;
        }
        all.extend(next.iter().cloned());
        layer = next;
    }
    all
}

fn extend_board(board: &Board, out: &mut HashSet<Board>) {
    let cap = board.max_pieces_per_side();
    for coord in board.dark_cells() {
        if !board.cell(coord).is_empty() {
            continue;
        }
        for cell in ALL_PIECES {
            let Some(color) = cell.color() else {
                continue;
            };
            if usize::from(board.counts(color).total()) >= cap
                || !placement_allowed(board, coord, cell)
            {
                continue;
            }
            let mut next = board.clone();
            next.set(coord, cell);
            out.insert(next);
        }
    }
}

/// Sides to move kept for `board`: both when both colours are present,
/// otherwise only the side without pieces.
pub fn sides_to_enumerate(board: &Board) -> Vec<Color> {
    let red = board.counts(Color::Red).total() > 0;
    let black = board.counts(Color::Black).total() > 0;
    match (red, black) {
        (true, true) => vec![Color::Red, Color::Black],
        (true, false) => vec![Color::Black],
        (false, true) => vec![Color::Red],
        (false, false) => Vec::new(),
    }
}

/// The position universe the tablebase is solved over.
pub fn enumerate_positions(config: TablebaseConfig) -> Vec<Position> {
    let positions: Vec<Position> = enumerate_boards(config)
        .into_iter()
        .flat_map(|board| {
            sides_to_enumerate(&board)
                .into_iter()
                .map(move |side| Position::new(board.clone(), side))
        })
        .collect();
    info!(
        "enumerated {} positions on {}x{} with at most {} pieces",
        positions.len(),
        config.board_size,
        config.board_size,
        config.piece_limit
    );
    positions
}

#[cfg(test)]
mod tests {
    use super::{enumerate_boards, enumerate_positions};
    use crate::game_state::checkers_types::{Cell, Color};
    use crate::tablebase::tablebase::TablebaseConfig;

    fn config(board_size: u8, piece_limit: u8) -> TablebaseConfig {
        TablebaseConfig {
            board_size,
            piece_limit,
        }
    }

    #[test]
    fn single_piece_layer_counts() {
        // 4x4: 8 dark cells. Each colour has 2 cells on its own promotion row
        // where only a king may stand: 8 kings + 6 men per colour.
        let boards = enumerate_boards(config(4, 1));
        assert_eq!(boards.len(), 28);
        // One position per board: only the empty side to move.
        assert_eq!(enumerate_positions(config(4, 1)).len(), 28);
    }

    #[test]
    fn no_man_on_its_promotion_row_and_caps_hold() {
        for board in enumerate_boards(config(4, 3)) {
            for (coord, cell) in board.iter() {
                assert!(!(cell == Cell::RedMan && coord.row == 0));
                assert!(!(cell == Cell::BlackMan && coord.row == 3));
            }
            assert!(board.counts(Color::Red).total() <= 2);
            assert!(board.counts(Color::Black).total() <= 2);
            assert!(board.total_pieces() <= 3);
        }
    }

    #[test]
    fn two_piece_boards_are_not_duplicated() {
        let boards = enumerate_boards(config(6, 2));
        let unique: std::collections::HashSet<_> = boards.iter().cloned().collect();
        assert_eq!(unique.len(), boards.len());
    }
}
