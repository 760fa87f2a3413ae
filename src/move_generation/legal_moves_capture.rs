//! Capture and multi-jump chain generation.
//!
//! Every jump opens a recursive continuation from its landing cell. Each
//! prefix of a chain is emitted as its own candidate, so stopping early and
//! continuing are both legal outcomes. A man crowned mid-chain continues as a
//! king and may immediately jump backwards.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coord;
use crate::move_generation::legal_move_apply::apply_hop;
use crate::move_generation::move_generator::MoveCandidate;
use crate::move_generation::move_path::MovePath;

/// Landing cells of every single jump available to the piece on `from`.
pub fn jump_targets(board: &Board, from: Coord) -> Vec<Coord> {
    let piece = board.cell(from);
    let Some(color) = piece.color() else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(4);
    for &d_row in piece.row_directions() {
        for d_col in [-1, 1] {
            let Some(over) = board.offset(from, d_row, d_col) else {
                continue;
            };
            let Some(land) = board.offset(from, 2 * d_row, 2 * d_col) else {
                continue;
            };
            if board.cell(over).is_owned_by(color.opposite()) && board.cell(land).is_empty() {
                targets.push(land);
            }
        }
    }
    targets
}

pub fn generate_capture_moves(board: &Board, from: Coord, out: &mut Vec<MoveCandidate>) {
    let mut path = MovePath::default();
    extend_chain(board, from, &mut path, 0, false, out);
}

fn extend_chain(
    board: &Board,
    at: Coord,
    path: &mut MovePath,
    captures: u8,
    promoted: bool,
    out: &mut Vec<MoveCandidate>,
) {
    for land in jump_targets(board, at) {
        let applied = apply_hop(board, at, land);
        let promoted = promoted || applied.promoted;
        path.push_hop(at, land);

        out.push(MoveCandidate {
            path: path.clone(),
            board: applied.board.clone(),
            captures: captures + 1,
            promoted,
        });
        extend_chain(&applied.board, land, path, captures + 1, promoted, out);

        path.pop_hop();
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_capture_moves, jump_targets};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Coord};

    #[test]
    fn man_cannot_jump_backwards() {
        let mut board = Board::empty(8);
        board.set(Coord::new(3, 2), Cell::RedMan);
        board.set(Coord::new(4, 3), Cell::BlackMan);
        assert!(jump_targets(&board, Coord::new(3, 2)).is_empty());

        board.set(Coord::new(3, 2), Cell::RedKing);
        assert_eq!(jump_targets(&board, Coord::new(3, 2)), vec![Coord::new(5, 4)]);
    }

    #[test]
    fn own_pieces_and_blocked_landings_are_not_jumpable() {
        let mut board = Board::empty(8);
        board.set(Coord::new(5, 2), Cell::RedMan);
        board.set(Coord::new(4, 1), Cell::RedMan);
        board.set(Coord::new(4, 3), Cell::BlackMan);
        board.set(Coord::new(3, 4), Cell::BlackMan);
        assert!(jump_targets(&board, Coord::new(5, 2)).is_empty());
    }

    #[test]
    fn chain_prefixes_are_all_emitted() {
        let mut board = Board::empty(8);
        board.set(Coord::new(7, 0), Cell::RedMan);
        board.set(Coord::new(6, 1), Cell::BlackMan);
        board.set(Coord::new(4, 3), Cell::BlackMan);
        board.set(Coord::new(2, 5), Cell::BlackMan);

        let mut out = Vec::new();
        generate_capture_moves(&board, Coord::new(7, 0), &mut out);
        let captures: Vec<u8> = out.iter().map(|c| c.captures).collect();
        assert_eq!(captures, vec![1, 2, 3]);
        assert_eq!(out[2].path.hop_count(), 3);
        assert_eq!(out[2].board.counts(crate::game_state::checkers_types::Color::Black).total(), 0);
    }
}
