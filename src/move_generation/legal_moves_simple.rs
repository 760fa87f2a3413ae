use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coord;
use crate::move_generation::legal_move_apply::apply_hop;
use crate::move_generation::move_generator::MoveCandidate;
use crate::move_generation::move_path::MovePath;

/// Cells one diagonal step away that the piece on `from` may slide onto:
/// forward always, backward only for kings.
pub fn step_targets(board: &Board, from: Coord) -> Vec<Coord> {
    let piece = board.cell(from);
    let mut targets = Vec::with_capacity(4);
    for &d_row in piece.row_directions() {
        for d_col in [-1, 1] {
            if let Some(to) = board.offset(from, d_row, d_col) {
                if board.cell(to).is_empty() {
                    targets.push(to);
                }
            }
        }
    }
    targets
}

pub fn generate_simple_moves(board: &Board, from: Coord, out: &mut Vec<MoveCandidate>) {
    for to in step_targets(board, from) {
        let applied = apply_hop(board, from, to);
        out.push(MoveCandidate {
            path: MovePath::single(from, to),
            board: applied.board,
            captures: 0,
            promoted: applied.promoted,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::step_targets;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Coord};

    #[test]
    fn man_steps_forward_only() {
        let mut board = Board::empty(8);
        board.set(Coord::new(4, 3), Cell::RedMan);
        let targets = step_targets(&board, Coord::new(4, 3));
        assert_eq!(targets, vec![Coord::new(3, 2), Coord::new(3, 4)]);

        board.set(Coord::new(4, 3), Cell::BlackMan);
        let targets = step_targets(&board, Coord::new(4, 3));
        assert_eq!(targets, vec![Coord::new(5, 2), Coord::new(5, 4)]);
    }

    #[test]
    fn king_steps_both_ways_and_respects_edges() {
        let mut board = Board::empty(8);
        board.set(Coord::new(7, 0), Cell::RedKing);
        assert_eq!(step_targets(&board, Coord::new(7, 0)), vec![Coord::new(6, 1)]);

        board.set(Coord::new(3, 4), Cell::BlackKing);
        assert_eq!(step_targets(&board, Coord::new(3, 4)).len(), 4);
    }
}
