use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_moves_capture::jump_targets;
use crate::move_generation::legal_moves_simple::step_targets;

/// Shape of a single validated hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopKind {
    Step,
    Jump { over: Coord },
}

#[inline]
pub fn can_move_from(board: &Board, from: Coord) -> bool {
    !step_targets(board, from).is_empty() || can_capture_from(board, from)
}

#[inline]
pub fn can_capture_from(board: &Board, from: Coord) -> bool {
    !jump_targets(board, from).is_empty()
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(coord, _)| can_move_from(board, coord))
}

pub fn has_any_capture(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(coord, _)| can_capture_from(board, coord))
}

/// Terminal classification of a board with `side_to_move` on turn.
///
/// Piece loss is checked first. A side to move that still owns pieces but
/// cannot move loses; if only the side to move can move, it wins.
pub fn classify_outcome(board: &Board, side_to_move: Color) -> Outcome {
    if board.counts(Color::Red).total() == 0 {
        return Outcome::BlackWins;
    }
    if board.counts(Color::Black).total() == 0 {
        return Outcome::RedWins;
    }

    let mover_can_move = has_any_legal_move(board, side_to_move);
    if !mover_can_move {
        return Outcome::win_for(side_to_move.opposite());
    }
    if !has_any_legal_move(board, side_to_move.opposite()) {
        return Outcome::win_for(side_to_move);
    }
    Outcome::Ongoing
}

/// Check one hop requested by `side` without applying it.
///
/// Returns `None` for off-board coordinates, non-diagonal or over-long
/// hops, a start cell not holding one of `side`'s pieces, an occupied
/// landing cell, a backward hop by a man, or a jump that does not pass over
/// an enemy piece.
pub fn validate_hop(board: &Board, side: Color, from: Coord, to: Coord) -> Option<HopKind> {
    if !board.contains(from) || !board.contains(to) {
        return None;
    }
    let piece = board.cell(from);
    if !piece.is_owned_by(side) || !board.cell(to).is_empty() {
        return None;
    }

    let d_row = i16::from(to.row) - i16::from(from.row);
    let d_col = i16::from(to.col) - i16::from(from.col);
    let distance = d_row.abs();
    if distance == 0 || distance != d_col.abs() || distance > 2 {
        return None;
    }
    let forward = i16::from(side.forward());
    if !piece.is_king() && d_row.signum() != forward {
        return None;
    }

    if distance == 1 {
        return Some(HopKind::Step);
    }
    let over = Coord::new((from.row + to.row) / 2, (from.col + to.col) / 2);
    board
        .cell(over)
        .is_owned_by(side.opposite())
        .then_some(HopKind::Jump { over })
}
