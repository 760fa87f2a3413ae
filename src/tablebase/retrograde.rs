//! Predecessor generation for backward induction.
//!
//! `unmove` undoes a simple step, `uncapture` undoes a capture chain one hop
//! at a time, placing the captured enemy piece back on each jumped cell. A
//! piece standing on its promotion row may be un-crowned while undoing the
//! hop that brought it there. Every candidate is checked by generating its
//! successors forward, so only true predecessors are returned.

use std::collections::HashSet;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;
use crate::tablebase::enumerate::placement_allowed;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Positions one simple step before `position`.
pub fn unmove(position: &Position) -> Vec<Position> {
    let board = position.board();
    let mover = position.side_to_move().opposite();
    let mut out = Vec::new();

    for (to, piece) in board.pieces(mover) {
        for (from, before) in reverse_origins(board, to, piece, 1) {
            let mut prior = board.clone();
            prior.set(to, Cell::Empty);
            prior.set(from, before);
            out.push(Position::new(prior, mover));
        }
    }
    out
}

/// Positions one capture move (any chain length) before `position`, staying
/// within `piece_limit` pieces.
pub fn uncapture(position: &Position, piece_limit: u8) -> Vec<Position> {
    let board = position.board();
    let mover = position.side_to_move().opposite();
    let mut out = Vec::new();

    for (to, piece) in board.pieces(mover) {
        unjump(board, to, piece, mover, piece_limit, &mut out);
    }
    out
}

/// Verified, de-duplicated predecessors of `position`.
pub fn predecessors(position: &Position, piece_limit: u8) -> Vec<Position> {
    let mut seen = HashSet::new();
    unmove(position)
        .into_iter()
        .chain(uncapture(position, piece_limit))
        .filter(|prior| prior.leads_to(position))
        .filter(|prior| seen.insert(prior.clone()))
        .collect()
}

/// Cells a piece now standing on `at` as `piece` could have come from with a
/// hop of `distance` (1 for a step, 2 for a jump), together with what the
/// piece was before the hop.
fn reverse_origins(board: &Board, at: Coord, piece: Cell, distance: i8) -> Vec<(Coord, Cell)> {
    let Some(color) = piece.color() else {
        return Vec::new();
    };
    if !piece.is_king() && at.row == board.promotion_row(color) {
        // A man cannot finish a hop on its promotion row uncrowned.
        return Vec::new();
    }

    let mut origins = Vec::with_capacity(5);
    let mut push = |d_row: i8, d_col: i8, before: Cell| {
        if let Some(from) = board.offset(at, -d_row * distance, -d_col * distance) {
            if board.cell(from).is_empty() {
                origins.push((from, before));
            }
        }
    };

    let forward = color.forward();
    if piece.is_king() {
        for (d_row, d_col) in DIAGONALS {
            push(d_row, d_col, piece);
        }
        if at.row == board.promotion_row(color) {
            for d_col in [-1, 1] {
                push(forward, d_col, Cell::man(color));
            }
        }
    } else {
        for d_col in [-1, 1] {
            push(forward, d_col, piece);
        }
    }
    origins
}

fn unjump(
    board: &Board,
    at: Coord,
    piece: Cell,
    mover: Color,
    piece_limit: u8,
    out: &mut Vec<Position>,
) {
    let victim_color = mover.opposite();
    if board.total_pieces() >= usize::from(piece_limit)
        || usize::from(board.counts(victim_color).total()) >= board.max_pieces_per_side()
    {
        return;
    }

    for (from, before) in reverse_origins(board, at, piece, 2) {
        let over = Coord::new((from.row + at.row) / 2, (from.col + at.col) / 2);
        if !board.cell(over).is_empty() {
            continue;
        }
        for victim in [Cell::man(victim_color), Cell::king(victim_color)] {
            if !placement_allowed(board, over, victim) {
                continue;
            }
            let mut prior = board.clone();
            prior.set(at, Cell::Empty);
            prior.set(from, before);
            prior.set(over, victim);
            out.push(Position::new(prior.clone(), mover));
            unjump(&prior, from, before, mover, piece_limit, out);
        }
    }
}
