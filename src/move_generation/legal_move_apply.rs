//! Apply a single validated hop to a private board copy.
//!
//! Generation and session move entry both funnel through `apply_hop`, so the
//! promotion and capture-removal rules live in exactly one place.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone)]
pub struct AppliedHop {
    pub board: Board,
    /// The enemy piece removed by this hop, if it was a jump.
    pub captured: Option<(Coord, Cell)>,
    /// Whether the moving man was crowned on landing.
    pub promoted: bool,
}

/// Move the piece on `from` to `to` on a fresh copy of `board`.
///
/// A two-row hop is a jump and removes the piece it passes over. A man that
/// lands on its promotion row becomes a king immediately, which matters for
/// the remainder of a capture chain.
///
/// Panics on a jump that has no enemy piece to remove: callers validate hops
/// first, so this can only be an internal bug.
pub fn apply_hop(board: &Board, from: Coord, to: Coord) -> AppliedHop {
    let mover = board.cell(from);
    let color = mover
        .color()
        .unwrap_or_else(|| panic!("no piece to move on {from}"));

    let mut next = board.clone();
    let mut captured = None;

    if from.row.abs_diff(to.row) == 2 {
        let over = Coord::new((from.row + to.row) / 2, (from.col + to.col) / 2);
        let victim = board.cell(over);
        assert!(
            victim.color() == Some(color.opposite()),
            "jump {from} -> {to} passes over {victim:?}, not an enemy piece"
        );
        next.set(over, Cell::Empty);
        captured = Some((over, victim));
    }

    let promoted = !mover.is_king() && to.row == board.promotion_row(color);
    next.set(from, Cell::Empty);
    next.set(to, if promoted { mover.promoted() } else { mover });

    AppliedHop {
        board: next,
        captured,
        promoted,
    }
}
