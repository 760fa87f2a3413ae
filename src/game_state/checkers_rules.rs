//! Canonical checkers rule constants.
//!
//! This module stores the static defaults for board geometry, the session
//! draw rule and the search/tablebase bounds used when no explicit
//! configuration is supplied.

/// Standard English draughts board dimension.
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Smallest board that still leaves an empty middle band between the camps.
pub const MIN_BOARD_SIZE: u8 = 4;

/// Largest board covered by the precomputed Zobrist key table.
pub const MAX_BOARD_SIZE: u8 = 16;

/// Consecutive non-capturing plies after which a session is drawn.
pub const DEFAULT_DRAW_MOVE_LIMIT: u16 = 40;

/// Default ply bound for the search engine.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

/// Default total piece count covered by the endgame tablebase.
pub const DEFAULT_ENDGAME_PIECE_LIMIT: u8 = 4;

/// Default number of killer moves remembered per ply.
pub const DEFAULT_KILLER_SLOTS: usize = 2;

/// Maximum number of pieces one side can hold on a `board_size` board.
#[inline]
pub const fn max_pieces_per_side(board_size: u8) -> usize {
    let half = (board_size / 2) as usize;
    (half - 1) * half
}

#[cfg(test)]
mod tests {
    use super::max_pieces_per_side;

    #[test]
    fn piece_cap_matches_starting_layout() {
        assert_eq!(max_pieces_per_side(8), 12);
        assert_eq!(max_pieces_per_side(6), 6);
        assert_eq!(max_pieces_per_side(4), 2);
    }
}
