//! Immutable search/tablebase node.
//!
//! A `Position` is a board snapshot plus the side to move, with cached piece
//! counts, Zobrist key and terminal classification. Its legal successors are
//! generated lazily on first request and cached; nothing else about a position
//! changes after construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::errors::CheckersResult;
use crate::game_state::board::{Board, PieceCounts};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_checks::classify_outcome;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::GeneratedMove;
use crate::move_generation::move_path::MovePath;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::board_diagram::parse_board_diagram;

#[derive(Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    zobrist_key: u64,
    counts: [PieceCounts; 2],
    outcome: Outcome,
    successors: OnceLock<Vec<GeneratedMove>>,
}

impl Position {
    /// Build a position, classifying it immediately.
    ///
    /// Panics if either side holds more pieces than the board allows; such a
    /// board can only come from a bug in whoever assembled it.
    pub fn new(board: Board, side_to_move: Color) -> Self {
        let counts = [board.counts(Color::Red), board.counts(Color::Black)];
        let cap = board.max_pieces_per_side();
        for (color, tally) in [Color::Red, Color::Black].iter().zip(counts) {
            assert!(
                usize::from(tally.total()) <= cap,
                "{color} holds {} pieces, above the cap of {cap}",
                tally.total()
            );
        }

        let outcome = classify_outcome(&board, side_to_move);
        let zobrist_key = compute_zobrist_key(&board, side_to_move);

        Self {
            board,
            side_to_move,
            zobrist_key,
            counts,
            outcome,
            successors: OnceLock::new(),
        }
    }

    /// Standard opening position with Red to move.
    pub fn new_game(board_size: u8) -> Self {
        Self::new(Board::standard(board_size), Color::Red)
    }

    /// Build a position from a text diagram (see `utils::board_diagram`).
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> CheckersResult<Self> {
        Ok(Self::new(parse_board_diagram(diagram)?, side_to_move))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    pub fn counts(&self, color: Color) -> PieceCounts {
        self.counts[color.index()]
    }

    #[inline]
    pub fn total_pieces(&self) -> usize {
        usize::from(self.counts[0].total()) + usize::from(self.counts[1].total())
    }

    /// The same board with the other side to move.
    pub fn with_side_to_move(&self, side_to_move: Color) -> Self {
        Self::new(self.board.clone(), side_to_move)
    }

    /// Every distinct legal successor with the path that reaches it.
    /// Terminal positions have none.
    pub fn successors(&self) -> &[GeneratedMove] {
        self.successors.get_or_init(|| generate_legal_moves(self))
    }

    /// The move path leading from this position to `target`, if `target` is a
    /// legal successor.
    pub fn path_to(&self, target: &Position) -> Option<&MovePath> {
        self.successors()
            .iter()
            .find(|mv| mv.position_after == *target)
            .map(|mv| &mv.path)
    }

    #[inline]
    pub fn leads_to(&self, target: &Position) -> bool {
        self.path_to(target).is_some()
    }
}

impl Clone for Position {
    /// Clones share nothing with the original; the successor cache starts empty.
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            zobrist_key: self.zobrist_key,
            counts: self.counts,
            outcome: self.outcome,
            successors: OnceLock::new(),
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.zobrist_key == other.zobrist_key
            && self.side_to_move == other.side_to_move
            && self.board == other.board
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist_key);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}
