//! Full legal move generation pipeline.
//!
//! Collects simple steps and capture chains for every piece of the side to
//! move, then wraps each candidate board into a successor `Position`.
//! Candidates that land on the same board through different paths collapse
//! into one successor; the first path found is kept.

use std::collections::HashSet;

use crate::game_state::board::Board;
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_capture::generate_capture_moves;
use crate::move_generation::legal_moves_simple::generate_simple_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveCandidate, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        generate_legal_moves(position)
    }
}

pub fn generate_legal_moves(position: &Position) -> Vec<GeneratedMove> {
    if position.is_terminal() {
        return Vec::new();
    }

    let board = position.board();
    let side = position.side_to_move();
    let mut candidates = Vec::<MoveCandidate>::with_capacity(16);
    for (from, _) in board.pieces(side) {
        generate_simple_moves(board, from, &mut candidates);
        generate_capture_moves(board, from, &mut candidates);
    }

    let mut seen = HashSet::<Board>::with_capacity(candidates.len());
    let mut legal = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !seen.insert(candidate.board.clone()) {
            continue;
        }
        legal.push(GeneratedMove {
            path: candidate.path,
            position_after: Position::new(candidate.board, side.opposite()),
            captures: candidate.captures,
            promoted: candidate.promoted,
        });
    }
    legal
}
