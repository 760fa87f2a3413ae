use crate::game_state::board::Board;
use crate::game_state::position::Position;
use crate::move_generation::move_path::MovePath;

/// One legal successor of a position.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub path: MovePath,
    pub position_after: Position,
    /// Enemy pieces removed along the path.
    pub captures: u8,
    /// Whether the moving man was crowned at some point along the path.
    pub promoted: bool,
}

impl GeneratedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captures > 0
    }
}

/// A successor board before it is wrapped into a `Position`.
#[derive(Debug, Clone)]
pub struct MoveCandidate {
    pub path: MovePath,
    pub board: Board,
    pub captures: u8,
    pub promoted: bool,
}

/// Source of legal successors; perft and benches are generic over it.
pub trait MoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove>;
}
