//! Engine abstraction layer.
//!
//! Every move chooser (search, tablebase, random) sits behind one trait so the
//! match harness and the binaries can pick strategies at runtime.

use crate::game_state::position::Position;
use crate::move_generation::move_path::MovePath;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<MovePath>,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    /// The chosen move as flat `from-row, from-col, to-row, to-col` groups.
    pub fn flat_move(&self) -> Option<Vec<u8>> {
        self.best_move.as_ref().map(MovePath::to_flat)
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `best_move` is `None` only when `position` has no legal move.
    fn choose_move(&mut self, position: &Position) -> EngineOutput;
}
