//! Engine-wide configuration.
//!
//! `CheckersConfig` carries every recognised knob. Subsystems take the narrow
//! views derived from it (`SearchConfig`, `TablebaseConfig`) so each only sees
//! the settings it uses.

use serde::{Deserialize, Serialize};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::is_supported_size;
use crate::game_state::checkers_rules::*;
use crate::search::search_types::{SearchAlgorithm, SearchConfig};
use crate::tablebase::tablebase::TablebaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersConfig {
    pub board_size: u8,
    pub draw_move_limit: u16,
    pub search_depth: u8,
    pub endgame_piece_limit: u8,
    pub killer_slots: usize,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            draw_move_limit: DEFAULT_DRAW_MOVE_LIMIT,
            search_depth: DEFAULT_SEARCH_DEPTH,
            endgame_piece_limit: DEFAULT_ENDGAME_PIECE_LIMIT,
            killer_slots: DEFAULT_KILLER_SLOTS,
        }
    }
}

impl CheckersConfig {
    pub fn validate(&self) -> CheckersResult<()> {
        if !is_supported_size(self.board_size) {
            return Err(CheckersError::InvalidConfig(format!(
                "board_size must be even and within {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.draw_move_limit == 0 {
            return Err(CheckersError::InvalidConfig(
                "draw_move_limit must be at least 1".to_owned(),
            ));
        }
        if self.search_depth == 0 {
            return Err(CheckersError::InvalidConfig(
                "search_depth must be at least 1".to_owned(),
            ));
        }
        if self.endgame_piece_limit < 2 {
            return Err(CheckersError::InvalidConfig(format!(
                "endgame_piece_limit must be at least 2, got {}",
                self.endgame_piece_limit
            )));
        }
        if self.killer_slots == 0 {
            return Err(CheckersError::InvalidConfig(
                "killer_slots must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn search_config(&self, algorithm: SearchAlgorithm) -> SearchConfig {
        SearchConfig {
            max_depth: self.search_depth,
            algorithm,
            killer_slots: self.killer_slots,
        }
    }

    pub fn tablebase_config(&self) -> TablebaseConfig {
        TablebaseConfig {
            board_size: self.board_size,
            piece_limit: self.endgame_piece_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CheckersConfig;
    use crate::errors::CheckersError;

    #[test]
    fn defaults_are_valid() {
        let config = CheckersConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.board_size, 8);
        assert_eq!(config.draw_move_limit, 40);
        assert_eq!(config.killer_slots, 2);
    }

    #[test]
    fn odd_or_tiny_boards_are_rejected() {
        for board_size in [0, 2, 7, 18] {
            let config = CheckersConfig {
                board_size,
                ..CheckersConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(CheckersError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = CheckersConfig {
            search_depth: 0,
            ..CheckersConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
