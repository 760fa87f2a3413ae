//! Per-search memo table keyed by Zobrist hash and remaining depth.
//!
//! Entries keep the board they were computed for; a key match with a
//! different board is treated as a miss and overwritten. The table lives for
//! one top-level search call.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    pub score: i32,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub collisions: u64,
}

#[derive(Debug, Clone)]
struct StoredEntry {
    board: Board,
    side_to_move: Color,
    entry: MemoEntry,
}

#[derive(Debug, Default)]
pub struct MemoTable {
    entries: HashMap<(u64, u8), StoredEntry>,
    stats: MemoStats,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    pub fn probe(&mut self, position: &Position, depth: u8) -> Option<MemoEntry> {
        self.stats.probes += 1;
        let stored = self.entries.get(&(position.zobrist_key(), depth))?;
        if stored.side_to_move != position.side_to_move() || &stored.board != position.board() {
            self.stats.collisions += 1;
            return None;
        }
        self.stats.hits += 1;
        Some(stored.entry)
    }

    pub fn store(&mut self, position: &Position, depth: u8, entry: MemoEntry) {
        self.stats.stores += 1;
        self.entries.insert(
            (position.zobrist_key(), depth),
            StoredEntry {
                board: position.board().clone(),
                side_to_move: position.side_to_move(),
                entry,
            },
        );
    }
}
