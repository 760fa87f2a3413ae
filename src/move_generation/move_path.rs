//! Move paths: the coordinate trail a piece follows during one turn.
//!
//! A path stores one `(from, to)` pair per hop, so a simple move or single
//! capture has length 2 and a k-fold capture chain has length 2k.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::checkers_types::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MovePath {
    coords: Vec<Coord>,
}

impl MovePath {
    pub fn single(from: Coord, to: Coord) -> Self {
        Self {
            coords: vec![from, to],
        }
    }

    /// Build a path from a list of `(from, to)` hops.
    pub fn from_hops(hops: &[(Coord, Coord)]) -> Self {
        Self {
            coords: hops.iter().flat_map(|(from, to)| [*from, *to]).collect(),
        }
    }

    pub fn push_hop(&mut self, from: Coord, to: Coord) {
        self.coords.push(from);
        self.coords.push(to);
    }

    pub fn pop_hop(&mut self) {
        self.coords.truncate(self.coords.len().saturating_sub(2));
    }

    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn hop_count(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn hops(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.coords.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn origin(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    pub fn destination(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Flat external encoding: four numbers per hop
    /// (from-row, from-col, to-row, to-col).
    pub fn to_flat(&self) -> Vec<u8> {
        self.coords
            .iter()
            .flat_map(|coord| [coord.row, coord.col])
            .collect()
    }

    /// Inverse of [`MovePath::to_flat`]; `None` unless the input is a
    /// non-empty multiple of four.
    pub fn from_flat(flat: &[u8]) -> Option<Self> {
        if flat.is_empty() || flat.len() % 4 != 0 {
            return None;
        }
        Some(Self {
            coords: flat
                .chunks_exact(2)
                .map(|pair| Coord::new(pair[0], pair[1]))
                .collect(),
        })
    }
}

impl fmt::Display for MovePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (from, to) in self.hops() {
            if first {
                write!(f, "{},{}", from.row, from.col)?;
                first = false;
            }
            write!(f, "-{},{}", to.row, to.col)?;
        }
        Ok(())
    }
}
