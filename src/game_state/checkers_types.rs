//! Core value types shared by the board, move generation, search and tablebase.
//!
//! By convention cell `(0, 0)` is the upper-left corner on Black's side. Red
//! starts at the bottom and moves towards row 0; Black starts at the top and
//! moves towards the last row. Red moves first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    RedMan,
    RedKing,
    BlackMan,
    BlackKing,
}

impl Cell {
    #[inline]
    pub const fn man(color: Color) -> Self {
        match color {
            Color::Red => Cell::RedMan,
            Color::Black => Cell::BlackMan,
        }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        match color {
            Color::Red => Cell::RedKing,
            Color::Black => Cell::BlackKing,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlackKing)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::RedMan | Cell::RedKing => Some(Color::Red),
            Cell::BlackMan | Cell::BlackKing => Some(Color::Black),
        }
    }

    #[inline]
    pub fn is_owned_by(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// The king this piece becomes on reaching its promotion row.
    #[inline]
    pub const fn promoted(self) -> Self {
        match self {
            Cell::RedMan => Cell::RedKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// Zobrist slot for occupied cells (`0..4`), `None` when empty.
    #[inline]
    pub const fn occupancy_index(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::RedMan => Some(0),
            Cell::RedKing => Some(1),
            Cell::BlackMan => Some(2),
            Cell::BlackKing => Some(3),
        }
    }

    /// Row deltas this piece may travel along (forward only for men).
    #[inline]
    pub fn row_directions(self) -> &'static [i8] {
        match self {
            Cell::Empty => &[],
            Cell::RedMan => &[-1],
            Cell::BlackMan => &[1],
            Cell::RedKing | Cell::BlackKing => &[-1, 1],
        }
    }
}

/// Board coordinate: `row` grows downwards, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Only dark cells (`row + col` odd) are ever occupied.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal tag of a position or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    RedWins,
    BlackWins,
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::Red => Outcome::RedWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::RedWins => Some(Color::Red),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Color, Coord, Outcome};

    #[test]
    fn promotion_only_changes_men() {
        assert_eq!(Cell::RedMan.promoted(), Cell::RedKing);
        assert_eq!(Cell::BlackMan.promoted(), Cell::BlackKing);
        assert_eq!(Cell::RedKing.promoted(), Cell::RedKing);
        assert_eq!(Cell::Empty.promoted(), Cell::Empty);
    }

    #[test]
    fn men_only_move_forward() {
        assert_eq!(Cell::RedMan.row_directions(), &[Color::Red.forward()]);
        assert_eq!(Cell::BlackMan.row_directions(), &[Color::Black.forward()]);
        assert_eq!(Cell::BlackKing.row_directions().len(), 2);
    }

    #[test]
    fn dark_cells_have_odd_coordinate_sum() {
        assert!(Coord::new(0, 1).is_dark());
        assert!(!Coord::new(0, 0).is_dark());
        assert!(Coord::new(7, 0).is_dark());
    }

    #[test]
    fn outcome_winner_round_trip() {
        assert_eq!(Outcome::win_for(Color::Black).winner(), Some(Color::Black));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::Ongoing.is_terminal());
    }
}
