//! Value-semantics checkers board.
//!
//! A `Board` owns its cells outright. Every hypothetical move clones the board
//! and edits the private copy, so no two positions can observe each other's
//! edits. Equality and hashing are purely structural.

use std::fmt;

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::{max_pieces_per_side, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game_state::checkers_types::*;
use crate::utils::render_board::render_board;

/// Per-side material tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PieceCounts {
    pub men: u8,
    pub kings: u8,
}

impl PieceCounts {
    #[inline]
    pub const fn total(self) -> u8 {
        self.men + self.kings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// An empty `size` x `size` board.
    ///
    /// Panics when `size` is odd or outside the supported range; callers that
    /// take a size from user input go through `CheckersConfig::validate`.
    pub fn empty(size: u8) -> Self {
        assert!(
            is_supported_size(size),
            "board size {size} must be even and within {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Cell::Empty; usize::from(size) * usize::from(size)],
        }
    }

    /// Standard opening layout: Black fills the top `(size - 2) / 2` rows,
    /// Red the bottom ones, leaving two empty rows in the middle.
    pub fn standard(size: u8) -> Self {
        let mut board = Self::empty(size);
        let camp_rows = (size - 2) / 2;
        for coord in board.dark_cells().collect::<Vec<_>>() {
            if coord.row < camp_rows {
                board.set(coord, Cell::BlackMan);
            } else if coord.row >= size - camp_rows {
                board.set(coord, Cell::RedMan);
            }
        }
        board
    }

    /// Rebuild a board from row-major cells, validating geometry and the
    /// light-cell invariant. Used when decoding persisted tablebases.
    pub fn from_cells(size: u8, cells: Vec<Cell>) -> Result<Self, CheckersError> {
        if !is_supported_size(size) {
            return Err(CheckersError::InvalidBoard(format!(
                "unsupported board size {size}"
            )));
        }
        if cells.len() != usize::from(size) * usize::from(size) {
            return Err(CheckersError::InvalidBoard(format!(
                "expected {} cells for a {size}x{size} board, got {}",
                usize::from(size) * usize::from(size),
                cells.len()
            )));
        }

        let board = Self { size, cells };
        for (coord, cell) in board.iter() {
            if !cell.is_empty() && !coord.is_dark() {
                return Err(CheckersError::InvalidBoard(format!(
                    "piece on light cell {coord}"
                )));
            }
        }
        for color in [Color::Red, Color::Black] {
            if usize::from(board.counts(color).total()) > board.max_pieces_per_side() {
                return Err(CheckersError::InvalidBoard(format!(
                    "{color} exceeds the per-side piece cap"
                )));
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn max_pieces_per_side(&self) -> usize {
        max_pieces_per_side(self.size)
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Cell at `coord`. Panics for off-board coordinates.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Cell at `coord`, or `None` when off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cell(coord))
    }

    /// Write a cell on this board's private copy.
    ///
    /// Writing a piece onto a light cell is an internal bug and panics.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(
            cell.is_empty() || coord.is_dark(),
            "attempted to place {cell:?} on light cell {coord}"
        );
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// `coord` shifted by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(&self, coord: Coord, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = i16::from(coord.row) + i16::from(d_row);
        let col = i16::from(coord.col) + i16::from(d_col);
        let size = i16::from(self.size);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Row on which `color`'s men are promoted.
    #[inline]
    pub fn promotion_row(&self, color: Color) -> u8 {
        match color {
            Color::Red => 0,
            Color::Black => self.size - 1,
        }
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            let row = (idx / usize::from(size)) as u8;
            let col = (idx % usize::from(size)) as u8;
            (Coord::new(row, col), *cell)
        })
    }

    /// Every dark cell in row-major order.
    pub fn dark_cells(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
            .filter(|coord| coord.is_dark())
    }

    /// Occupied cells belonging to `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.iter().filter(move |(_, cell)| cell.is_owned_by(color))
    }

    pub fn counts(&self, color: Color) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for (_, cell) in self.pieces(color) {
            if cell.is_king() {
                counts.kings += 1;
            } else {
                counts.men += 1;
            }
        }
        counts
    }

    #[inline]
    pub fn total_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[inline]
pub(crate) fn is_supported_size(size: u8) -> bool {
    size % 2 == 0 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord};

    #[test]
    fn standard_layout_fills_dark_cells_of_each_camp() {
        let board = Board::standard(8);
        assert_eq!(board.counts(Color::Red).total(), 12);
        assert_eq!(board.counts(Color::Black).total(), 12);
        assert_eq!(board.cell(Coord::new(0, 1)), Cell::BlackMan);
        assert_eq!(board.cell(Coord::new(5, 0)), Cell::RedMan);
        assert_eq!(board.cell(Coord::new(3, 0)), Cell::Empty);
        assert!(board
            .iter()
            .all(|(coord, cell)| cell.is_empty() || coord.is_dark()));
    }

    #[test]
    fn small_board_keeps_per_side_cap() {
        let board = Board::standard(4);
        assert_eq!(board.counts(Color::Red).total(), 2);
        assert_eq!(board.counts(Color::Black).total(), 2);
        assert_eq!(board.max_pieces_per_side(), 2);
    }

    #[test]
    fn clones_are_independent() {
        let original = Board::standard(8);
        let mut copy = original.clone();
        copy.set(Coord::new(5, 0), Cell::Empty);
        assert_eq!(original.cell(Coord::new(5, 0)), Cell::RedMan);
        assert_ne!(original, copy);
    }

    #[test]
    fn offset_rejects_off_board_targets() {
        let board = Board::empty(8);
        assert_eq!(board.offset(Coord::new(0, 1), -1, 1), None);
        assert_eq!(board.offset(Coord::new(7, 6), 1, 1), None);
        assert_eq!(board.offset(Coord::new(3, 4), 1, -1), Some(Coord::new(4, 3)));
    }

    #[test]
    #[should_panic]
    fn writing_a_piece_on_a_light_cell_panics() {
        let mut board = Board::empty(8);
        board.set(Coord::new(0, 0), Cell::RedMan);
    }

    #[test]
    fn from_cells_rejects_corrupt_input() {
        assert!(Board::from_cells(8, vec![Cell::Empty; 10]).is_err());
        let mut cells = vec![Cell::Empty; 64];
        cells[0] = Cell::RedKing;
        assert!(Board::from_cells(8, cells).is_err());
        assert!(Board::from_cells(8, Board::standard(8).cells().to_vec()).is_ok());
    }
}
