//! Text diagram parser used for fixtures and inspection.
//!
//! One line per row, row 0 first. Symbols: `.` empty dark cell, `-` light
//! cell, `r`/`R` red man/king, `b`/`B` black man/king. Spaces inside a row and
//! blank lines are ignored.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::{is_supported_size, Board};
use crate::game_state::checkers_types::*;
use crate::utils::render_board::{EMPTY_DARK_CELL, LIGHT_CELL};

pub fn parse_board_diagram(diagram: &str) -> CheckersResult<Board> {
    let rows: Vec<Vec<char>> = diagram
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    let size = u8::try_from(rows.len())
        .ok()
        .filter(|&size| is_supported_size(size))
        .ok_or_else(|| {
            CheckersError::InvalidDiagram(format!("unsupported row count {}", rows.len()))
        })?;

    let mut cells = Vec::with_capacity(rows.len() * rows.len());
    for (row, symbols) in rows.iter().enumerate() {
        if symbols.len() != rows.len() {
            return Err(CheckersError::InvalidDiagram(format!(
                "row {row} has {} cells, expected {}",
                symbols.len(),
                rows.len()
            )));
        }
        for (col, &symbol) in symbols.iter().enumerate() {
            let coord = Coord::new(row as u8, col as u8);
            cells.push(parse_symbol(coord, symbol)?);
        }
    }

    Board::from_cells(size, cells)
}

fn parse_symbol(coord: Coord, symbol: char) -> CheckersResult<Cell> {
    if symbol == LIGHT_CELL {
        return if coord.is_dark() {
            Err(CheckersError::InvalidDiagram(format!(
                "light-cell marker on dark cell {coord}"
            )))
        } else {
            Ok(Cell::Empty)
        };
    }

    let cell = match symbol {
        EMPTY_DARK_CELL => Cell::Empty,
        'r' => Cell::RedMan,
        'R' => Cell::RedKing,
        'b' => Cell::BlackMan,
        'B' => Cell::BlackKing,
        other => {
            return Err(CheckersError::InvalidDiagram(format!(
                "unknown symbol '{other}' at {coord}"
            )))
        }
    };
    if !coord.is_dark() {
        return Err(CheckersError::InvalidDiagram(format!(
            "'{symbol}' placed on light cell {coord}"
        )));
    }
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::parse_board_diagram;
    use crate::errors::CheckersError;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Coord};
    use crate::utils::render_board::render_board;

    #[test]
    fn parses_rendered_start_positions() {
        for size in [4, 6, 8, 10] {
            let board = Board::standard(size);
            let parsed = parse_board_diagram(&render_board(&board)).expect("rendered diagram parses");
            assert_eq!(parsed, board);
        }
    }

    #[test]
    fn compact_rows_and_blank_lines_are_accepted() {
        let board = parse_board_diagram(
            "
            -B-.
            .-.-

            -.-.
            r-.-
            ",
        )
        .expect("valid diagram");
        assert_eq!(board.cell(Coord::new(0, 1)), Cell::BlackKing);
        assert_eq!(board.cell(Coord::new(3, 0)), Cell::RedMan);
        assert_eq!(board.total_pieces(), 2);
    }

    #[test]
    fn rejects_malformed_diagrams() {
        let cases = [
            "- b -\n. - .\n- . -",
            "- b - b\n. - . -\n- . - .\nr - r",
            "- b - b\n. - . -\n- . - .\nr - x -",
            "b - - b\n. - . -\n- . - .\nr - r -",
            "- b - b\n- - . -\n- . - .\nr - r -",
        ];
        for diagram in cases {
            assert!(
                matches!(parse_board_diagram(diagram), Err(CheckersError::InvalidDiagram(_))),
                "accepted:\n{diagram}"
            );
        }
    }

    #[test]
    fn piece_cap_is_enforced() {
        let crowded = "- r - r\nr - . -\n- . - .\n. - . -";
        assert!(matches!(
            parse_board_diagram(crowded),
            Err(CheckersError::InvalidBoard(_))
        ));
    }
}
