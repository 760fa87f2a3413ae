//! Session-level game wrapper.
//!
//! `Game` owns the current `Position` plus the state a `Position` deliberately
//! does not carry: the consecutive non-capture ply counter that forces a draw,
//! and the history of played move paths. Move requests that break the rules
//! are rejected with `false` and leave the game untouched.

use crate::config::CheckersConfig;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_hop;
use crate::move_generation::legal_move_checks::{validate_hop, HopKind};
use crate::move_generation::move_generator::GeneratedMove;
use crate::move_generation::move_path::MovePath;

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    quiet_plies: u16,
    draw_move_limit: u16,
    history: Vec<MovePath>,
}

impl Game {
    pub fn new(config: &CheckersConfig) -> Self {
        Self::from_position(Position::new_game(config.board_size), config.draw_move_limit)
    }

    pub fn from_position(position: Position, draw_move_limit: u16) -> Self {
        Self {
            position,
            quiet_plies: 0,
            draw_move_limit,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn quiet_plies(&self) -> u16 {
        self.quiet_plies
    }

    pub fn history(&self) -> &[MovePath] {
        &self.history
    }

    /// `None` for coordinates off the board.
    pub fn piece_at(&self, coord: Coord) -> Option<Cell> {
        self.position.board().get(coord)
    }

    pub fn red_count(&self) -> u8 {
        self.position.counts(Color::Red).total()
    }

    pub fn black_count(&self) -> u8 {
        self.position.counts(Color::Black).total()
    }

    pub fn legal_moves(&self) -> &[GeneratedMove] {
        self.position.successors()
    }

    /// Piece loss first, then the quiet-ply draw, then a side unable to move.
    pub fn outcome(&self) -> Outcome {
        if self.red_count() == 0 {
            return Outcome::BlackWins;
        }
        if self.black_count() == 0 {
            return Outcome::RedWins;
        }
        if self.quiet_plies >= self.draw_move_limit {
            return Outcome::Draw;
        }
        self.position.outcome()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Play a single hop for the side to move and pass the turn.
    pub fn try_step(&mut self, from: Coord, to: Coord) -> bool {
        self.play(&MovePath::single(from, to))
    }

    /// Play a whole turn, validating every hop against the board as it
    /// stands after the previous one. Only jumps may be chained, and every
    /// hop after the first must start where the last one landed.
    pub fn play(&mut self, path: &MovePath) -> bool {
        if self.is_over() || path.is_empty() {
            return false;
        }

        let side = self.current_turn();
        let mut board: Board = self.position.board().clone();
        let mut captures = 0usize;
        let mut landed: Option<Coord> = None;

        for (index, (from, to)) in path.hops().enumerate() {
            if landed.is_some_and(|at| at != from) {
                return false;
            }
            match validate_hop(&board, side, from, to) {
                None => return false,
                Some(HopKind::Step) if index > 0 || path.hop_count() > 1 => return false,
                Some(HopKind::Step) => {}
                Some(HopKind::Jump { .. }) => captures += 1,
            }
            board = apply_hop(&board, from, to).board;
            landed = Some(to);
        }

        self.quiet_plies = if captures > 0 {
            0
        } else {
            self.quiet_plies.saturating_add(1)
        };
        self.history.push(path.clone());
        self.position = Position::new(board, side.opposite());
        true
    }

    /// Play the successor reached by `generated`, typically one chosen by an
    /// engine from `legal_moves()`.
    pub fn play_generated(&mut self, generated: &GeneratedMove) -> bool {
        if self.is_over() || !self.position.leads_to(&generated.position_after) {
            return false;
        }
        self.quiet_plies = if generated.is_capture() {
            0
        } else {
            self.quiet_plies.saturating_add(1)
        };
        self.history.push(generated.path.clone());
        self.position = generated.position_after.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::config::CheckersConfig;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Cell, Color, Coord, Outcome};
    use crate::game_state::position::Position;
    use crate::move_generation::move_path::MovePath;

    fn game_with(pieces: &[(u8, u8, Cell)], side: Color) -> Game {
        let mut board = Board::empty(8);
        for &(row, col, cell) in pieces {
            board.set(Coord::new(row, col), cell);
        }
        Game::from_position(Position::new(board, side), 40)
    }

    #[test]
    fn start_position_accepts_diagonal_step() {
        let mut game = Game::new(&CheckersConfig::default());
        assert!(game.try_step(Coord::new(5, 2), Coord::new(4, 3)));
        assert_eq!(game.current_turn(), Color::Black);
        assert_eq!(game.piece_at(Coord::new(4, 3)), Some(Cell::RedMan));
        assert_eq!(game.piece_at(Coord::new(5, 2)), Some(Cell::Empty));
        assert_eq!(game.quiet_plies(), 1);
    }

    #[test]
    fn start_position_rejects_bad_steps() {
        let mut game = Game::new(&CheckersConfig::default());
        assert!(!game.try_step(Coord::new(5, 2), Coord::new(4, 2)));
        assert!(!game.try_step(Coord::new(5, 2), Coord::new(5, 4)));
        assert!(!game.try_step(Coord::new(5, 2), Coord::new(3, 2)));
        assert!(!game.try_step(Coord::new(5, 2), Coord::new(2, 5)));
        assert!(!game.try_step(Coord::new(6, 1), Coord::new(5, 2)));
        assert!(!game.try_step(Coord::new(2, 1), Coord::new(3, 2)));
        assert!(!game.try_step(Coord::new(5, 0), Coord::new(8, 3)));
        assert_eq!(game.current_turn(), Color::Red);
        assert!(game.history().is_empty());
    }

    #[test]
    fn backward_step_needs_a_king() {
        let mut game = game_with(&[(4, 3, Cell::RedMan), (0, 1, Cell::BlackMan)], Color::Red);
        assert!(!game.try_step(Coord::new(4, 3), Coord::new(5, 4)));

        let mut game = game_with(&[(4, 3, Cell::RedKing), (0, 1, Cell::BlackMan)], Color::Red);
        assert!(game.try_step(Coord::new(4, 3), Coord::new(5, 4)));
    }

    #[test]
    fn capture_chain_is_played_hop_by_hop() {
        let mut game = game_with(
            &[
                (5, 0, Cell::RedMan),
                (4, 1, Cell::BlackMan),
                (2, 3, Cell::BlackMan),
                (0, 7, Cell::BlackMan),
            ],
            Color::Red,
        );
        let chain = MovePath::from_flat(&[5, 0, 3, 2, 3, 2, 1, 4]).expect("well-formed path");
        assert!(game.play(&chain));
        assert_eq!(game.black_count(), 1);
        assert_eq!(game.piece_at(Coord::new(1, 4)), Some(Cell::RedMan));
        assert_eq!(game.quiet_plies(), 0);
    }

    #[test]
    fn chain_must_continue_from_landing_cell_with_jumps() {
        let pieces = [
            (5, 0, Cell::RedMan),
            (5, 6, Cell::RedMan),
            (4, 1, Cell::BlackMan),
            (0, 7, Cell::BlackMan),
        ];
        let mut game = game_with(&pieces, Color::Red);
        let detached = MovePath::from_flat(&[5, 0, 3, 2, 5, 6, 4, 5]).expect("well-formed path");
        assert!(!game.play(&detached));
        let step_after_jump = MovePath::from_flat(&[5, 0, 3, 2, 3, 2, 2, 1]).expect("well-formed path");
        assert!(!game.play(&step_after_jump));
        assert_eq!(game.red_count(), 2);
        assert_eq!(game.black_count(), 2);
    }

    #[test]
    fn forty_quiet_plies_force_a_draw() {
        let mut game = game_with(&[(7, 0, Cell::RedKing), (0, 7, Cell::BlackKing)], Color::Red);
        let shuffle = [
            (Coord::new(7, 0), Coord::new(6, 1)),
            (Coord::new(0, 7), Coord::new(1, 6)),
            (Coord::new(6, 1), Coord::new(7, 0)),
            (Coord::new(1, 6), Coord::new(0, 7)),
        ];
        for ply in 0..39 {
            let (from, to) = shuffle[ply % 4];
            assert!(game.try_step(from, to), "ply {ply} should be legal");
        }
        assert_eq!(game.quiet_plies(), 39);
        assert_eq!(game.outcome(), Outcome::Ongoing);

        let (from, to) = shuffle[39 % 4];
        assert!(game.try_step(from, to));
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(!game.try_step(Coord::new(7, 0), Coord::new(6, 1)));
    }

    #[test]
    fn generated_moves_can_be_played_directly() {
        let mut game = Game::new(&CheckersConfig::default());
        let first = game.legal_moves()[0].clone();
        assert!(game.play_generated(&first));
        assert_eq!(game.history(), &[first.path]);
        assert_eq!(game.current_turn(), Color::Black);
    }
}
