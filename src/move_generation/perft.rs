use std::thread;

use crate::game_state::position::Position;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_jumps: usize,
    pub promotions: usize,
    pub terminal: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_jumps += rhs.multi_jumps;
        self.promotions += rhs.promotions;
        self.terminal += rhs.terminal;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    perft_single_thread(generator, position, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// Splits the root moves across scoped worker threads, one per move.
pub fn perft_multi_threaded<G: MoveGenerator + Sync>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return perft_single_thread(generator, position, depth);
    }

    let root_moves = generator.generate_legal_moves(position);
    let mut total = PerftCounts::default();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generator, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.captures > 1 {
            counts.multi_jumps += 1;
        }
        if mv.promoted {
            counts.promotions += 1;
        }
        if mv.position_after.is_terminal() {
            counts.terminal += 1;
        }
        return;
    }

    for child in generator.generate_legal_moves(&mv.position_after) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Color;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&LegalMoveGenerator, &Position::new_game(8), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_shallow_counts() {
        let start = Position::new_game(8);
        assert_eq!(perft(&LegalMoveGenerator, &start, 1).nodes, 7);

        let depth_two = perft(&LegalMoveGenerator, &start, 2);
        assert_eq!(depth_two.nodes, 49);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.promotions, 0);
    }

    #[test]
    fn small_board_reaches_first_capture_at_depth_three() {
        // 4x4 line: (3,2)-(2,3), (0,1)-(1,2), then (2,3)x(0,1) crowns.
        let start = Position::new_game(4);
        assert_eq!(start.side_to_move(), Color::Red);
        assert_eq!(perft(&LegalMoveGenerator, &start, 2).captures, 0);

        let counts = perft(&LegalMoveGenerator, &start, 3);
        assert!(counts.captures > 0);
        assert!(counts.promotions > 0);
    }

    #[test]
    fn multi_threaded_matches_single_thread() {
        let start = Position::new_game(8);
        let single = perft_single_thread(&LegalMoveGenerator, &start, 4);
        let multi = perft_multi_threaded(&LegalMoveGenerator, &start, 4);
        assert_eq!(single, multi);
    }
}
