//! Layered backward induction over the enumerated position universe.
//!
//! For one winning colour `W`, layer 0 holds every position already won by
//! `W`. Layer `k + 1` is grown from layer `k` through predecessors:
//!
//! - a predecessor with `W` to move is won at once, since `W` can choose the
//!   move into layer `k`;
//! - a predecessor with the opponent to move is won only once every one of its
//!   legal moves leads into the won set. `hits` counts how often it has been
//!   reached as a predecessor, `move_totals` holds its true move count, and
//!   equality proves no escape exists.
//!
//! Breadth-first order makes the recorded layer the forcing distance in plies:
//! the shortest for `W` to move, the longest for the defender.

use std::collections::HashMap;

use log::{debug, info};

use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;

use crate::tablebase::retrograde::predecessors;

/// Positions won by one colour with their forcing distance in plies.
pub type WinDistances = HashMap<Position, u16>;

pub fn solve_wins_for(universe: &[Position], winner: Color, piece_limit: u8) -> WinDistances {
    let mut won: WinDistances = HashMap::new();
    let mut frontier: Vec<Position> = universe
        .iter()
        .filter(|position| position.outcome().winner() == Some(winner))
        .cloned()
        .collect();
    for seed in &frontier {
        won.insert(seed.clone(), 0);
    }
    info!("{winner}: {} terminal wins seeded", frontier.len());

    let mut hits: HashMap<Position, usize> = HashMap::new();
    let mut move_totals: HashMap<Position, usize> = HashMap::new();
    let mut distance: u16 = 0;

    while !frontier.is_empty() {
        distance += 1;
        let mut next = Vec::new();

        for position in &frontier {
            for prior in predecessors(position, piece_limit) {
                if won.contains_key(&prior) {
                    continue;
                }
                if prior.side_to_move() == winner {
                    won.insert(prior.clone(), distance);
                    next.push(prior);
                    continue;
                }

                let total = *move_totals
                    .entry(prior.clone())
                    .or_insert_with(|| prior.successors().len());
                let seen = hits.entry(prior.clone()).or_insert(0);
                *seen += 1;
                if *seen == total {
                    hits.remove(&prior);
                    move_totals.remove(&prior);
                    won.insert(prior.clone(), distance);
                    next.push(prior);
                }
            }
        }

        debug!(
            "{winner}: layer {distance} adds {} positions ({} defenders pending)",
            next.len(),
            hits.len()
        );
        frontier = next;
    }

    info!(
        "{winner}: {} forced wins, longest at {} plies",
        won.len(),
        won.values().copied().max().unwrap_or(0)
    );
    won
}
