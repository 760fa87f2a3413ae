//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `Game`, with an
//! optional seeded random opening so a series does not replay one game.

use std::time::Instant;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::CheckersConfig;
use crate::engines::engine_trait::Engine;
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::game_state::game::Game;
use crate::game_state::position::Position;
use crate::move_generation::move_path::MovePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWins,
    BlackWins,
    /// The quiet-ply counter reached the draw limit.
    DrawMoveLimit,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::RedWins => Some(Color::Red),
            MatchOutcome::BlackWins => Some(Color::Black),
            MatchOutcome::DrawMoveLimit | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMoveLimit,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub game: CheckersConfig,
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: CheckersConfig::default(),
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: Game,
    pub opening_moves: Vec<MovePath>,
    pub red_move_count: u32,
    pub black_move_count: u32,
    pub red_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    /// Every move of the game in play order, opening included.
    pub fn played_moves(&self) -> &[MovePath] {
        self.final_game.history()
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms()
        )
    }
}

/// Play one seeded match from the standard start, `red` moving first.
pub fn play_engine_match(
    red: &mut dyn Engine,
    black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    config.game.validate()?;
    let mut game = Game::new(&config.game);
    let opening_moves = apply_seeded_random_opening(
        &mut game,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );
    play_out(game, red, black, opening_moves, config.max_plies)
}

/// Play one match from a caller-provided position, without a random opening.
pub fn play_engine_match_from_position(
    red: &mut dyn Engine,
    black: &mut dyn Engine,
    start: Position,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    let game = Game::from_position(start, config.game.draw_move_limit);
    play_out(game, red, black, Vec::new(), config.max_plies)
}

fn play_out(
    mut game: Game,
    red: &mut dyn Engine,
    black: &mut dyn Engine,
    opening_moves: Vec<MovePath>,
    max_plies: u16,
) -> CheckersResult<MatchResult> {
    red.new_game();
    black.new_game();

    let mut red_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut red_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut plies = 0u16;
    while !game.is_over() && plies < max_plies {
        let mover = game.current_turn();
        let engine: &mut dyn Engine = match mover {
            Color::Red => &mut *red,
            Color::Black => &mut *black,
        };

        let started = Instant::now();
        let out = engine.choose_move(game.position());
        let elapsed_ns = started.elapsed().as_nanos();
        for line in &out.info_lines {
            debug!("{}: {line}", engine.name());
        }

        match mover {
            Color::Red => {
                red_move_count = red_move_count.saturating_add(1);
                red_total_time_ns = red_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = match out.best_move {
            Some(path) => game
                .legal_moves()
                .iter()
                .find(|mv| mv.path == path)
                .cloned()
                .ok_or_else(|| CheckersError::IllegalMove {
                    engine: engine.name().to_owned(),
                    path: path.to_flat(),
                })?,
            // An engine that declines to move in a live position gets the
            // first generated move.
            None => match game.legal_moves().first() {
                Some(first) => first.clone(),
                None => break,
            },
        };
        game.play_generated(&chosen);
        plies += 1;
    }

    let outcome = match game.outcome() {
        Outcome::RedWins => MatchOutcome::RedWins,
        Outcome::BlackWins => MatchOutcome::BlackWins,
        Outcome::Draw => MatchOutcome::DrawMoveLimit,
        Outcome::Ongoing => MatchOutcome::DrawMaxPlies,
    };
    info!(
        "match finished after {} plies: {outcome:?}",
        game.history().len()
    );

    Ok(MatchResult {
        outcome,
        final_game: game,
        opening_moves,
        red_move_count,
        black_move_count,
        red_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Colours are assigned per game from a generator seeded by `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for game_index in 0..config.games {
        let player1_is_red = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(game_index));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        info!(
            "game {}/{} seed={seed} red={} black={}",
            game_index + 1,
            config.games,
            if player1_is_red { "player1" } else { "player2" },
            if player1_is_red { "player2" } else { "player1" },
        );

        let result = if player1_is_red {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_red {
            (
                result.red_move_count,
                result.red_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.red_move_count,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome.winner() {
            Some(color) => {
                let player = if (color == Color::Red) == player1_is_red {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawMoveLimit {
                    SeriesOutcome::DrawMoveLimit
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);
    }

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / f64::from(moves) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    game: &mut Game,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<MovePath> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    let mut opening = Vec::new();
    for _ in 0..target_plies {
        let legal_moves = game.legal_moves();
        if game.is_over() || legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())].clone();
        opening.push(chosen.path.clone());
        game.play_generated(&chosen);
    }
    opening
}
