//! Alpha-beta minimax, optionally with killer-move ordering.
//!
//! Fail-soft: a node may return a value outside the window it was given, and
//! the memo records whether a stored score is exact or only a bound. With
//! killers enabled, children whose path caused a cutoff earlier at the same
//! ply are searched first; the rest keep generation order.

use crate::game_state::checkers_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::GeneratedMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::killer_moves::KillerMoves;
use crate::search::memo_table::{Bound, MemoEntry, MemoTable};
use crate::search::search_types::{
    terminal_score, SearchAlgorithm, SearchConfig, SearchResult, SearchStats,
};

struct AlphaBetaContext<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    maximizing_for: Color,
    memo: MemoTable,
    killers: Option<KillerMoves>,
    nodes: u64,
    cutoffs: u64,
}

pub fn alpha_beta_search<S: BoardScorer + ?Sized>(
    position: &Position,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let killers = (config.algorithm == SearchAlgorithm::KillerAlphaBeta)
        .then(|| KillerMoves::new(usize::from(config.max_depth), config.killer_slots));
    let mut ctx = AlphaBetaContext {
        scorer,
        maximizing_for: position.side_to_move(),
        memo: MemoTable::new(),
        killers,
        nodes: 1,
        cutoffs: 0,
    };

    if position.is_terminal() || config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: leaf_score(&ctx, position, 0),
            stats: SearchStats {
                nodes: 1,
                ..SearchStats::default()
            },
        };
    }

    let mut alpha = i32::MIN;
    let mut best_move = None;
    let mut best_score = i32::MIN;
    for mv in ordered_children(&ctx, position, 0) {
        let score = alpha_beta(
            &mut ctx,
            &mv.position_after,
            config.max_depth - 1,
            1,
            alpha,
            i32::MAX,
        );
        if score > best_score {
            best_score = score;
            best_move = Some(mv.path);
        }
        alpha = alpha.max(score);
    }

    SearchResult {
        best_move,
        best_score,
        stats: SearchStats {
            nodes: ctx.nodes,
            memo_hits: ctx.memo.stats().hits,
            cutoffs: ctx.cutoffs,
        },
    }
}

fn leaf_score<S: BoardScorer + ?Sized>(
    ctx: &AlphaBetaContext<'_, S>,
    position: &Position,
    ply: u8,
) -> i32 {
    if position.is_terminal() {
        terminal_score(position, ctx.maximizing_for, ply)
    } else {
        ctx.scorer.score(position, ctx.maximizing_for)
    }
}

fn ordered_children<S: BoardScorer + ?Sized>(
    ctx: &AlphaBetaContext<'_, S>,
    position: &Position,
    ply: u8,
) -> Vec<GeneratedMove> {
    let mut children = generate_legal_moves(position);
    if let Some(killers) = &ctx.killers {
        let ply = usize::from(ply);
        // Stable: killers move to the front, everything else keeps its order.
        children.sort_by_key(|mv| !killers.is_killer(ply, &mv.path));
    }
    children
}

fn alpha_beta<S: BoardScorer + ?Sized>(
    ctx: &mut AlphaBetaContext<'_, S>,
    position: &Position,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || position.is_terminal() {
        return leaf_score(ctx, position, ply);
    }
    if let Some(entry) = ctx.memo.probe(position, depth) {
        match entry.bound {
            Bound::Exact => return entry.score,
            Bound::Lower if entry.score >= beta => return entry.score,
            Bound::Upper if entry.score <= alpha => return entry.score,
            _ => {}
        }
    }

    let (alpha_in, beta_in) = (alpha, beta);
    let maximizing = position.side_to_move() == ctx.maximizing_for;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in ordered_children(ctx, position, ply) {
        let score = alpha_beta(ctx, &mv.position_after, depth - 1, ply + 1, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            ctx.cutoffs += 1;
            if let Some(killers) = ctx.killers.as_mut() {
                killers.record(usize::from(ply), &mv.path);
            }
            break;
        }
    }

    let bound = if best <= alpha_in {
        Bound::Upper
    } else if best >= beta_in {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.memo.store(position, depth, MemoEntry { score: best, bound });
    best
}
