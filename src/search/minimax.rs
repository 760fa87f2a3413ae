//! Plain depth-bounded minimax with a per-call memo table.
//!
//! Leaves and the horizon are scored from the root mover's point of view: the
//! root side maximises, the opponent minimises.

use crate::game_state::checkers_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::BoardScorer;
use crate::search::memo_table::{Bound, MemoEntry, MemoTable};
use crate::search::search_types::{terminal_score, SearchConfig, SearchResult, SearchStats};

struct MinimaxContext<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    maximizing_for: Color,
    memo: MemoTable,
    nodes: u64,
}

pub fn minimax_search<S: BoardScorer + ?Sized>(
    position: &Position,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut ctx = MinimaxContext {
        scorer,
        maximizing_for: position.side_to_move(),
        memo: MemoTable::new(),
        nodes: 1,
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

    let mut best_move = None;
    let mut best_score = i32::MIN;
    for mv in generate_legal_moves(position) {
        let score = minimax(&mut ctx, &mv.position_after, config.max_depth - 1, 1);
        if score > best_score {
            best_score = score;
            best_move = Some(mv.path);
        }
    }

    SearchResult {
        best_move,
        best_score,
        stats: SearchStats {
            nodes: ctx.nodes,
            memo_hits: ctx.memo.stats().hits,
            cutoffs: 0,
        },
    }
}

fn leaf_score<S: BoardScorer + ?Sized>(ctx: &MinimaxContext<'_, S>, position: &Position, ply: u8) -> i32 {
    if position.is_terminal() {
        terminal_score(position, ctx.maximizing_for, ply)
    } else {
        ctx.scorer.score(position, ctx.maximizing_for)
    }
}

fn minimax<S: BoardScorer + ?Sized>(
    ctx: &mut MinimaxContext<'_, S>,
    position: &Position,
    depth: u8,
    ply: u8,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || position.is_terminal() {
        return leaf_score(ctx, position, ply);
    }
    if let Some(entry) = ctx.memo.probe(position, depth) {
        return entry.score;
    }

    let maximizing = position.side_to_move() == ctx.maximizing_for;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in generate_legal_moves(position) {
        let score = minimax(ctx, &mv.position_after, depth - 1, ply + 1);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    ctx.memo.store(
        position,
        depth,
        MemoEntry {
            score: best,
            bound: Bound::Exact,
        },
    );
    best
}
