//! Alpha - Beta algorithm.
use std::fmt;

use super::{candidate_moves, play, static_score, Sense, Strategy, INFTY};
use crate::board::Board;
use crate::config::AiConfig;
use crate::movement::Move;

/// Best score reachable from `board` searching `depth` plies, and the move
/// reaching it. `sense` is the role of the side to move.
///
/// Scores are fail-soft: a value at or below `alpha` (at or above `beta`)
/// only bounds the true score, but anything strictly inside the window is
/// exact. Each child is searched on its own copy of the board.
pub(super) fn alpha_beta_rec(
    board: &Board,
    depth: u32,
    sense: Sense,
    alpha: i32,
    beta: i32,
) -> (i32, Option<Move>) {
    if depth == 0 || board.winner().is_some() {
        return (static_score(board, depth), None);
    }

    let moves = candidate_moves(board);
    let (_, _, best, best_move) = moves
        .into_iter()
        .try_fold(
            (alpha, beta, sense.worst(), None),
            |(alpha, beta, best, best_move), mov| {
                let (score, _) =
                    alpha_beta_rec(&play(board, mov), depth - 1, sense.flip(), alpha, beta);
                if !sense.improves(score, best) {
                    return Ok((alpha, beta, best, best_move));
                }
                let (alpha, beta) = match sense {
                    Sense::Maximizing => (alpha.max(score), beta),
                    Sense::Minimizing => (alpha, beta.min(score)),
                };
                if alpha >= beta {
                    Err((alpha, beta, score, Some(mov)))
                } else {
                    Ok((alpha, beta, score, Some(mov)))
                }
            },
        )
        .unwrap_or_else(|cut| cut);
    (best, best_move)
}

/// Alpha - Beta algorithm searching a fixed number of plies.
///
/// The search is deterministic: moves are tried in board scan order and ties
/// keep the first move found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBeta {
    depth: u32,
    seed: u64,
}

impl AlphaBeta {
    /// Search `depth` plies (at least one).
    pub fn new(depth: u32) -> AlphaBeta {
        AlphaBeta {
            depth: depth.max(1),
            seed: 0,
        }
    }

    /// Player set up from `config`.
    pub fn from_config(config: &AiConfig) -> AlphaBeta {
        AlphaBeta {
            seed: config.seed,
            ..AlphaBeta::new(config.depth)
        }
    }

    /// Plies searched.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Seed this player was given. It has no influence on the moves chosen.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Score of `board` and the move reaching it, searched to full depth.
    pub fn evaluate(&self, board: &Board) -> (i32, Option<Move>) {
        alpha_beta_rec(
            board,
            self.depth,
            Sense::of(board.whose_move()),
            -INFTY,
            INFTY,
        )
    }

    /// Move for the side to move on `board`: a pass without searching when it
    /// has no move, `None` once the game is over.
    pub fn find_move(&self, board: &Board) -> Option<Move> {
        if board.winner().is_some() {
            return None;
        }
        if !board.can_move(board.whose_move()) {
            return Some(Move::Pass);
        }
        self.evaluate(board).1
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        AlphaBeta::from_config(&AiConfig::default())
    }
}

impl fmt::Display for AlphaBeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Alpha - Beta (max level: {})", self.depth)
    }
}

impl Strategy for AlphaBeta {
    fn compute_next_move(&mut self, board: &Board) -> Option<Move> {
        self.find_move(board)
    }
}
