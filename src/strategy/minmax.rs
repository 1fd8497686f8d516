//! Implementation of the min max algorithm.
use std::fmt;

use super::{candidate_moves, play, static_score, Sense, Strategy};
use crate::board::Board;
use crate::movement::Move;

/// Exact score of `board` searching every move to `depth` plies, and the
/// first move reaching it.
pub(super) fn min_max_rec(board: &Board, depth: u32, sense: Sense) -> (i32, Option<Move>) {
    if depth == 0 || board.winner().is_some() {
        return (static_score(board, depth), None);
    }

    candidate_moves(board)
        .into_iter()
        .fold((sense.worst(), None), |(best, best_move), mov| {
            let (score, _) = min_max_rec(&play(board, mov), depth - 1, sense.flip());
            if sense.improves(score, best) {
                (score, Some(mov))
            } else {
                (best, best_move)
            }
        })
}

/// Min-Max algorithm with a given recursion depth.
///
/// Visits the whole tree; it serves as the reference the pruned search must
/// agree with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax(pub u32);

impl MinMax {
    /// Score of `board` and the move reaching it.
    pub fn evaluate(&self, board: &Board) -> (i32, Option<Move>) {
        min_max_rec(board, self.0, Sense::of(board.whose_move()))
    }
}

impl Strategy for MinMax {
    fn compute_next_move(&mut self, board: &Board) -> Option<Move> {
        if board.winner().is_some() {
            return None;
        }
        if !board.can_move(board.whose_move()) {
            return Some(Move::Pass);
        }
        self.evaluate(board).1
    }
}

impl fmt::Display for MinMax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Min - Max (max level: {})", self.0)
    }
}
