//! Automated players.
//!
//! Red maximizes and blue minimizes. Won positions score from red's point of
//! view, unfinished leaves from the point of view of the side to move there.
use std::fmt;

use crate::board::Board;
use crate::color::PieceColor;
use crate::movement::Move;

mod alphabeta;
mod minmax;

pub use self::alphabeta::AlphaBeta;
pub use self::minmax::MinMax;

/// Magnitude of a won position, before the bonus for winning early.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// Larger than any score.
pub const INFTY: i32 = i32::MAX;

/// Largest bonus a win can get for the plies left to search.
const MAX_DEPTH_BONUS: u32 = 19;

/// Something able to pick a move.
pub trait Strategy: fmt::Display {
    /// The move to play from `board` for the side to move: `Some(Move::Pass)`
    /// when it has no move, `None` when the game is already over.
    fn compute_next_move(&mut self, board: &Board) -> Option<Move>;
}

/// Role of the side to move at a node of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Looks for the highest score (red).
    Maximizing,
    /// Looks for the lowest score (blue).
    Minimizing,
}

impl Sense {
    /// Role of `color` when it is to move.
    pub fn of(color: PieceColor) -> Sense {
        if color == PieceColor::Red {
            Sense::Maximizing
        } else {
            Sense::Minimizing
        }
    }

    /// Role of the opponent.
    pub fn flip(self) -> Sense {
        match self {
            Sense::Maximizing => Sense::Minimizing,
            Sense::Minimizing => Sense::Maximizing,
        }
    }

    /// Score worse than anything this side can reach.
    fn worst(self) -> i32 {
        match self {
            Sense::Maximizing => -INFTY,
            Sense::Minimizing => INFTY,
        }
    }

    /// Does this side prefer `score` over `best`.
    fn improves(self, score: i32, best: i32) -> bool {
        match self {
            Sense::Maximizing => score > best,
            Sense::Minimizing => score < best,
        }
    }
}

/// Static value of `board` with `depth` plies left unsearched.
///
/// Wins are worth `WINNING_VALUE + depth` so sooner wins score higher.
/// Unfinished positions are worth the material advantage of the side to move.
pub fn static_score(board: &Board, depth: u32) -> i32 {
    let winning_value = WINNING_VALUE + depth.min(MAX_DEPTH_BONUS) as i32;
    let me = board.whose_move();
    match board.winner() {
        Some(PieceColor::Red) => winning_value,
        Some(PieceColor::Blue) => -winning_value,
        Some(_) => 0,
        None => board.num_pieces(me) as i32 - board.num_pieces(me.opposite()) as i32,
    }
}

/// Moves searched from `board`: every legal move of the side to move in scan
/// order, or a pass when there is none.
fn candidate_moves(board: &Board) -> Vec<Move> {
    let moves = board.legal_moves(board.whose_move());
    if moves.is_empty() {
        vec![Move::Pass]
    } else {
        moves
    }
}

/// A fresh board holding the position after `mov`.
fn play(board: &Board, mov: Move) -> Board {
    let mut next = Board::copy_of(board);
    next.apply(mov);
    next
}
