//! Failures reported by board mutations.
use thiserror::Error;

use crate::movement::{Move, ParseMoveError, Square};

/// Every way a mutation of the board can be refused.
///
/// A refused mutation leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("Illegal move: {0}")]
    IllegalMove(Move),
    /// A pass was attempted while a legal move exists.
    #[error("Cannot pass, a move is possible")]
    InvalidPass,
    /// A block cannot go on this square (or the game already started).
    #[error("Illegal block placement: {0}")]
    IllegalPlacement(Square),
    /// There is no move left to undo.
    #[error("Not undoable")]
    NotUndoable,
    /// Textual move or square could not be read.
    #[error(transparent)]
    Notation(#[from] ParseMoveError),
}
