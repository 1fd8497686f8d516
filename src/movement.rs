//! Squares and moves, with their textual notation.
//!
//! Columns are lettered `a` to `g` and rows numbered `1` to `7`. A move is
//! written `c0r0-c1r1` (for instance `a7-a6`) and a pass is written `-`.
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of squares on a side of the playing field.
pub const SIDE: usize = 7;

/// Side of the backing grid: the playing field plus a 2-deep blocked border.
pub const EXTENDED_SIDE: usize = SIDE + 4;

/// Errors raised while reading squares or moves from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// The text does not have the length of a square (2) or a move (5).
    #[error("Invalid length: {0}, expected 2 for a square or 1 or 5 for a move")]
    InvalidLength(usize),
    /// A column outside `a`-`g`.
    #[error("Invalid column: '{0}', expected 'a'-'g'")]
    InvalidColumn(char),
    /// A row outside `1`-`7`.
    #[error("Invalid row: '{0}', expected '1'-'7'")]
    InvalidRow(char),
    /// The two squares of a move are not separated by `-`.
    #[error("Invalid separator: '{0}', expected '-'")]
    InvalidSeparator(char),
}

/// A square of the 7x7 playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Square at column `col` (0 is `a`) and row `row` (0 is `1`), if on the field.
    pub fn new(col: u8, row: u8) -> Option<Square> {
        if (col as usize) < SIDE && (row as usize) < SIDE {
            Some(Square { col, row })
        } else {
            None
        }
    }

    /// Square named by a column letter and a row digit.
    pub fn from_chars(col: char, row: char) -> Result<Square, ParseMoveError> {
        if !('a'..='g').contains(&col) {
            return Err(ParseMoveError::InvalidColumn(col));
        }
        if !('1'..='7').contains(&row) {
            return Err(ParseMoveError::InvalidRow(row));
        }
        Ok(Square {
            col: col as u8 - b'a',
            row: row as u8 - b'1',
        })
    }

    /// Column, 0-based from `a`.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row, 0-based from `1`.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column letter.
    pub fn col_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Row digit.
    pub fn row_char(self) -> char {
        (b'1' + self.row) as char
    }

    /// Linearized index into the bordered backing grid.
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize + 2) * EXTENDED_SIDE + self.col as usize + 2
    }

    /// The playing-field square stored at `index`, or `None` for border
    /// squares and out-of-range indices.
    pub fn from_index(index: usize) -> Option<Square> {
        let col = (index % EXTENDED_SIDE).checked_sub(2)?;
        let row = (index / EXTENDED_SIDE).checked_sub(2)?;
        Square::new(col as u8, row as u8)
    }

    /// Reflection across the middle column.
    pub fn mirror_col(self) -> Square {
        Square {
            col: SIDE as u8 - 1 - self.col,
            row: self.row,
        }
    }

    /// Reflection across the middle row.
    pub fn mirror_row(self) -> Square {
        Square {
            col: self.col,
            row: SIDE as u8 - 1 - self.row,
        }
    }

    /// Chebyshev distance to `other`.
    pub fn distance(self, other: Square) -> u8 {
        let dc = (self.col as i8 - other.col as i8).abs();
        let dr = (self.row as i8 - other.row as i8).abs();
        dc.max(dr) as u8
    }

    /// Every square of the field, columns `a` to `g`, rows `7` down to `1`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIDE as u8).flat_map(|col| (0..SIDE as u8).rev().map(move |row| Square { col, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

impl FromStr for Square {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(ParseMoveError::InvalidLength(chars.len()));
        }
        Square::from_chars(chars[0], chars[1])
    }
}

/// A move: either a pass or a piece moving between two squares.
///
/// Steps of any geometry can be built; only those at distance 1 (extends)
/// or 2 (jumps) can ever be legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The side to move passes its turn.
    Pass,
    /// A piece at `from` moves (or copies itself) to `to`.
    Step {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
}

impl Move {
    /// Move from `from` to `to`.
    pub fn step(from: Square, to: Square) -> Move {
        Move::Step { from, to }
    }

    /// Is this a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Chebyshev distance covered, `None` for a pass.
    pub fn distance(&self) -> Option<u8> {
        match *self {
            Move::Pass => None,
            Move::Step { from, to } => Some(from.distance(to)),
        }
    }

    /// Is this a move to an adjacent square (the source piece stays).
    pub fn is_extend(&self) -> bool {
        self.distance() == Some(1)
    }

    /// Is this a move two squares away (the source piece leaves).
    pub fn is_jump(&self) -> bool {
        self.distance() == Some(2)
    }

    /// Source square, `None` for a pass.
    pub fn from(&self) -> Option<Square> {
        match *self {
            Move::Pass => None,
            Move::Step { from, .. } => Some(from),
        }
    }

    /// Destination square, `None` for a pass.
    pub fn to(&self) -> Option<Square> {
        match *self {
            Move::Pass => None,
            Move::Step { to, .. } => Some(to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Pass => write!(f, "-"),
            Move::Step { from, to } => write!(f, "{}-{}", from, to),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Move::Pass);
        }
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(ParseMoveError::InvalidLength(chars.len()));
        }
        if chars[2] != '-' {
            return Err(ParseMoveError::InvalidSeparator(chars[2]));
        }
        let from = Square::from_chars(chars[0], chars[1])?;
        let to = Square::from_chars(chars[3], chars[4])?;
        Ok(Move::step(from, to))
    }
}
