//! Contents of a board square.
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// What can sit on a square: a piece of either side, nothing, or a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    /// The first player, moves first.
    Red,
    /// The second player.
    Blue,
    /// A free square.
    Empty,
    /// A square nobody can ever move onto (blocks and the border).
    Blocked,
}

impl PieceColor {
    /// All colors, in count-table order.
    pub const ALL: [PieceColor; 4] = [
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Empty,
        PieceColor::Blocked,
    ];

    /// The other player. Empty and blocked squares are their own opposite.
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Blue,
            PieceColor::Blue => PieceColor::Red,
            other => other,
        }
    }

    /// Is this one of the two player colors.
    pub fn is_piece(self) -> bool {
        matches!(self, PieceColor::Red | PieceColor::Blue)
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }

    /// Single character used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            PieceColor::Red => 'r',
            PieceColor::Blue => 'b',
            PieceColor::Empty => '-',
            PieceColor::Blocked => 'X',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Empty => "empty",
            PieceColor::Blocked => "blocked",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(PieceColor::Red.opposite(), PieceColor::Blue);
        assert_eq!(PieceColor::Blue.opposite(), PieceColor::Red);
        assert_eq!(PieceColor::Empty.opposite(), PieceColor::Empty);
        assert_eq!(PieceColor::Blocked.opposite(), PieceColor::Blocked);
    }

    #[test]
    fn test_ordinals_are_distinct() {
        let ordinals: Vec<usize> = PieceColor::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PieceColor::Blocked).unwrap();
        assert_eq!(json, "\"Blocked\"");
        let back: PieceColor = serde_json::from_str("\"Red\"").unwrap();
        assert_eq!(back, PieceColor::Red);
    }
}
