//! Ataxx board: piece placement, move legality, captures, undo and end of game.
//!
//! The 7x7 playing field is stored inside an 11x11 array whose outer two rings
//! are permanently blocked. Any offset in [-2, 2] x [-2, 2] from a playing-field
//! square is then a valid index, and moving onto the border is refused by the
//! ordinary "destination must be empty" rule, so move generation never checks
//! bounds.
use itertools::iproduct;
use std::fmt;
use thiserror::Error;

use crate::color::PieceColor;
use crate::error::GameError;
use crate::movement::{Move, Square, EXTENDED_SIDE, SIDE};

/// Number of consecutive jumps after which the game ends.
pub const JUMP_LIMIT: u32 = 25;

const GRID_LEN: usize = EXTENDED_SIDE * EXTENDED_SIDE;

/// Callback run after every change of a board.
pub type Notifier = Box<dyn FnMut(&Board)>;

fn silent() -> Notifier {
    Box::new(|_: &Board| {})
}

/// Index of the square `dc` columns and `dr` rows away from `index`.
#[inline]
fn neighbor(index: usize, dc: isize, dr: isize) -> usize {
    (index as isize + dc + dr * EXTENDED_SIDE as isize) as usize
}

/// Errors raised while reading a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// The diagram does not have one line per row.
    #[error("Diagram has {0} rows, expected 7")]
    RowCount(usize),
    /// A row does not have one symbol per column.
    #[error("Diagram row {row} has {len} squares, expected 7")]
    RowLength {
        /// Row digit of the faulty line.
        row: char,
        /// Number of squares found.
        len: usize,
    },
    /// A symbol other than `r`, `b`, `-` or `X`.
    #[error("Invalid square symbol: '{0}'")]
    Symbol(char),
    /// The side to move must be red or blue.
    #[error("Invalid side to move: {0}")]
    SideToMove(PieceColor),
}

/// Is `tokens` the column legend `a b c d e f g`.
fn is_legend(tokens: &[&str]) -> bool {
    tokens.len() == SIDE && tokens.concat() == "abcdefg"
}

/// Color written as the single character `token`.
fn read_symbol(token: &str) -> Result<PieceColor, DiagramError> {
    let mut chars = token.chars();
    let symbol = chars.next().unwrap_or(' ');
    if let Some(extra) = chars.next() {
        return Err(DiagramError::Symbol(extra));
    }
    match symbol {
        'r' => Ok(PieceColor::Red),
        'b' => Ok(PieceColor::Blue),
        '-' => Ok(PieceColor::Empty),
        'X' => Ok(PieceColor::Blocked),
        other => Err(DiagramError::Symbol(other)),
    }
}

/// One entry of the undo stack.
///
/// Every applied move pushes a `Boundary` followed by one `Square` entry per
/// square it changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UndoEntry {
    Boundary {
        jumps: u32,
        winner: Option<PieceColor>,
    },
    Square {
        index: usize,
        prior: PieceColor,
    },
}

/// An Ataxx board.
pub struct Board {
    squares: [PieceColor; GRID_LEN],
    whose_move: PieceColor,
    /// Playing-field squares of each color, indexed by `PieceColor::ordinal`.
    counts: [usize; 4],
    winner: Option<PieceColor>,
    jumps: u32,
    num_moves: usize,
    num_passes: usize,
    all_moves: Vec<Move>,
    undo_stack: Vec<UndoEntry>,
    notifier: Notifier,
}

impl Board {
    /// A board in the initial configuration.
    pub fn new() -> Board {
        let mut board = Board {
            squares: [PieceColor::Blocked; GRID_LEN],
            whose_move: PieceColor::Red,
            counts: [0, 0, 0, SIDE * SIDE],
            winner: None,
            jumps: 0,
            num_moves: 0,
            num_passes: 0,
            all_moves: Vec::new(),
            undo_stack: Vec::new(),
            notifier: silent(),
        };
        board.reset();
        board
    }

    /// A board with the contents and counters of `board`, but no undo history
    /// and a notifier that does nothing.
    pub fn copy_of(board: &Board) -> Board {
        Board {
            squares: board.squares,
            whose_move: board.whose_move,
            counts: board.counts,
            winner: board.winner,
            jumps: board.jumps,
            num_moves: board.num_moves,
            num_passes: board.num_passes,
            all_moves: Vec::new(),
            undo_stack: Vec::new(),
            notifier: silent(),
        }
    }

    /// Board read from a diagram in the format printed by `Display`: seven
    /// lines for rows 7 down to 1, each holding seven of `r`, `b`, `-`, `X`
    /// separated by spaces. Row digits and a column legend, as printed by
    /// the alternate format, are accepted too.
    ///
    /// The board has no history. Its winner is decided by the same rules as
    /// after a move, so a side without pieces has already lost.
    pub fn from_diagram(diagram: &str, to_move: PieceColor) -> Result<Board, DiagramError> {
        if !to_move.is_piece() {
            return Err(DiagramError::SideToMove(to_move));
        }
        let rows: Vec<Vec<&str>> = diagram
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<&str>>())
            .filter(|tokens| !tokens.is_empty() && !is_legend(tokens))
            .collect();
        if rows.len() != SIDE {
            return Err(DiagramError::RowCount(rows.len()));
        }
        let mut board = Board::new();
        for (line, tokens) in rows.iter().enumerate() {
            let row = (SIDE - 1 - line) as u8;
            let digit = (b'1' + row) as char;
            let symbols = match tokens.split_first() {
                Some((first, rest)) if first.chars().eq(std::iter::once(digit)) => rest,
                _ => &tokens[..],
            };
            if symbols.len() != SIDE {
                return Err(DiagramError::RowLength {
                    row: digit,
                    len: symbols.len(),
                });
            }
            for (col, token) in symbols.iter().enumerate() {
                let color = read_symbol(token)?;
                if let Some(square) = Square::new(col as u8, row) {
                    board.put(square.index(), color);
                }
            }
        }
        board.whose_move = to_move;
        board.winner = board.outcome();
        Ok(board)
    }

    /// Clear me to the initial configuration, with no blocks and no history.
    pub fn clear(&mut self) {
        self.reset();
        self.announce();
    }

    fn reset(&mut self) {
        for square in Square::all() {
            self.put(square.index(), PieceColor::Empty);
        }
        for &(name, color) in &[
            ("a7", PieceColor::Red),
            ("g1", PieceColor::Red),
            ("a1", PieceColor::Blue),
            ("g7", PieceColor::Blue),
        ] {
            if let Ok(square) = name.parse::<Square>() {
                self.put(square.index(), color);
            }
        }
        self.whose_move = PieceColor::Red;
        self.winner = None;
        self.jumps = 0;
        self.num_moves = 0;
        self.num_passes = 0;
        self.all_moves.clear();
        self.undo_stack.clear();
    }

    /// Contents of `square`.
    #[inline]
    pub fn get(&self, square: Square) -> PieceColor {
        self.squares[square.index()]
    }

    /// Contents of the square with linearized index `index`. Border squares
    /// and indices past the grid read as blocked.
    #[inline]
    pub fn get_index(&self, index: usize) -> PieceColor {
        self.squares
            .get(index)
            .copied()
            .unwrap_or(PieceColor::Blocked)
    }

    /// Color of the player who moves next.
    pub fn whose_move(&self) -> PieceColor {
        self.whose_move
    }

    /// Number of playing-field squares holding `color`.
    pub fn num_pieces(&self, color: PieceColor) -> usize {
        self.counts[color.ordinal()]
    }

    /// Number of red pieces.
    pub fn red_pieces(&self) -> usize {
        self.num_pieces(PieceColor::Red)
    }

    /// Number of blue pieces.
    pub fn blue_pieces(&self) -> usize {
        self.num_pieces(PieceColor::Blue)
    }

    /// Number of playing-field squares that are not blocked.
    pub fn total_open(&self) -> usize {
        SIDE * SIDE - self.num_pieces(PieceColor::Blocked)
    }

    /// `None` while the game goes on, `Some(Empty)` for a draw, otherwise the
    /// winning color.
    pub fn winner(&self) -> Option<PieceColor> {
        self.winner
    }

    /// Moves and passes made since the last clear.
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Consecutive jumps since the last extend (or the start of the game).
    pub fn num_jumps(&self) -> u32 {
        self.jumps
    }

    /// Passes made since the last clear.
    pub fn num_passes(&self) -> usize {
        self.num_passes
    }

    /// Moves applied since the last clear, oldest first.
    pub fn all_moves(&self) -> &[Move] {
        &self.all_moves
    }

    /// Is `mv` legal for the player to move.
    pub fn legal_move(&self, mv: &Move) -> bool {
        self.legal_move_for(self.whose_move, mv)
    }

    fn legal_move_for(&self, who: PieceColor, mv: &Move) -> bool {
        match *mv {
            Move::Pass => !self.can_move(who),
            Move::Step { from, to } => {
                self.get(from) == who
                    && self.get(to) == PieceColor::Empty
                    && (mv.is_extend() || mv.is_jump())
            }
        }
    }

    /// Non-pass moves available to `who`, whoever's turn it is: sources in
    /// columns `a` to `g` and rows `7` down to `1`, then destinations by
    /// column offset and row offset from -2 to 2.
    fn steps(&self, who: PieceColor) -> impl Iterator<Item = Move> + '_ {
        Square::all()
            .filter(move |&from| self.get(from) == who)
            .flat_map(move |from| {
                iproduct!(-2..=2isize, -2..=2isize).filter_map(move |(dc, dr)| {
                    let to = neighbor(from.index(), dc, dr);
                    if self.squares[to] != PieceColor::Empty {
                        return None;
                    }
                    Square::from_index(to).map(|to| Move::step(from, to))
                })
            })
    }

    /// Can `who` make a non-pass move, ignoring whose turn it is and whether
    /// the game is over.
    pub fn can_move(&self, who: PieceColor) -> bool {
        self.steps(who).next().is_some()
    }

    /// Every non-pass move legal for `who`, in scan order.
    pub fn legal_moves(&self, who: PieceColor) -> Vec<Move> {
        self.steps(who).collect()
    }

    /// Play `mv` for the player to move.
    ///
    /// The board is left untouched if the move is refused.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.legal_move(&mv) {
            return Err(if mv.is_pass() {
                GameError::InvalidPass
            } else {
                GameError::IllegalMove(mv)
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Play the move written `c0r0-c1r1`, or pass on `-`.
    pub fn make_move_str(&mut self, text: &str) -> Result<(), GameError> {
        let mv: Move = text.parse()?;
        self.make_move(mv)
    }

    /// Pass for the player to move, which must have no other move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.make_move(Move::Pass)
    }

    /// Play `mv`, already known to be legal.
    pub(crate) fn apply(&mut self, mv: Move) {
        self.all_moves.push(mv);
        self.undo_stack.push(UndoEntry::Boundary {
            jumps: self.jumps,
            winner: self.winner,
        });
        self.num_moves += 1;
        let me = self.whose_move;
        if let Move::Step { from, to } = mv {
            self.set(to.index(), me);
            if mv.is_jump() {
                self.set(from.index(), PieceColor::Empty);
                self.jumps += 1;
            } else {
                self.jumps = 0;
            }
            self.capture(to, me);
            self.winner = self.outcome();
        } else {
            self.num_passes += 1;
        }
        self.whose_move = me.opposite();
        self.announce();
    }

    /// Turn every opponent piece around `target` to `color`.
    fn capture(&mut self, target: Square, color: PieceColor) {
        let opponent = color.opposite();
        for (dc, dr) in iproduct!(-1..=1isize, -1..=1isize) {
            let index = neighbor(target.index(), dc, dr);
            if self.squares[index] == opponent {
                self.set(index, color);
            }
        }
    }

    /// End of game status after a non-pass move.
    fn outcome(&self) -> Option<PieceColor> {
        let red = self.red_pieces();
        let blue = self.blue_pieces();
        let majority = if red > blue {
            PieceColor::Red
        } else if blue > red {
            PieceColor::Blue
        } else {
            PieceColor::Empty
        };
        if self.jumps >= JUMP_LIMIT || red + blue == self.total_open() {
            Some(majority)
        } else if !self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue) {
            Some(majority)
        } else if red == 0 {
            Some(PieceColor::Blue)
        } else if blue == 0 {
            Some(PieceColor::Red)
        } else {
            None
        }
    }

    /// Undo the last move.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let last = self.all_moves.pop().ok_or(GameError::NotUndoable)?;
        while let Some(entry) = self.undo_stack.pop() {
            match entry {
                UndoEntry::Square { index, prior } => self.put(index, prior),
                UndoEntry::Boundary { jumps, winner } => {
                    self.jumps = jumps;
                    self.winner = winner;
                    break;
                }
            }
        }
        if last.is_pass() {
            self.num_passes -= 1;
        }
        self.num_moves -= 1;
        self.whose_move = self.whose_move.opposite();
        self.announce();
        Ok(())
    }

    /// Set the square at `index` to `color`, recording the change for undo.
    fn set(&mut self, index: usize, color: PieceColor) {
        self.undo_stack.push(UndoEntry::Square {
            index,
            prior: self.squares[index],
        });
        self.put(index, color);
    }

    /// Set the playing-field square at `index` to `color` without recording it.
    fn put(&mut self, index: usize, color: PieceColor) {
        self.counts[self.squares[index].ordinal()] -= 1;
        self.squares[index] = color;
        self.counts[color.ordinal()] += 1;
    }

    /// `square` and its reflections across the middle row and column.
    fn reflections(square: Square) -> [Square; 4] {
        [
            square,
            square.mirror_row(),
            square.mirror_col(),
            square.mirror_row().mirror_col(),
        ]
    }

    /// Can a block go on `square`: no move made yet and the square and its
    /// reflections all empty.
    pub fn legal_block(&self, square: Square) -> bool {
        self.num_moves == 0
            && Board::reflections(square)
                .iter()
                .all(|&target| self.get(target) == PieceColor::Empty)
    }

    /// Block `square` and its reflections across the middle row and column.
    pub fn set_block(&mut self, square: Square) -> Result<(), GameError> {
        if !self.legal_block(square) {
            return Err(GameError::IllegalPlacement(square));
        }
        for target in Board::reflections(square).iter() {
            self.put(target.index(), PieceColor::Blocked);
        }
        if !self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue) {
            self.winner = Some(PieceColor::Empty);
        }
        self.announce();
        Ok(())
    }

    /// Block the square written `cr`, for instance `c3`.
    pub fn set_block_str(&mut self, text: &str) -> Result<(), GameError> {
        let square: Square = text.parse()?;
        self.set_block(square)
    }

    /// Have `notify` called after every change of this board.
    pub fn set_notifier<F: FnMut(&Board) + 'static>(&mut self, notify: F) {
        self.notifier = Box::new(notify);
    }

    fn announce(&mut self) {
        let mut notify = std::mem::replace(&mut self.notifier, silent());
        notify(self);
        self.notifier = notify;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards are equal when their squares, counters, side to move and winner
/// agree. History and notifier are not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.squares[..] == other.squares[..]
            && self.counts == other.counts
            && self.whose_move == other.whose_move
            && self.num_moves == other.num_moves
            && self.jumps == other.jumps
            && self.winner == other.winner
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Board")
            .field("whose_move", &self.whose_move)
            .field("winner", &self.winner)
            .field("red", &self.red_pieces())
            .field("blue", &self.blue_pieces())
            .field("jumps", &self.jumps)
            .field("num_moves", &self.num_moves)
            .field("squares", &format_args!("\n{}", self))
            .finish()
    }
}

/// Rows 7 down to 1. The alternate form (`{:#}`) adds row digits and a
/// column legend.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let legend = f.alternate();
        for row in (0..SIDE as u8).rev() {
            if legend {
                write!(f, "{}", (b'1' + row) as char)?;
            }
            write!(f, " ")?;
            for col in 0..SIDE as u8 {
                if let Some(square) = Square::new(col, row) {
                    write!(f, " {}", self.get(square).symbol())?;
                }
            }
            writeln!(f)?;
        }
        if legend {
            write!(f, "   a b c d e f g")?;
        }
        Ok(())
    }
}
