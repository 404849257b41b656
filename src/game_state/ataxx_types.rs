//! Primitive value types shared by the rules engine.
//!
//! Squares are validated indices into the 7x7 grid, cells are a closed set of
//! contents, and moves are the three shapes a turn can take.

use std::fmt;

use crate::game_state::ataxx_rules::{BOARD_SIZE, NUM_SQUARES};

/// Side to move / stone owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The cell content of a stone owned by this player.
    #[inline]
    pub const fn stone(self) -> Cell {
        Cell::OwnedBy(self)
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Player::Black => 'x',
            Player::White => 'o',
        }
    }

    /// Accepts `x`/`X`/`b`/`B` for Black and `o`/`O`/`w`/`W` for White.
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        match ch {
            'x' | 'X' | 'b' | 'B' => Some(Player::Black),
            'o' | 'O' | 'w' | 'W' => Some(Player::White),
            _ => None,
        }
    }
}

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanently unplayable. Only board setup creates gaps.
    Gap,
    OwnedBy(Player),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::OwnedBy(player) => Some(player),
            Cell::Empty | Cell::Gap => None,
        }
    }

    /// Layout character for non-empty cells. Empty cells are run-length coded
    /// by the FEN generator and have no character of their own.
    #[inline]
    pub const fn fen_char(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Gap => Some('-'),
            Cell::OwnedBy(player) => Some(player.fen_char()),
        }
    }
}

/// Board square index in `0..49`, row-major with `a1 == 0` and `g7 == 48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// King-move distance between two squares.
    #[inline]
    pub fn chebyshev_distance(self, other: Square) -> usize {
        self.row().abs_diff(other.row()).max(self.col().abs_diff(other.col()))
    }

    /// Iterator over every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col() as u8);
        let rank = char::from(b'1' + self.row() as u8);
        write!(f, "{file}{rank}")
    }
}

/// A proposed turn. Moves are transient inputs; nothing retains them after
/// they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Pass. Only legal when the mover can neither place nor jump.
    Null,
    /// Place a new stone next to a friendly stone.
    Single { to: Square },
    /// Relocate a stone from `from` to `to`, vacating `from`.
    Double { from: Square, to: Square },
}

impl Move {
    /// Destination square, if the move has one.
    #[inline]
    pub const fn to(self) -> Option<Square> {
        match self {
            Move::Null => None,
            Move::Single { to } | Move::Double { to, .. } => Some(to),
        }
    }
}
