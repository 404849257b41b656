//! Core board state representation.
//!
//! `Board` owns the 49 cells, the side to move, the ply counter and the
//! reversible-move counter. It is mutated in place by `make` and answers the
//! neighbourhood queries callers use to highlight destinations.

use std::fmt;

use crate::errors::AtaxxResult;
use crate::game_state::ataxx_rules::{BOARD_SIZE, JUMP_MARGIN, NUM_SQUARES};
use crate::game_state::ataxx_types::*;
use crate::utils::algebraic::coordinate_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Cell; NUM_SQUARES],
    pub(crate) turn: Player,
    pub(crate) ply: u32,
    pub(crate) reversible_move_counter: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
            turn: Player::Black,
            ply: 0,
            reversible_move_counter: 0,
        }
    }
}

impl Board {
    /// Empty board with Black to move; equivalent to
    /// [`EMPTY_BOARD_FEN`](crate::game_state::ataxx_rules::EMPTY_BOARD_FEN).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Four-corner starting setup, see
    /// [`STARTING_POSITION_FEN`](crate::game_state::ataxx_rules::STARTING_POSITION_FEN).
    pub fn new_game() -> Self {
        let mut board = Self::new();
        for (row, col, player) in [
            (6, 0, Player::Black),
            (0, 6, Player::Black),
            (6, 6, Player::White),
            (0, 0, Player::White),
        ] {
            if let Some(square) = Square::from_row_col(row, col) {
                board.cells[square.index()] = player.stone();
            }
        }
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> AtaxxResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Alias of [`Board::get_fen`] matching the snapshot wire-format naming.
    #[inline]
    pub fn serialize(&self) -> String {
        generate_fen(self)
    }

    /// Alias of [`Board::from_fen`].
    #[inline]
    pub fn deserialize(text: &str) -> AtaxxResult<Self> {
        parse_fen(text)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; NUM_SQUARES] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Setup-time cell assignment. Moves never create or remove gaps; this is
    /// the only way besides FEN to place them.
    #[inline]
    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn reversible_move_counter(&self) -> u32 {
        self.reversible_move_counter
    }

    /// Number of cells holding exactly `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Every square within `margin` (king-move distance) of `square` whose
    /// content equals `kind`, clipped to the grid.
    ///
    /// Squares come back in row-major order: window rows from bottom to top,
    /// left to right within a row. `square` itself is included when its own
    /// content matches.
    pub fn surrounding_stones(&self, square: Square, kind: Cell, margin: usize) -> Vec<Square> {
        let row = square.row();
        let col = square.col();
        let last = BOARD_SIZE - 1;

        let mut out = Vec::with_capacity((2 * margin + 1).pow(2));
        for y in row.saturating_sub(margin)..=(row + margin).min(last) {
            for x in col.saturating_sub(margin)..=(col + margin).min(last) {
                let idx = y * BOARD_SIZE + x;
                if self.cells[idx] == kind {
                    if let Some(sq) = Square::from_row_col(y, x) {
                        out.push(sq);
                    }
                }
            }
        }
        out
    }

    /// Empty squares within jump range of `square`.
    #[inline]
    pub fn reachable_squares(&self, square: Square) -> Vec<Square> {
        self.surrounding_stones(square, Cell::Empty, JUMP_MARGIN)
    }

    /// [`Board::reachable_squares`] for a coordinate such as `"c3"`.
    pub fn reachable_squares_from(&self, coordinate: &str) -> AtaxxResult<Vec<Square>> {
        Ok(self.reachable_squares(coordinate_to_square(coordinate)?))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
