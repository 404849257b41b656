use log::trace;

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_rules::SINGLE_MARGIN;
use crate::game_state::ataxx_types::*;
use crate::game_state::game_state::Board;

impl Board {
    /// Apply a move the caller has already validated with [`Board::is_legal`].
    ///
    /// The destination receives a friendly stone and every hostile stone
    /// adjacent to it flips (one ring, no chaining). A `Double` vacates its
    /// origin and bumps the reversible-move counter; a `Single` resets it.
    /// `Null` passes: no cell changes and the counter resets to 0. The turn
    /// flips and the ply advances for every variant.
    ///
    /// Passing an illegal `Single`/`Double` is a contract violation and
    /// trips a debug assertion. Use [`Board::make_checked`] for untrusted input.
    pub fn make(&mut self, mv: Move) {
        debug_assert!(
            mv == Move::Null || self.is_legal(mv),
            "make called with illegal move {mv} on {}",
            self.get_fen()
        );

        let friendly = self.turn.stone();
        let hostile = self.turn.opposite().stone();

        let next_counter = match mv {
            Move::Null => 0,
            Move::Single { to } => {
                self.place_and_capture(to, friendly, hostile);
                0
            }
            Move::Double { from, to } => {
                self.cells[from.index()] = Cell::Empty;
                self.place_and_capture(to, friendly, hostile);
                self.reversible_move_counter.saturating_add(1)
            }
        };

        self.reversible_move_counter = next_counter;
        self.turn = self.turn.opposite();
        self.ply = self.ply.saturating_add(1);
    }

    /// [`Board::make`] for unvalidated input. The board is untouched when
    /// the move is illegal.
    pub fn make_checked(&mut self, mv: Move) -> AtaxxResult<()> {
        if !self.is_legal(mv) {
            return Err(AtaxxError::IllegalMove(mv));
        }
        self.make(mv);
        Ok(())
    }

    fn place_and_capture(&mut self, to: Square, friendly: Cell, hostile: Cell) {
        self.cells[to.index()] = friendly;

        let captured = self.surrounding_stones(to, hostile, SINGLE_MARGIN);
        for square in &captured {
            self.cells[square.index()] = friendly;
        }

        trace!("{friendly:?} to {to} captured {} stone(s)", captured.len());
    }
}
