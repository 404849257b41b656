//! Legality checks for a single proposed move.

use crate::game_state::ataxx_rules::{JUMP_MARGIN, SINGLE_MARGIN};
use crate::game_state::ataxx_types::*;
use crate::game_state::game_state::Board;

impl Board {
    /// Whether `mv` may be played by the side to move.
    ///
    /// - `Null` is legal only when no empty cell has a friendly stone within
    ///   jump range, i.e. the mover can neither place nor jump anywhere.
    /// - `Single` needs an empty destination with a friendly stone adjacent.
    /// - `Double` needs an empty destination and a friendly stone on `from`.
    ///   The distance between `from` and `to` is not checked here; callers
    ///   that need it pick destinations from [`Board::reachable_squares`].
    ///
    /// Square indices are valid by construction of [`Square`], so the range
    /// part of each check always holds.
    pub fn is_legal(&self, mv: Move) -> bool {
        let friendly = self.turn.stone();

        match mv {
            Move::Null => !self.has_any_move_for(friendly),
            Move::Single { to } => {
                self.cell(to).is_empty()
                    && !self.surrounding_stones(to, friendly, SINGLE_MARGIN).is_empty()
            }
            Move::Double { from, to } => self.cell(to).is_empty() && self.cell(from) == friendly,
        }
    }

    fn has_any_move_for(&self, friendly: Cell) -> bool {
        Square::all().any(|square| {
            self.cell(square).is_empty()
                && !self.surrounding_stones(square, friendly, JUMP_MARGIN).is_empty()
        })
    }
}
