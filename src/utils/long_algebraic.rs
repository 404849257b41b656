//! Text notation for moves.
//!
//! `0000` is a pass, a lone coordinate (`b2`) is a single placement and two
//! coordinates (`a1c3`) are a jump from the first square to the second.
//! Parsing is syntactic only; legality is decided by the board.

use std::fmt;

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_types::Move;
use crate::utils::algebraic::coordinate_to_square;

pub const NULL_MOVE_TEXT: &str = "0000";

pub fn parse_move(text: &str) -> AtaxxResult<Move> {
    let invalid = || AtaxxError::InvalidMoveNotation(text.to_owned());

    if text == NULL_MOVE_TEXT {
        return Ok(Move::Null);
    }
    if !text.is_ascii() {
        return Err(invalid());
    }

    match text.len() {
        2 => Ok(Move::Single {
            to: coordinate_to_square(text).map_err(|_| invalid())?,
        }),
        4 => Ok(Move::Double {
            from: coordinate_to_square(&text[0..2]).map_err(|_| invalid())?,
            to: coordinate_to_square(&text[2..4]).map_err(|_| invalid())?,
        }),
        _ => Err(invalid()),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Null => f.write_str(NULL_MOVE_TEXT),
            Move::Single { to } => write!(f, "{to}"),
            Move::Double { from, to } => write!(f, "{from}{to}"),
        }
    }
}
