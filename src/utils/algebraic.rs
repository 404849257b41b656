//! Square conversions for algebraic coordinates.
//!
//! Files `a..g` map to columns 0..6 and ranks `1..7` to rows 0..6, so
//! `a1 == 0`, `g1 == 6` and `g7 == 48`.

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_types::Square;

/// Convert an algebraic coordinate (for example: "c3") to a square.
#[inline]
pub fn coordinate_to_square(coordinate: &str) -> AtaxxResult<Square> {
    let &[file, rank] = coordinate.as_bytes() else {
        return Err(AtaxxError::InvalidCoordinate(coordinate.to_owned()));
    };

    if !(b'a'..=b'g').contains(&file) || !(b'1'..=b'7').contains(&rank) {
        return Err(AtaxxError::InvalidCoordinate(coordinate.to_owned()));
    }

    Square::from_row_col(usize::from(rank - b'1'), usize::from(file - b'a'))
        .ok_or_else(|| AtaxxError::InvalidCoordinate(coordinate.to_owned()))
}

/// Convert a raw square index (`0..=48`) to an algebraic coordinate.
#[inline]
pub fn square_to_coordinate(index: u8) -> AtaxxResult<String> {
    Square::new(index)
        .map(|square| square.to_string())
        .ok_or(AtaxxError::SquareOutOfRange(index))
}
