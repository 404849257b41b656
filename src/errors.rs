//! Errors used throughout the rules engine.
//!
//! `AtaxxError` is the single error type of the crate. Parsing variants are
//! recoverable input errors meant to be shown to whoever supplied the text.
//! `IllegalMove` is only produced by the checked move-application wrapper.

use thiserror::Error;

use crate::game_state::ataxx_types::Move;

pub type AtaxxResult<T> = Result<T, AtaxxError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtaxxError {
    /// The FEN did not split into exactly four whitespace-separated fields.
    #[error("FEN must have 4 fields (layout, turn, reversible counter, ply), found {found}")]
    FieldCount { found: usize },

    /// The layout did not contain exactly seven `/`-terminated rows.
    #[error("board layout must contain 7 rows each terminated by '/', found {found} separators")]
    RowCount { found: usize },

    /// A layout row decoded to the wrong number of cells.
    ///
    /// `row` is the board row (0 is rank 1).
    #[error("board row {row} decodes to {found} cells, expected 7")]
    RowWidth { row: usize, found: usize },

    #[error("invalid board layout character '{0}'")]
    InvalidLayoutChar(char),

    #[error("invalid side-to-move field '{0}'")]
    InvalidTurn(String),

    #[error("invalid {field} field '{value}'")]
    InvalidCounter { field: &'static str, value: String },

    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    #[error("square index {0} is off the board")]
    SquareOutOfRange(u8),

    #[error("invalid move notation '{0}'")]
    InvalidMoveNotation(String),

    #[error("illegal move {0}")]
    IllegalMove(Move),
}
