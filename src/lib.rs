//! Crate root module declarations for the Plum Ataxx rules engine.
//!
//! This file exposes the board state, the legality and move-application
//! rules, FEN serialization and the coordinate/notation helpers so binaries,
//! tests and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod ataxx_rules;
    pub mod ataxx_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod playout_harness;
    pub mod render_game_state;
}

pub use errors::{AtaxxError, AtaxxResult};
pub use game_state::ataxx_types::{Cell, Move, Player, Square};
pub use game_state::game_state::Board;
