//! Seeded random playout harness for local testing.
//!
//! This module plays a game the way an outside caller would: it proposes
//! candidate moves from the neighbourhood queries, keeps the ones the board
//! accepts via `is_legal`, and applies a random pick with `make`. The rules
//! core itself never enumerates moves.

use log::debug;
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::errors::AtaxxResult;
use crate::game_state::ataxx_rules::{SINGLE_MARGIN, STARTING_POSITION_FEN};
use crate::game_state::ataxx_types::*;
use crate::game_state::game_state::Board;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u32,
    pub seed: u64,
    pub start_fen: String,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 0,
            start_fen: STARTING_POSITION_FEN.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Both sides passed in succession.
    BothPassed,
    /// No empty cell remains.
    BoardFull,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub final_board: Board,
    pub moves: Vec<Move>,
    /// Board snapshot before every move, then the final board.
    pub positions: Vec<Board>,
    pub stop_reason: StopReason,
}

impl PlayoutResult {
    pub fn report(&self) -> String {
        let board = &self.final_board;
        format!(
            "plies={} black={} white={} stop={:?} fen={}",
            self.moves.len(),
            board.count(Player::Black.stone()),
            board.count(Player::White.stone()),
            self.stop_reason,
            board.get_fen()
        )
    }
}

/// Every legal move for the side to move, found the way a UI would: singles
/// around friendly stones, jumps from `reachable_squares` of each stone.
pub fn candidate_moves(board: &Board) -> Vec<Move> {
    let friendly = board.turn().stone();
    let mut moves = Vec::new();

    for from in Square::all().filter(|&sq| board.cell(sq) == friendly) {
        for to in board.reachable_squares(from) {
            let mv = if from.chebyshev_distance(to) <= SINGLE_MARGIN {
                Move::Single { to }
            } else {
                Move::Double { from, to }
            };
            if board.is_legal(mv) && !moves.contains(&mv) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Play one seeded random game from `config.start_fen`.
pub fn play_random_game(config: &PlayoutConfig) -> AtaxxResult<PlayoutResult> {
    let mut board = Board::from_fen(&config.start_fen)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut moves = Vec::new();
    let mut positions = vec![board.clone()];
    let mut consecutive_passes = 0u8;

    let stop_reason = loop {
        if board.count(Cell::Empty) == 0 {
            break StopReason::BoardFull;
        }
        if moves.len() as u32 >= config.max_plies {
            break StopReason::MaxPlies;
        }
        if consecutive_passes >= 2 {
            break StopReason::BothPassed;
        }

        let mv = if board.is_legal(Move::Null) {
            Move::Null
        } else {
            let candidates = candidate_moves(&board);
            match candidates.choose(&mut rng) {
                Some(&mv) => mv,
                // is_legal(Null) guarantees a candidate exists.
                None => Move::Null,
            }
        };

        consecutive_passes = if mv == Move::Null { consecutive_passes + 1 } else { 0 };
        board.make(mv);
        moves.push(mv);
        positions.push(board.clone());
    };

    debug!("playout seed={} ended after {} plies: {stop_reason:?}", config.seed, moves.len());

    Ok(PlayoutResult {
        final_board: board,
        moves,
        positions,
        stop_reason,
    })
}
