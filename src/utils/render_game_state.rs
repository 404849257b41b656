//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests and diagnostics
//! in text environments. Rank 7 is printed first.

use crate::game_state::ataxx_rules::BOARD_SIZE;
use crate::game_state::ataxx_types::*;
use crate::game_state::game_state::Board;

const FILES_HEADER: &str = "  a b c d e f g";

pub fn render_game_state(board: &Board) -> String {
    let mut out = String::new();

    out.push_str(FILES_HEADER);
    out.push('\n');

    for row in (0..BOARD_SIZE).rev() {
        let rank = char::from(b'1' + row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            out.push(cell_to_char(board.cells[row * BOARD_SIZE + col]));
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILES_HEADER);
    out.push('\n');
    out.push_str(&format!(
        "turn: {} ply: {} reversible: {}",
        board.turn.fen_char(),
        board.ply,
        board.reversible_move_counter
    ));

    out
}

fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '·',
        Cell::Gap => '#',
        Cell::OwnedBy(Player::Black) => '●',
        Cell::OwnedBy(Player::White) => '○',
    }
}
