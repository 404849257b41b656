use crate::game_state::ataxx_rules::BOARD_SIZE;
use crate::game_state::game_state::Board;

pub fn generate_fen(board: &Board) -> String {
    format!(
        "{} {} {} {}",
        generate_board_field(board),
        board.turn.fen_char(),
        board.reversible_move_counter,
        board.ply
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..BOARD_SIZE).rev() {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            match board.cells[row * BOARD_SIZE + col].fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        // Every row is terminated, including the last.
        out.push('/');
    }

    out
}
