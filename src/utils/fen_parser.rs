//! FEN-to-Board parser.
//!
//! Layout format: seven rows from the top (rank 7) down to rank 1, each
//! terminated by `/`; `x` Black, `o` White, `-` gap, digits `1..=7` for runs of
//! empty cells. Then the side to move and the two counters.

use log::debug;

use crate::errors::{AtaxxError, AtaxxResult};
use crate::game_state::ataxx_rules::BOARD_SIZE;
use crate::game_state::ataxx_types::*;
use crate::game_state::game_state::Board;

pub fn parse_fen(fen: &str) -> AtaxxResult<Board> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, turn_part, counter_part, ply_part] = parts.as_slice() else {
        debug!("rejecting FEN with {} fields: {fen:?}", parts.len());
        return Err(AtaxxError::FieldCount { found: parts.len() });
    };

    let mut board = Board::new();

    parse_board(board_part, &mut board)?;
    board.turn = parse_turn(turn_part)?;
    board.reversible_move_counter = parse_counter(counter_part, "reversible move counter")?;
    board.ply = parse_counter(ply_part, "ply")?;

    debug!("parsed FEN {fen:?}");
    Ok(board)
}

fn parse_board(board_part: &str, board: &mut Board) -> AtaxxResult<()> {
    let separators = board_part.matches('/').count();
    let rows: Vec<&str> = board_part.split('/').collect();

    // Seven terminated rows split into eight pieces, the last one empty.
    if separators != BOARD_SIZE || rows.last().is_some_and(|tail| !tail.is_empty()) {
        return Err(AtaxxError::RowCount { found: separators });
    }

    for (fen_row_idx, row_str) in rows[..BOARD_SIZE].iter().enumerate() {
        let row = BOARD_SIZE - 1 - fen_row_idx;
        let mut col = 0usize;

        for ch in row_str.chars() {
            let (cell, run) = match ch {
                '1'..='7' => (Cell::Empty, ch as usize - '0' as usize),
                '-' => (Cell::Gap, 1),
                _ => match Player::from_fen_char(ch) {
                    // Only the canonical lowercase stone letters are layout characters.
                    Some(player) if player.fen_char() == ch => (player.stone(), 1),
                    _ => return Err(AtaxxError::InvalidLayoutChar(ch)),
                },
            };

            if col + run > BOARD_SIZE {
                return Err(AtaxxError::RowWidth { row, found: col + run });
            }
            for x in col..col + run {
                board.cells[row * BOARD_SIZE + x] = cell;
            }
            col += run;
        }

        if col != BOARD_SIZE {
            return Err(AtaxxError::RowWidth { row, found: col });
        }
    }

    Ok(())
}

fn parse_turn(turn_part: &str) -> AtaxxResult<Player> {
    let mut chars = turn_part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            Player::from_fen_char(ch).ok_or_else(|| AtaxxError::InvalidTurn(turn_part.to_owned()))
        }
        _ => Err(AtaxxError::InvalidTurn(turn_part.to_owned())),
    }
}

fn parse_counter(part: &str, field: &'static str) -> AtaxxResult<u32> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AtaxxError::InvalidCounter { field, value: part.to_owned() });
    }
    part.parse::<u32>()
        .map_err(|_| AtaxxError::InvalidCounter { field, value: part.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::AtaxxError;
    use crate::game_state::ataxx_rules::{EMPTY_BOARD_FEN, STARTING_POSITION_FEN};
    use crate::game_state::ataxx_types::{Cell, Player, Square};
    use crate::utils::render_game_state::render_game_state;

    fn cell_at(board: &crate::game_state::game_state::Board, index: u8) -> Cell {
        board.cell(Square::new(index).expect("test square is on the board"))
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&board));

        assert_eq!(board.turn(), Player::Black);
        assert_eq!(cell_at(&board, 42), Cell::OwnedBy(Player::Black));
        assert_eq!(cell_at(&board, 48), Cell::OwnedBy(Player::White));
        assert_eq!(cell_at(&board, 0), Cell::OwnedBy(Player::White));
        assert_eq!(cell_at(&board, 6), Cell::OwnedBy(Player::Black));
        assert_eq!(board.ply(), 0);
        assert_eq!(board.reversible_move_counter(), 0);
    }

    #[test]
    fn parse_gaps_counters_and_turn_aliases() {
        let board = parse_fen("7/7/2-1-2/7/2-1-2/7/x6/ W 12 37").expect("FEN should parse");
        assert_eq!(board.turn(), Player::White);
        assert_eq!(board.reversible_move_counter(), 12);
        assert_eq!(board.ply(), 37);
        assert_eq!(board.count(Cell::Gap), 4);
        assert_eq!(cell_at(&board, 16), Cell::Gap);
        assert_eq!(cell_at(&board, 32), Cell::Gap);

        for (turn, expected) in [("x", Player::Black), ("B", Player::Black), ("o", Player::White), ("w", Player::White)] {
            let fen = format!("7/7/7/7/7/7/7/ {turn} 0 0");
            assert_eq!(parse_fen(&fen).expect("turn alias should parse").turn(), expected);
        }
        assert!(parse_fen(EMPTY_BOARD_FEN).is_ok());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(parse_fen("7/7/7/7/7/7/7/ x 0"), Err(AtaxxError::FieldCount { found: 3 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/7/ x 0 0 9"), Err(AtaxxError::FieldCount { found: 5 }));
        assert_eq!(parse_fen(""), Err(AtaxxError::FieldCount { found: 0 }));
    }

    #[test]
    fn rejects_wrong_row_count() {
        assert_eq!(parse_fen("7/7/7/7/7/7/ x 0 0"), Err(AtaxxError::RowCount { found: 6 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/7 x 0 0"), Err(AtaxxError::RowCount { found: 6 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/7/7/ x 0 0"), Err(AtaxxError::RowCount { found: 8 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/7/7 x 0 0"), Err(AtaxxError::RowCount { found: 7 }));
    }

    #[test]
    fn rejects_wrong_row_width() {
        assert_eq!(parse_fen("6/7/7/7/7/7/7/ x 0 0"), Err(AtaxxError::RowWidth { row: 6, found: 6 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/x7/ x 0 0"), Err(AtaxxError::RowWidth { row: 0, found: 8 }));
        assert_eq!(parse_fen("7/7/7/7/7/7/44/ x 0 0"), Err(AtaxxError::RowWidth { row: 0, found: 8 }));
        assert_eq!(parse_fen("7/7/7/x-/7/7/7/ x 0 0"), Err(AtaxxError::RowWidth { row: 3, found: 2 }));
        assert_eq!(parse_fen("x5/7/7/7/7/7/7/ x 0 0"), Err(AtaxxError::RowWidth { row: 6, found: 6 }));
    }

    #[test]
    fn rejects_bad_characters_and_counters() {
        assert_eq!(parse_fen("7/7/7/7/7/7/x5q/ x 0 0"), Err(AtaxxError::InvalidLayoutChar('q')));
        assert_eq!(parse_fen("7/7/7/7/7/7/X6/ x 0 0"), Err(AtaxxError::InvalidLayoutChar('X')));
        assert_eq!(parse_fen("7/7/7/7/7/7/08/ x 0 0"), Err(AtaxxError::InvalidLayoutChar('0')));
        assert_eq!(
            parse_fen("7/7/7/7/7/7/7/ z 0 0"),
            Err(AtaxxError::InvalidTurn("z".to_owned()))
        );
        assert_eq!(
            parse_fen("7/7/7/7/7/7/7/ xo 0 0"),
            Err(AtaxxError::InvalidTurn("xo".to_owned()))
        );
        assert_eq!(
            parse_fen("7/7/7/7/7/7/7/ x -1 0"),
            Err(AtaxxError::InvalidCounter { field: "reversible move counter", value: "-1".to_owned() })
        );
        assert_eq!(
            parse_fen("7/7/7/7/7/7/7/ x 0 ten"),
            Err(AtaxxError::InvalidCounter { field: "ply", value: "ten".to_owned() })
        );
    }
}
