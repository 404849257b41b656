use plum_ataxx::game_state::ataxx_rules::{JUMP_MARGIN, SINGLE_MARGIN};
use plum_ataxx::utils::playout_harness::{play_random_game, PlayoutConfig};
use plum_ataxx::{Board, Cell, Move, Player, Square};

const GAPPED_START: &str = "x2-2o/7/2-1-2/-5-/2-1-2/7/o2-2x/ x 0 0";

fn playouts() -> Vec<(u64, &'static str)> {
    let mut out = Vec::new();
    for seed in 0..12 {
        out.push((seed, plum_ataxx::game_state::ataxx_rules::STARTING_POSITION_FEN));
        out.push((seed, GAPPED_START));
    }
    out
}

#[test]
fn every_visited_board_round_trips_through_fen() {
    for (seed, fen) in playouts() {
        let config = PlayoutConfig { seed, start_fen: fen.to_owned(), ..PlayoutConfig::default() };
        let result = play_random_game(&config).expect("playout should run");

        for board in &result.positions {
            let text = board.serialize();
            let reparsed = Board::deserialize(&text).expect("serialized board should parse");
            assert_eq!(&reparsed, board, "round trip failed for seed {seed}: {text}");
        }
    }
}

#[test]
fn gaps_never_change_during_play() {
    for (seed, fen) in playouts() {
        let config = PlayoutConfig { seed, start_fen: fen.to_owned(), ..PlayoutConfig::default() };
        let result = play_random_game(&config).expect("playout should run");

        let start = &result.positions[0];
        let gaps: Vec<Square> = Square::all().filter(|&sq| start.cell(sq) == Cell::Gap).collect();
        for board in &result.positions {
            let now: Vec<Square> = Square::all().filter(|&sq| board.cell(sq) == Cell::Gap).collect();
            assert_eq!(now, gaps, "gap layout changed for seed {seed}");
        }
    }
}

#[test]
fn each_move_obeys_counter_and_capture_rules() {
    for (seed, fen) in playouts() {
        let config = PlayoutConfig { seed, start_fen: fen.to_owned(), ..PlayoutConfig::default() };
        let result = play_random_game(&config).expect("playout should run");

        for (i, &mv) in result.moves.iter().enumerate() {
            let before = &result.positions[i];
            let after = &result.positions[i + 1];
            let mover = before.turn();
            let friendly = mover.stone();
            let hostile = mover.opposite().stone();

            assert!(before.is_legal(mv), "harness played illegal {mv} for seed {seed}");
            assert_eq!(after.turn(), mover.opposite());
            assert_eq!(after.ply(), before.ply() + 1);

            match mv {
                Move::Null => {
                    assert_eq!(after.cells(), before.cells());
                    assert_eq!(after.reversible_move_counter(), 0);
                }
                Move::Single { to } | Move::Double { to, .. } => {
                    assert_eq!(after.cell(to), friendly);
                    for sq in before.surrounding_stones(to, hostile, SINGLE_MARGIN) {
                        assert_eq!(after.cell(sq), friendly, "{sq} not captured by {mv}");
                    }
                    // Nothing beyond the capture ring changes hands.
                    for sq in Square::all() {
                        if sq.chebyshev_distance(to) > SINGLE_MARGIN && Some(sq) != from_of(mv) {
                            assert_eq!(after.cell(sq), before.cell(sq));
                        }
                    }
                }
            }

            match mv {
                Move::Single { .. } => assert_eq!(after.reversible_move_counter(), 0),
                Move::Double { from, to } => {
                    assert_eq!(after.cell(from), Cell::Empty);
                    assert!(from.chebyshev_distance(to) <= JUMP_MARGIN);
                    assert_eq!(after.reversible_move_counter(), before.reversible_move_counter() + 1);
                }
                Move::Null => {}
            }
        }
    }
}

#[test]
fn null_legal_iff_no_empty_cell_within_two_of_a_friendly_stone() {
    for (seed, fen) in playouts().into_iter().take(6) {
        let config = PlayoutConfig { seed, start_fen: fen.to_owned(), ..PlayoutConfig::default() };
        let result = play_random_game(&config).expect("playout should run");

        for board in &result.positions {
            let friendly = board.turn().stone();
            let stuck = Square::all()
                .filter(|&sq| board.cell(sq) == Cell::Empty)
                .all(|empty| {
                    Square::all()
                        .filter(|&sq| board.cell(sq) == friendly)
                        .all(|stone| stone.chebyshev_distance(empty) > JUMP_MARGIN)
                });
            assert_eq!(board.is_legal(Move::Null), stuck);
        }
    }
}

#[test]
fn concrete_single_scenario() {
    let mut board = Board::deserialize("7/7/7/7/7/7/x6/ x 0 0").expect("FEN should parse");
    let to = Square::new(1).expect("b1");
    assert!(board.is_legal(Move::Single { to }));

    board.make(Move::Single { to });

    assert_eq!(board.cell(to), Cell::OwnedBy(Player::Black));
    assert_eq!(board.reversible_move_counter(), 0);
    assert_eq!(board.ply(), 1);
    assert_eq!(board.turn(), Player::White);
}

fn from_of(mv: Move) -> Option<Square> {
    match mv {
        Move::Double { from, .. } => Some(from),
        Move::Null | Move::Single { .. } => None,
    }
}
