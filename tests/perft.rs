use lib::chess::{Board, Color};
use lib::rules::{legal_moves, make_move, InvariantViolation};
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(board: &Board, turn: Color, depth: u8) -> Result<usize, InvariantViolation> {
    match depth {
        0 => Ok(1),
        1 => Ok(legal_moves(board, turn)?.len()),
        d => legal_moves(board, turn)?
            .into_par_iter()
            .map(|m| {
                let (next, _) = make_move(board, m.whence(), m.whither());
                perft(&next, !turn, d - 1)
            })
            .sum(),
    }
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    let board = Board::initial();
    assert_eq!(perft(&board, Color::White, 1)?, 20);
    assert_eq!(perft(&board, Color::White, 2)?, 400);
    assert_eq!(perft(&board, Color::White, 3)?, 8902);
    assert_eq!(perft(&board, Color::White, 4)?, 197281);

    // https://www.chessprogramming.org/Perft_Results#Position_3
    let board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8".parse()?;
    assert_eq!(perft(&board, Color::White, 1)?, 14);
    assert_eq!(perft(&board, Color::White, 2)?, 191);
}
