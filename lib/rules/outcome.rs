use crate::chess::{Board, Color, Move, Square, Status};
use crate::rules::{is_check, is_valid_move, InvariantViolation};
use arrayvec::ArrayVec;
use tracing::instrument;

/// The legal destinations of a single piece.
///
/// A queen in the middle of an empty board has the most, 27 of them.
pub type Destinations = ArrayVec<Square, 27>;

/// Every square the piece on `whence` may legally move to.
///
/// This is empty if `whence` does not hold a piece of the side to move.
pub fn legal_destinations(
    board: &Board,
    whence: Square,
    side: Color,
) -> Result<Destinations, InvariantViolation> {
    let mut destinations = Destinations::new();

    for whither in Square::iter() {
        if is_valid_move(board, whence, whither, side)? {
            destinations.push(whither);
        }
    }

    Ok(destinations)
}

/// Every legal [`Move`] of the side to move.
pub fn legal_moves(board: &Board, side: Color) -> Result<Vec<Move>, InvariantViolation> {
    let mut moves = Vec::new();

    for whence in board.by_color(side) {
        for whither in legal_destinations(board, whence, side)? {
            moves.push(Move::new(whence, whither));
        }
    }

    Ok(moves)
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(board: &Board, side: Color) -> Result<bool, InvariantViolation> {
    for whence in board.by_color(side) {
        for whither in Square::iter() {
            if is_valid_move(board, whence, whither, side)? {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Whether the side to move is in check and has no legal move.
pub fn is_checkmate(board: &Board, side: Color) -> Result<bool, InvariantViolation> {
    Ok(is_check(board, side)? && !has_legal_move(board, side)?)
}

/// Whether the side to move is not in check but has no legal move.
pub fn is_stalemate(board: &Board, side: Color) -> Result<bool, InvariantViolation> {
    Ok(!is_check(board, side)? && !has_legal_move(board, side)?)
}

/// Classifies the board from the point of view of the side to move.
#[instrument(level = "debug", ret, err)]
pub fn status(board: &Board, side: Color) -> Result<Status, InvariantViolation> {
    let status = match (is_check(board, side)?, has_legal_move(board, side)?) {
        (false, true) => Status::Ongoing,
        (true, true) => Status::Check(side),
        (true, false) => Status::Checkmate(side),
        (false, false) => Status::Stalemate,
    };

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{make_move, reachable};
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn initial_board_has_twenty_legal_moves() {
        let b = Board::initial();
        assert_eq!(legal_moves(&b, Color::White).map(|m| m.len()), Ok(20));
        assert_eq!(legal_moves(&b, Color::Black).map(|m| m.len()), Ok(20));
        assert_eq!(status(&b, Color::White), Ok(Status::Ongoing));
    }

    #[test]
    fn legal_destinations_of_the_initial_knight() {
        let b = Board::initial();
        let destinations = legal_destinations(&b, sq("g1"), Color::White).unwrap();
        assert_eq!(destinations.as_slice(), [sq("f3"), sq("h3")]);
    }

    #[test]
    fn queen_in_the_middle_of_an_empty_board_fills_the_destinations() {
        let b: Board = "k7/8/8/8/3Q4/8/8/7K".parse().unwrap();
        let destinations = legal_destinations(&b, sq("d4"), Color::White).unwrap();
        assert_eq!(destinations.len(), 27);
    }

    #[proptest]
    fn legal_destinations_agree_with_valid_moves(
        #[strategy(reachable())] pos: (Board, Color),
        whence: Square,
    ) {
        let (b, c) = pos;
        let destinations = legal_destinations(&b, whence, c)?;
        for whither in Square::iter() {
            assert_eq!(
                destinations.contains(&whither),
                is_valid_move(&b, whence, whither, c)?
            );
        }
    }

    #[proptest]
    fn legal_destinations_are_empty_for_the_opponent(
        #[strategy(reachable())] pos: (Board, Color),
        #[filter(#pos.0.color_on(#whence) != Some(#pos.1))] whence: Square,
    ) {
        let (b, c) = pos;
        assert!(legal_destinations(&b, whence, c)?.is_empty());
    }

    #[proptest]
    fn legal_moves_start_on_pieces_of_the_side_to_move(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        for m in legal_moves(&b, c)? {
            assert_eq!(b.color_on(m.whence()), Some(c));
            assert_eq!(is_check(&make_move(&b, m.whence(), m.whither()).0, c), Ok(false));
        }
    }

    #[proptest]
    fn has_legal_move_agrees_with_legal_moves(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        assert_eq!(has_legal_move(&b, c)?, !legal_moves(&b, c)?.is_empty());
    }

    #[proptest]
    fn checkmate_is_check_without_legal_moves(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        assert_eq!(
            is_checkmate(&b, c)?,
            is_check(&b, c)? && !has_legal_move(&b, c)?
        );
    }

    #[proptest]
    fn stalemate_is_no_check_without_legal_moves(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        assert_eq!(
            is_stalemate(&b, c)?,
            !is_check(&b, c)? && !has_legal_move(&b, c)?
        );
    }

    #[proptest]
    fn checkmate_and_stalemate_are_mutually_exclusive(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        assert!(!(is_checkmate(&b, c)? && is_stalemate(&b, c)?));
    }

    #[proptest]
    fn status_agrees_with_the_individual_queries(#[strategy(reachable())] pos: (Board, Color)) {
        let (b, c) = pos;
        let expected = if is_checkmate(&b, c)? {
            Status::Checkmate(c)
        } else if is_stalemate(&b, c)? {
            Status::Stalemate
        } else if is_check(&b, c)? {
            Status::Check(c)
        } else {
            Status::Ongoing
        };

        assert_eq!(status(&b, c), Ok(expected));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let b: Board = "R5k1/5ppp/8/8/8/8/8/6K1".parse().unwrap();
        assert_eq!(is_checkmate(&b, Color::Black), Ok(true));
        assert_eq!(status(&b, Color::Black), Ok(Status::Checkmate(Color::Black)));
    }

    #[test]
    fn check_with_an_escape_is_not_checkmate() {
        let b: Board = "R5k1/5pp1/7p/8/8/8/8/6K1".parse().unwrap();
        assert_eq!(is_check(&b, Color::Black), Ok(true));
        assert_eq!(is_checkmate(&b, Color::Black), Ok(false));
        assert_eq!(status(&b, Color::Black), Ok(Status::Check(Color::Black)));
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let b: Board = "7k/5Q2/8/8/8/8/8/7K".parse().unwrap();
        assert_eq!(is_check(&b, Color::Black), Ok(false));
        assert_eq!(is_stalemate(&b, Color::Black), Ok(true));
        assert_eq!(status(&b, Color::Black), Ok(Status::Stalemate));
        assert_eq!(status(&b, Color::White), Ok(Status::Ongoing));
    }

    #[test]
    fn classifying_a_malformed_board_fails() {
        let b: Board = "8/8/8/8/8/8/8/7K".parse().unwrap();
        let error = InvariantViolation::MissingKing(Color::Black);
        assert_eq!(status(&b, Color::Black), Err(error));
        assert_eq!(is_checkmate(&b, Color::Black), Err(error));
        assert_eq!(is_stalemate(&b, Color::Black), Err(error));
    }
}
