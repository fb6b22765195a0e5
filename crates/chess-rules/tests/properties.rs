//! Property tests over randomly generated boards.

use chess_core::{Color, Delta, Piece, PlacedPiece, Square};
use chess_rules::movegen::{captures, quiet_moves};
use chess_rules::{make_move, select, Board, GameState, Selection};
use proptest::prelude::*;

fn piece_strategy() -> impl Strategy<Value = PlacedPiece> {
    (0u8..64, 0usize..6, any::<bool>()).prop_map(|(index, kind, white)| {
        let square = Square::from_index(index).unwrap();
        let color = if white { Color::White } else { Color::Black };
        PlacedPiece::new(square, Piece::ALL[kind], color)
    })
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(piece_strategy(), 1..24).prop_map(Board::from_pieces)
}

/// Squares strictly between two squares on a shared line.
fn between(from: Square, to: Square) -> Vec<Square> {
    let df = (to.file() as i8 - from.file() as i8).signum();
    let dr = (to.rank() as i8 - from.rank() as i8).signum();
    let mut squares = Vec::new();
    let mut step = 1;
    while let Some(square) = from.offset(Delta::new(df, dr).times(step)) {
        if square == to {
            break;
        }
        squares.push(square);
        step += 1;
    }
    squares
}

fn direction(from: Square, to: Square) -> (i8, i8) {
    (
        (to.file() as i8 - from.file() as i8).signum(),
        (to.rank() as i8 - from.rank() as i8).signum(),
    )
}

proptest! {
    #[test]
    fn quiet_moves_land_on_empty_squares(board in board_strategy()) {
        for piece in board.pieces() {
            for target in quiet_moves(&board, &piece) {
                prop_assert!(board.is_empty(target));
                if piece.piece.is_slider() {
                    for square in between(piece.square, target) {
                        prop_assert!(board.is_empty(square));
                    }
                }
            }
        }
    }

    #[test]
    fn slider_captures_nearest_opponent_once_per_direction(board in board_strategy()) {
        for piece in board.pieces().filter(|p| p.piece.is_slider()) {
            let found = captures(&board, None, &piece);
            let mut directions: Vec<(i8, i8)> =
                found.iter().map(|&target| direction(piece.square, target)).collect();
            let total = directions.len();
            directions.sort();
            directions.dedup();
            prop_assert_eq!(directions.len(), total);

            for target in found {
                let occupant = board.piece_at(target);
                prop_assert!(occupant.is_some_and(|o| o.color != piece.color));
                for square in between(piece.square, target) {
                    prop_assert!(board.is_empty(square));
                }
            }
        }
    }

    #[test]
    fn selecting_empty_square_is_identity(board in board_strategy(), index in 0u8..64) {
        let square = Square::from_index(index).unwrap();
        prop_assume!(board.is_empty(square));
        let state = GameState::new(board, Color::White);
        prop_assert_eq!(select(state.clone(), square), Selection::Unchanged(state));
    }

    #[test]
    fn move_flips_turn_and_tracks_king(board in board_strategy(), black in any::<bool>()) {
        let to_move = if black { Color::Black } else { Color::White };
        let state = GameState::new(board.clone(), to_move);
        for piece in board.pieces() {
            let Some(selected) = select(state.clone(), piece.square).into_selected() else {
                continue;
            };
            for &to in selected.moves.iter().chain(&selected.captures) {
                let next = make_move(&selected, to);
                prop_assert_eq!(next.to_move, to_move.opposite());
                prop_assert_eq!(
                    next.castling_forfeited.contains(&piece.color),
                    piece.piece == Piece::King
                );
                prop_assert_eq!(
                    next.board.piece_at(to).map(|p| (p.piece, p.color)),
                    Some((piece.piece, piece.color))
                );
            }
        }
    }

    #[test]
    fn pawn_forward_moves(file in 1u8..=8, rank in 2u8..=7, white in any::<bool>()) {
        let color = if white { Color::White } else { Color::Black };
        let pawn = PlacedPiece::new(Square::new(file, rank).unwrap(), Piece::Pawn, color);
        let board = Board::from_pieces([pawn]);
        let moves = quiet_moves(&board, &pawn);
        if rank == color.pawn_rank() {
            prop_assert_eq!(moves.len(), 2);
        } else {
            prop_assert!(moves.len() <= 1);
        }
    }
}
