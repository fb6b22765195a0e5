//! Applying a selected move to produce the next state.

use chess_core::{Piece, PlacedPiece, Square};
use tracing::debug;

use crate::movegen::castling_descriptor;
use crate::{EnPassant, GameState, SelectedState};

/// Applies the selected piece's move to `to` and returns the next state.
///
/// `to` is expected to be one of the selection's candidate moves or captures;
/// it is not validated here. The input state is left untouched.
pub fn make_move(selected: &SelectedState, to: Square) -> GameState {
    let SelectedState {
        state,
        selected: mover,
        ..
    } = selected;
    let mut next = state.clone();

    let castling = if is_castling(mover, to) {
        castling_descriptor(to)
    } else {
        None
    };

    match castling {
        Some(descriptor) => {
            for square in descriptor.vacated() {
                next.board.remove(square);
            }
            for piece in descriptor.placed() {
                next.board.put(piece);
            }
        }
        None => {
            next.board.remove(to);
            if let Some(ep) = en_passant_capture(state, to) {
                next.board.remove(ep.capturable.square);
            }
            next.board.remove(mover.square);
            next.board.put(mover.moved_to(to));
        }
    }

    if mover.is(Piece::King) {
        next.castling_forfeited.insert(mover.color);
    }

    next.en_passant = double_step(mover, to);
    next.to_move = state.to_move.opposite();

    debug!(
        piece = %mover,
        to = %to,
        castling = castling.is_some(),
        "applied move"
    );

    next
}

/// A king moving two files in one step is castling.
fn is_castling(mover: &PlacedPiece, to: Square) -> bool {
    mover.is(Piece::King) && mover.square.file().abs_diff(to.file()) == 2
}

/// Returns the live en passant opportunity if this move lands on its target.
fn en_passant_capture(state: &GameState, to: Square) -> Option<&EnPassant> {
    state.en_passant.as_ref().filter(|ep| ep.target == to)
}

/// Returns the en passant opportunity created by a pawn advancing two ranks.
fn double_step(mover: &PlacedPiece, to: Square) -> Option<EnPassant> {
    if !mover.is(Piece::Pawn) || mover.square.rank().abs_diff(to.rank()) != 2 {
        return None;
    }
    let skipped_rank = (mover.square.rank() + to.rank()) / 2;
    Square::new(to.file(), skipped_rank).map(|target| EnPassant {
        target,
        capturable: mover.moved_to(to),
    })
}
