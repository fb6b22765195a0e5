//! Capture generation.

use chess_core::{PlacedPiece, Square};

use super::{geometry, project};
use crate::{Board, EnPassant};

/// Returns the squares a piece can capture on.
///
/// Each capture path yields at most its first occupant, and only when that
/// occupant belongs to the opponent. A live en passant target counts as an
/// opposing occupant on every path, even though the square is empty.
pub fn captures(
    board: &Board,
    en_passant: Option<&EnPassant>,
    piece: &PlacedPiece,
) -> Vec<Square> {
    let en_passant_target = en_passant.map(|ep| ep.target);
    let is_en_passant = |square: Square| en_passant_target == Some(square);

    project(piece.square, &geometry::capture_paths(piece))
        .into_iter()
        .filter_map(|path| {
            path.into_iter()
                .find(|&square| board.is_occupied(square) || is_en_passant(square))
        })
        .filter(|&square| {
            is_en_passant(square)
                || board
                    .piece_at(square)
                    .is_some_and(|occupant| occupant.color != piece.color)
        })
        .collect()
}
