//! Castling eligibility and the castling descriptor table.

use chess_core::{Color, Piece, PlacedPiece, Square};
use tracing::trace;

use super::{is_attacked, AttackGeometry};
use crate::{Board, GameState};

/// One of the four castling moves.
///
/// Keyed by the king's destination; applying it vacates the king's and rook's
/// home squares and places both pieces on their castled squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingDescriptor {
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// All castling moves, kingside before queenside for each color.
pub static CASTLINGS: [CastlingDescriptor; 4] = [
    CastlingDescriptor {
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
    },
    CastlingDescriptor {
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
    },
    CastlingDescriptor {
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
    },
    CastlingDescriptor {
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
    },
];

/// Looks up the castling move whose king lands on `king_to`.
pub fn castling_descriptor(king_to: Square) -> Option<&'static CastlingDescriptor> {
    CASTLINGS.iter().find(|c| c.king_to == king_to)
}

impl CastlingDescriptor {
    /// Squares emptied by castling.
    pub fn vacated(&self) -> [Square; 2] {
        [self.rook_from, self.king_from]
    }

    /// Pieces standing on their new squares after castling.
    pub fn placed(&self) -> [PlacedPiece; 2] {
        [
            PlacedPiece::new(self.king_to, Piece::King, self.color),
            PlacedPiece::new(self.rook_to, Piece::Rook, self.color),
        ]
    }

    /// The squares the king stands on or crosses: its home square, then one
    /// and two steps toward the rook.
    pub fn king_path(&self) -> Vec<Square> {
        let rank = self.king_from.rank();
        let from = self.king_from.file();
        let files = if self.king_to.file() > from {
            [from, from + 1, from + 2]
        } else {
            [from, from - 1, from - 2]
        };
        files
            .into_iter()
            .filter_map(|file| Square::new(file, rank))
            .collect()
    }

    /// The two squares the king crosses toward the rook.
    fn crossed(&self) -> impl Iterator<Item = Square> {
        self.king_path().into_iter().skip(1)
    }

    /// Returns true if the rook is home and both squares the king crosses are
    /// empty. A piece next to the queenside rook does not obstruct. Says
    /// nothing about attacked squares.
    pub fn is_unobstructed(&self, board: &Board) -> bool {
        let rook = PlacedPiece::new(self.rook_from, Piece::Rook, self.color);
        board.piece_at(self.rook_from) == Some(rook)
            && self.crossed().all(|square| board.is_empty(square))
    }
}

/// Returns the castling destinations available to `king`.
///
/// Requires that the king's color has not forfeited castling and that the king
/// stands on its home square. A side is dropped when any square of the king's
/// path is attacked under `model`.
pub fn castling_moves(
    state: &GameState,
    king: &PlacedPiece,
    model: AttackGeometry,
) -> Vec<Square> {
    if !king.is(Piece::King) || !state.may_castle(king.color) {
        return Vec::new();
    }

    CASTLINGS
        .iter()
        .filter(|c| c.color == king.color && c.king_from == king.square)
        .filter(|c| c.is_unobstructed(&state.board))
        .filter(|c| {
            let attacked = is_attacked(&state.board, &c.king_path(), king.color, model);
            if attacked {
                trace!(king = %king.square, to = %c.king_to, "castling path attacked");
            }
            !attacked
        })
        .map(|c| c.king_to)
        .collect()
}
