//! Candidate move generation.
//!
//! Every generator walks projected delta-paths from the piece's square:
//! - quiet moves keep the leading empty squares of each path
//! - captures keep the first occupant of each path when it is an opponent
//! - castling adds the king's two-square destinations when they are safe

mod attacks;
mod captures;
mod castling;
pub mod geometry;
mod paths;

use chess_core::{PlacedPiece, Square};

use crate::Board;

pub use attacks::{covered_squares, is_attacked, AttackGeometry};
pub use captures::captures;
pub use castling::{castling_descriptor, castling_moves, CastlingDescriptor, CASTLINGS};
pub use paths::{project, Path};

/// Returns the squares a piece can move to without capturing.
///
/// Each path is walked outward and stops before the first occupied square,
/// whichever color stands on it. Results are in path order, then distance.
pub fn quiet_moves(board: &Board, piece: &PlacedPiece) -> Vec<Square> {
    project(piece.square, &geometry::move_paths(piece))
        .into_iter()
        .flat_map(|path| {
            path.into_iter()
                .take_while(|&square| board.is_empty(square))
        })
        .collect()
}
