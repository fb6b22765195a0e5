//! Attack detection used for castling safety.

use std::collections::HashSet;

use chess_core::{Color, PlacedPiece, Square};
use serde::{Deserialize, Serialize};

use super::{geometry, project, quiet_moves};
use crate::Board;

/// Which squares an opposing piece is considered to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackGeometry {
    /// The squares the piece could move to quietly.
    ///
    /// Pawns cover the squares straight ahead rather than their diagonals, and
    /// an occupied square is never covered, so a king already in check is not
    /// detected.
    #[default]
    QuietMoves,
    /// The squares the piece could capture on if an enemy stood there: every
    /// square of each capture path up to and including the first occupant.
    Threats,
}

/// Returns the squares `attacker` covers under the given geometry.
pub fn covered_squares(
    board: &Board,
    attacker: &PlacedPiece,
    model: AttackGeometry,
) -> Vec<Square> {
    match model {
        AttackGeometry::QuietMoves => quiet_moves(board, attacker),
        AttackGeometry::Threats => project(attacker.square, &geometry::capture_paths(attacker))
            .into_iter()
            .flat_map(|path| {
                let reach = path
                    .iter()
                    .position(|&square| board.is_occupied(square))
                    .map_or(path.len(), |blocker| blocker + 1);
                path.into_iter().take(reach)
            })
            .collect(),
    }
}

/// Returns true if any piece of the opponent of `defender` covers a square on
/// `path`.
pub fn is_attacked(
    board: &Board,
    path: &[Square],
    defender: Color,
    model: AttackGeometry,
) -> bool {
    let covered: HashSet<Square> = board
        .pieces_of(defender.opposite())
        .flat_map(|attacker| covered_squares(board, &attacker, model))
        .collect();
    path.iter().any(|square| covered.contains(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn at(file: u8, rank: u8, piece: Piece, color: Color) -> PlacedPiece {
        PlacedPiece::new(sq(file, rank), piece, color)
    }

    #[test]
    fn rook_attacks_open_file() {
        let board = Board::from_pieces([at(6, 5, Piece::Rook, Color::Black)]);
        let path = [sq(5, 1), sq(6, 1), sq(7, 1)];
        assert!(is_attacked(&board, &path, Color::White, AttackGeometry::QuietMoves));
        assert!(is_attacked(&board, &path, Color::White, AttackGeometry::Threats));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let board = Board::from_pieces([at(6, 5, Piece::Rook, Color::White)]);
        let path = [sq(5, 1), sq(6, 1), sq(7, 1)];
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::QuietMoves));
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::Threats));
    }

    #[test]
    fn blocked_rook_does_not_attack() {
        let board = Board::from_pieces([
            at(6, 5, Piece::Rook, Color::Black),
            at(6, 3, Piece::Knight, Color::White),
        ]);
        let path = [sq(6, 1)];
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::QuietMoves));
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::Threats));
    }

    #[test]
    fn pawn_diagonal_depends_on_geometry() {
        let board = Board::from_pieces([at(5, 2, Piece::Pawn, Color::Black)]);
        let path = [sq(6, 1)];
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::QuietMoves));
        assert!(is_attacked(&board, &path, Color::White, AttackGeometry::Threats));
    }

    #[test]
    fn occupied_square_only_covered_by_threats() {
        let king = at(5, 1, Piece::King, Color::White);
        let board = Board::from_pieces([king, at(5, 5, Piece::Rook, Color::Black)]);
        let path = [king.square];
        assert!(!is_attacked(&board, &path, Color::White, AttackGeometry::QuietMoves));
        assert!(is_attacked(&board, &path, Color::White, AttackGeometry::Threats));
    }

    #[test]
    fn threats_stop_at_first_occupant() {
        let rook = at(1, 1, Piece::Rook, Color::Black);
        let board = Board::from_pieces([rook, at(1, 3, Piece::Pawn, Color::White)]);
        let covered = covered_squares(&board, &rook, AttackGeometry::Threats);
        assert!(covered.contains(&sq(1, 2)));
        assert!(covered.contains(&sq(1, 3)));
        assert!(!covered.contains(&sq(1, 4)));
    }

    #[test]
    fn geometry_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            geometry: AttackGeometry,
        }
        let parsed: Wrapper = toml::from_str("geometry = \"threats\"").unwrap();
        assert_eq!(parsed.geometry, AttackGeometry::Threats);
        let parsed: Wrapper = toml::from_str("geometry = \"quiet-moves\"").unwrap();
        assert_eq!(parsed.geometry, AttackGeometry::QuietMoves);
    }
}
