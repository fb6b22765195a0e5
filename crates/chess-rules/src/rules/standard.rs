//! Standard chess rules implementation.

use chess_core::Square;
use tracing::debug;

use super::RuleSet;
use crate::movegen::{captures, castling_moves, quiet_moves, AttackGeometry};
use crate::{apply, GameState, RulesConfig, SelectedState, Selection};

/// Standard chess movement rules.
///
/// Covers:
/// - Piece movement and captures for all six piece kinds
/// - Castling, refused when the king's path is attacked
/// - Pawn double step and en passant
///
/// There is no check, checkmate or turn validation: a king may step into
/// check and either side may be selected at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardChess {
    /// How attacked squares are determined for castling.
    pub attacks: AttackGeometry,
}

impl StandardChess {
    pub const fn new(attacks: AttackGeometry) -> Self {
        StandardChess { attacks }
    }

    /// Creates the rules described by a configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.attack_geometry)
    }
}

impl RuleSet for StandardChess {
    fn initial_state(&self) -> GameState {
        GameState::initial()
    }

    fn select(&self, state: GameState, at: Square) -> Selection {
        let Some(piece) = state.board.piece_at(at) else {
            return Selection::Unchanged(state);
        };

        let mut moves = quiet_moves(&state.board, &piece);
        moves.extend(castling_moves(&state, &piece, self.attacks));
        let captures = captures(&state.board, state.en_passant.as_ref(), &piece);

        debug!(
            piece = %piece,
            moves = moves.len(),
            captures = captures.len(),
            "selected piece"
        );

        Selection::Selected(SelectedState {
            state,
            selected: piece,
            moves,
            captures,
        })
    }

    fn make_move(&self, selected: &SelectedState, to: Square) -> GameState {
        apply::make_move(selected, to)
    }
}
