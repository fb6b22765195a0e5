//! Game state values produced and consumed by the rule set.

use std::collections::BTreeSet;

use chess_core::{Color, FenError, PlacedPiece, Square};

use crate::Board;

/// A pawn that just advanced two ranks and may be captured en passant.
///
/// Valid for exactly one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant {
    /// The skipped square a capturing pawn moves to.
    pub target: Square,
    /// The double-stepped pawn on its new square.
    pub capturable: PlacedPiece,
}

/// Complete state between two moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// The side to move.
    pub to_move: Color,

    pub board: Board,

    /// Colors whose king has moved. Only ever grows.
    pub castling_forfeited: BTreeSet<Color>,

    /// En passant opportunity created by the previous move, if any.
    pub en_passant: Option<EnPassant>,
}

impl GameState {
    /// The standard starting state: White to move, full castling rights and
    /// no en passant opportunity.
    pub fn initial() -> Self {
        GameState::new(Board::STARTPOS, Color::White)
    }

    /// Creates a state with no forfeited castling and no en passant.
    pub fn new(board: Board, to_move: Color) -> Self {
        GameState {
            to_move,
            board,
            castling_forfeited: BTreeSet::new(),
            en_passant: None,
        }
    }

    /// Creates a state from the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str, to_move: Color) -> Result<Self, FenError> {
        Ok(GameState::new(Board::from_placement(placement)?, to_move))
    }

    /// Returns true if `color` has not yet forfeited castling.
    pub fn may_castle(&self, color: Color) -> bool {
        !self.castling_forfeited.contains(&color)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A state with one piece selected and its candidate destinations computed.
///
/// Exists only between a selection and the next move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedState {
    pub state: GameState,
    pub selected: PlacedPiece,
    /// Quiet moves followed by castling destinations.
    pub moves: Vec<Square>,
    pub captures: Vec<Square>,
}

impl SelectedState {
    /// Returns true if `to` is one of the candidate moves or captures.
    pub fn is_candidate(&self, to: Square) -> bool {
        self.moves.contains(&to) || self.captures.contains(&to)
    }
}

/// Outcome of selecting a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The square was empty; the state is returned as given.
    Unchanged(GameState),
    /// A piece was selected.
    Selected(SelectedState),
}

impl Selection {
    /// Returns the underlying game state.
    pub fn state(&self) -> &GameState {
        match self {
            Selection::Unchanged(state) => state,
            Selection::Selected(selected) => &selected.state,
        }
    }

    pub fn selected(&self) -> Option<&SelectedState> {
        match self {
            Selection::Unchanged(_) => None,
            Selection::Selected(selected) => Some(selected),
        }
    }

    pub fn into_selected(self) -> Option<SelectedState> {
        match self {
            Selection::Unchanged(_) => None,
            Selection::Selected(selected) => Some(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PiecePlacement};

    #[test]
    fn initial_state() {
        let state = GameState::initial();
        assert_eq!(state.to_move, Color::White);
        assert_eq!(state.board.count(), 32);
        assert!(state.castling_forfeited.is_empty());
        assert_eq!(state.en_passant, None);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn from_placement() {
        let state = GameState::from_placement(PiecePlacement::STARTPOS, Color::Black).unwrap();
        assert_eq!(state.board, Board::STARTPOS);
        assert_eq!(state.to_move, Color::Black);
        assert!(GameState::from_placement("8/8", Color::White).is_err());
    }

    #[test]
    fn may_castle() {
        let mut state = GameState::initial();
        assert!(state.may_castle(Color::White));
        state.castling_forfeited.insert(Color::White);
        assert!(!state.may_castle(Color::White));
        assert!(state.may_castle(Color::Black));
    }

    #[test]
    fn selection_accessors() {
        let state = GameState::initial();
        let unchanged = Selection::Unchanged(state.clone());
        assert_eq!(unchanged.state(), &state);
        assert!(unchanged.selected().is_none());

        let knight = PlacedPiece::new(Square::G1, Piece::Knight, Color::White);
        let selected = Selection::Selected(SelectedState {
            state: state.clone(),
            selected: knight,
            moves: vec![Square::new(6, 3).unwrap(), Square::new(8, 3).unwrap()],
            captures: vec![],
        });
        assert_eq!(selected.state(), &state);
        let selected = selected.into_selected().unwrap();
        assert!(selected.is_candidate(Square::new(6, 3).unwrap()));
        assert!(!selected.is_candidate(Square::new(7, 3).unwrap()));
    }
}
