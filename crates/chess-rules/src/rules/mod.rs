//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait: the two operations a
//! presentation layer drives (select a square, move the selection) plus the
//! starting state. [`StandardChess`] is the implementation; the free functions
//! here use it with default settings.

mod standard;

pub use standard::StandardChess;

use chess_core::Square;

use crate::{GameState, SelectedState, Selection};

/// Trait for rule sets driving a game one selection at a time.
///
/// # Example
///
/// ```
/// use chess_core::Square;
/// use chess_rules::{RuleSet, StandardChess};
///
/// let rules = StandardChess::default();
/// let selection = rules.select(rules.initial_state(), "e2".parse().unwrap());
/// let selected = selection.selected().unwrap();
/// assert_eq!(selected.moves.len(), 2);
///
/// let next = rules.make_move(selected, "e4".parse().unwrap());
/// assert!(next.board.piece_at(Square::from_algebraic("e2").unwrap()).is_none());
/// ```
pub trait RuleSet {
    /// Returns the starting state for this rule set.
    fn initial_state(&self) -> GameState;

    /// Selects the piece on `at`, computing its candidate moves and captures.
    ///
    /// Selecting an empty square returns the state unchanged.
    fn select(&self, state: GameState, at: Square) -> Selection;

    /// Moves the selected piece to `to`, returning the next state.
    ///
    /// `to` is expected to come from the selection's candidates; use
    /// [`try_make_move`](RuleSet::try_make_move) to have that checked.
    fn make_move(&self, selected: &SelectedState, to: Square) -> GameState;

    /// Moves the selected piece, returning `None` if `to` is not a candidate.
    fn try_make_move(&self, selected: &SelectedState, to: Square) -> Option<GameState> {
        if selected.is_candidate(to) {
            Some(self.make_move(selected, to))
        } else {
            None
        }
    }
}

/// Returns the standard starting state.
pub fn initial_state() -> GameState {
    StandardChess::default().initial_state()
}

/// Selects the piece on `at` using the default rules.
pub fn select(state: GameState, at: Square) -> Selection {
    StandardChess::default().select(state, at)
}

/// Moves the selected piece to `to` using the default rules.
pub fn make_move(selected: &SelectedState, to: Square) -> GameState {
    StandardChess::default().make_move(selected, to)
}
