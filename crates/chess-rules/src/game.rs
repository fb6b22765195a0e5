//! Game management with history tracking.
//!
//! [`Game`] wraps the select-then-move cycle for callers that want to keep the
//! current selection and the previous states around, e.g. for undo.

use chess_core::Square;
use thiserror::Error;
use tracing::debug;

use crate::rules::{RuleSet, StandardChess};
use crate::{GameState, SelectedState, Selection};

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was requested with no piece selected.
    #[error("no piece selected")]
    NothingSelected,
    /// The destination is not a candidate of the selected piece.
    #[error("{0} is not a candidate destination")]
    NotACandidate(Square),
}

/// A game in progress with its state history.
#[derive(Debug, Clone)]
pub struct Game {
    rules: StandardChess,
    /// Current state.
    state: GameState,
    /// States before each move, oldest first.
    history: Vec<GameState>,
    /// Active selection, if any.
    selection: Option<SelectedState>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting state.
    pub fn new() -> Self {
        Self::with_rules(StandardChess::default())
    }

    /// Creates a new game from the starting state of `rules`.
    pub fn with_rules(rules: StandardChess) -> Self {
        let state = rules.initial_state();
        Self::from_state(rules, state)
    }

    /// Creates a game from an arbitrary state.
    pub fn from_state(rules: StandardChess, state: GameState) -> Self {
        Game {
            rules,
            state,
            history: Vec::new(),
            selection: None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the active selection, if any.
    pub fn selection(&self) -> Option<&SelectedState> {
        self.selection.as_ref()
    }

    /// Returns the states preceding each move played so far.
    pub fn history(&self) -> &[GameState] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Selects the piece on `at`. Selecting an empty square clears the
    /// selection.
    pub fn select(&mut self, at: Square) -> Option<&SelectedState> {
        self.selection = match self.rules.select(self.state.clone(), at) {
            Selection::Selected(selected) => Some(selected),
            Selection::Unchanged(_) => None,
        };
        self.selection.as_ref()
    }

    /// Moves the selected piece to `to`.
    pub fn move_to(&mut self, to: Square) -> Result<(), GameError> {
        let selected = self.selection.as_ref().ok_or(GameError::NothingSelected)?;
        let next = self
            .rules
            .try_make_move(selected, to)
            .ok_or(GameError::NotACandidate(to))?;

        self.selection = None;
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);
        Ok(())
    }

    /// Takes back the last move. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                debug!(ply = self.history.len(), "undo");
                self.state = previous;
                self.selection = None;
                true
            }
            None => false,
        }
    }
}
