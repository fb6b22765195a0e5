//! Chess rule evaluation.
//!
//! This crate answers two questions for a presentation layer:
//! - where can the piece on a given square go ([`select`])
//! - what does the game look like after it goes there ([`make_move`])
//!
//! It knows the movement geometry of every piece, castling (including the
//! rule against castling through an attacked square), pawn double steps and
//! en passant. It does not detect check, checkmate or stalemate and does not
//! enforce whose turn it is.
//!
//! # Architecture
//!
//! Each piece kind has a static table of delta-paths ([`movegen::geometry`]).
//! Paths are projected onto the board, then walked: quiet moves stop before
//! the first occupied square, captures take the first occupant if it belongs
//! to the opponent. Every operation takes a [`GameState`] value and returns a
//! new one.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_rules::{initial_state, make_move, select};
//!
//! let c2 = Square::new(3, 2).unwrap();
//! let selection = select(initial_state(), c2);
//! let selected = selection.selected().unwrap();
//! assert_eq!(selected.moves, vec![Square::new(3, 3).unwrap(), Square::new(3, 4).unwrap()]);
//!
//! let next = make_move(selected, Square::new(3, 3).unwrap());
//! assert_eq!(next.to_move, Color::Black);
//! ```

mod apply;
mod board;
mod config;
mod game;
pub mod movegen;
pub mod rules;
mod state;

pub use board::Board;
pub use config::{ConfigError, RulesConfig};
pub use game::{Game, GameError};
pub use movegen::{AttackGeometry, CastlingDescriptor};
pub use rules::{initial_state, make_move, select, RuleSet, StandardChess};
pub use state::{EnPassant, GameState, SelectedState, Selection};
