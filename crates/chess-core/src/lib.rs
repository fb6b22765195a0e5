//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rule engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`PlacedPiece`] for a piece standing on a square
//! - [`Square`] and [`Delta`] for board coordinates and relative offsets
//! - FEN piece-placement parsing and serialization

mod color;
mod delta;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use delta::Delta;
pub use fen::{FenError, PiecePlacement};
pub use piece::{Piece, PlacedPiece};
pub use square::{Square, SquareParseError};
