//! Board square representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Delta;

/// Error returned when a string is not a square in algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square: '{0}'")]
pub struct SquareParseError(pub String);

/// A square on the chess board.
///
/// Files and ranks are both numbered 1 to 8, so a1 is `(1, 1)` and h8 is
/// `(8, 8)`. Internally squares are indexed 0-63 in little-endian rank-file
/// order (a1 = 0, b1 = 1, ..., h8 = 63). A `Square` is always on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a 1-based file and rank.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= 1 && file <= 8 && rank >= 1 && rank <= 8 {
            Some(Square((rank - 1) * 8 + (file - 1)))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(file - b'a' + 1, rank - b'0')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file, 1 (a) to 8 (h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Returns the rank, 1 to 8.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    /// Returns the square reached by applying `delta`, or `None` if it falls
    /// off the board.
    #[inline]
    pub const fn offset(self, delta: Delta) -> Option<Self> {
        let file = self.file() as i16 + delta.file as i16;
        let rank = self.rank() as i16 + delta.rank as i16;
        if file < 1 || file > 8 || rank < 1 || rank > 8 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file() - 1) as char;
        format!("{}{}", file, self.rank())
    }

    // Home squares of kings and rooks
    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| SquareParseError(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
