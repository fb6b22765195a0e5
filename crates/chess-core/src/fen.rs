//! FEN (Forsyth-Edwards Notation) piece placement parsing and serialization.
//!
//! Only the first FEN field is handled here: the rank-by-rank placement of
//! pieces, e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use std::fmt;

use thiserror::Error;

use crate::{Color, Piece, PlacedPiece, Square};

/// Errors that can occur when parsing a FEN piece placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{found}' in rank {rank}")]
    InvalidCharacter { rank: u8, found: char },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

/// A parsed FEN piece placement.
///
/// Pieces are kept in square order (a1, b1, ..., h8).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PiecePlacement {
    pieces: Vec<PlacedPiece>,
}

impl PiecePlacement {
    /// Piece placement of the standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses the piece-placement field of a FEN string.
    pub fn parse(placement: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount(ranks.len()));
        }

        let mut pieces = Vec::new();
        // FEN starts from rank 8
        for (rank, rank_str) in (1..=8u8).rev().zip(ranks) {
            let mut file = 1u32;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    let square = u8::try_from(file)
                        .ok()
                        .and_then(|file| Square::new(file, rank))
                        .ok_or(FenError::InvalidRankLength {
                            rank,
                            squares: file,
                        })?;
                    pieces.push(PlacedPiece::new(square, piece, color));
                    file += 1;
                } else {
                    return Err(FenError::InvalidCharacter { rank, found: c });
                }
            }
            if file != 9 {
                return Err(FenError::InvalidRankLength {
                    rank,
                    squares: file - 1,
                });
            }
        }

        Ok(Self::from_pieces(pieces))
    }

    /// Builds a placement from pieces. Later pieces win when two share a square.
    pub fn from_pieces(pieces: impl IntoIterator<Item = PlacedPiece>) -> Self {
        let mut slots: [Option<(Piece, Color)>; 64] = [None; 64];
        for p in pieces {
            slots[p.square.index() as usize] = Some((p.piece, p.color));
        }
        let pieces = Square::all()
            .zip(slots)
            .filter_map(|(square, slot)| {
                slot.map(|(piece, color)| PlacedPiece::new(square, piece, color))
            })
            .collect();
        PiecePlacement { pieces }
    }

    /// Returns the pieces in square order.
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn into_pieces(self) -> Vec<PlacedPiece> {
        self.pieces
    }
}

impl fmt::Display for PiecePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fen = String::new();
        for rank in (1..=8u8).rev() {
            let mut empty_count = 0;
            for file in 1..=8u8 {
                let occupant = self
                    .pieces
                    .iter()
                    .find(|p| p.square.file() == file && p.square.rank() == rank);
                if let Some(p) = occupant {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(p.piece.to_fen_char(p.color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 1 {
                fen.push('/');
            }
        }
        write!(f, "{}", fen)
    }
}
