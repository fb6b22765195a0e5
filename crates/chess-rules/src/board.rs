//! Board representation.

use std::fmt;

use chess_core::{Color, FenError, Piece, PiecePlacement, PlacedPiece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The pieces on the board, at most one per square.
///
/// Stored as a dense 64-slot array indexed by [`Square::index`]; an empty
/// square is `None`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// The standard starting placement.
    pub const STARTPOS: Board = compute_startpos();

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board from pieces. A later piece replaces an earlier one on
    /// the same square.
    pub fn from_pieces(pieces: impl IntoIterator<Item = PlacedPiece>) -> Self {
        let mut board = Board::empty();
        for piece in pieces {
            board.put(piece);
        }
        board
    }

    /// Creates a board from the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let placement = PiecePlacement::parse(placement)?;
        Ok(Board::from_pieces(placement.into_pieces()))
    }

    /// Returns the FEN piece placement of this board.
    pub fn to_placement(&self) -> String {
        PiecePlacement::from_pieces(self.pieces()).to_string()
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.squares[square.index() as usize]
            .map(|(piece, color)| PlacedPiece::new(square, piece, color))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index() as usize].is_none()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        !self.is_empty(square)
    }

    /// Places a piece, replacing whatever stood on its square.
    pub fn put(&mut self, piece: PlacedPiece) {
        self.squares[piece.square.index() as usize] = Some((piece.piece, piece.color));
    }

    /// Removes and returns the piece on `square`.
    pub fn remove(&mut self, square: Square) -> Option<PlacedPiece> {
        let removed = self.piece_at(square);
        self.squares[square.index() as usize] = None;
        removed
    }

    /// Iterates over all pieces in square order.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all().filter_map(|square| self.piece_at(square))
    }

    /// Iterates over the pieces of one color in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if `piece` stands exactly where it stands in the starting
    /// placement.
    pub fn is_initial_placement(piece: &PlacedPiece) -> bool {
        Board::STARTPOS.piece_at(piece.square) == Some(*piece)
    }
}

/// Computes the starting placement at compile time.
const fn compute_startpos() -> Board {
    let mut squares = [None; 64];
    let mut file = 0usize;

    while file < 8 {
        squares[file] = Some((BACK_RANK[file], Color::White));
        squares[8 + file] = Some((Piece::Pawn, Color::White));
        squares[48 + file] = Some((Piece::Pawn, Color::Black));
        squares[56 + file] = Some((BACK_RANK[file], Color::Black));
        file += 1;
    }

    Board { squares }
}

impl Default for Board {
    fn default() -> Self {
        Board::STARTPOS
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
