//! Per-piece delta-path tables.
//!
//! A delta-path is one line of travel out from a piece's square. Every delta
//! in a path is measured from the origin square, not from the previous step.
//! Tables are written from White's point of view; Black pawn tables have the
//! rank component negated.

use chess_core::{Color, Delta, Piece, PlacedPiece};

use crate::Board;

/// Farthest a slider path reaches before projection clips it to the board.
const MAX_RAY: usize = 6;

const ORTHOGONAL: [Delta; 4] = [
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 0),
    Delta::new(-1, 0),
];

const DIAGONAL: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(-1, 1),
    Delta::new(1, -1),
    Delta::new(-1, -1),
];

const KNIGHT_LEAPS: [Delta; 8] = [
    Delta::new(1, 2),
    Delta::new(2, 1),
    Delta::new(-1, 2),
    Delta::new(-2, 1),
    Delta::new(1, -2),
    Delta::new(2, -1),
    Delta::new(-1, -2),
    Delta::new(-2, -1),
];

static ROOK_PATHS: [[Delta; MAX_RAY]; 4] = rays(ORTHOGONAL);
static BISHOP_PATHS: [[Delta; MAX_RAY]; 4] = rays(DIAGONAL);
static KING_PATHS: [[Delta; 1]; 8] = single_steps(concat(ORTHOGONAL, DIAGONAL));
static KNIGHT_PATHS: [[Delta; 1]; 8] = single_steps(KNIGHT_LEAPS);

/// Pawn advance; the second step only applies from the starting square.
const PAWN_PUSH: [Delta; 2] = [Delta::new(0, 1), Delta::new(0, 2)];
const PAWN_CAPTURE_LEFT: [Delta; 1] = [Delta::new(-1, 1)];
const PAWN_CAPTURE_RIGHT: [Delta; 1] = [Delta::new(1, 1)];

static WHITE_PAWN_PUSH: [Delta; 2] = PAWN_PUSH;
static BLACK_PAWN_PUSH: [Delta; 2] = mirrored(PAWN_PUSH);
static WHITE_PAWN_CAPTURES: [[Delta; 1]; 2] = [PAWN_CAPTURE_LEFT, PAWN_CAPTURE_RIGHT];
static BLACK_PAWN_CAPTURES: [[Delta; 1]; 2] =
    [mirrored(PAWN_CAPTURE_LEFT), mirrored(PAWN_CAPTURE_RIGHT)];

const fn ray(direction: Delta) -> [Delta; MAX_RAY] {
    let mut path = [direction; MAX_RAY];
    let mut step = 0;
    while step < MAX_RAY {
        path[step] = direction.times(step as i8 + 1);
        step += 1;
    }
    path
}

const fn rays(directions: [Delta; 4]) -> [[Delta; MAX_RAY]; 4] {
    [
        ray(directions[0]),
        ray(directions[1]),
        ray(directions[2]),
        ray(directions[3]),
    ]
}

const fn single_steps(deltas: [Delta; 8]) -> [[Delta; 1]; 8] {
    let mut paths = [[deltas[0]]; 8];
    let mut i = 0;
    while i < 8 {
        paths[i] = [deltas[i]];
        i += 1;
    }
    paths
}

const fn concat(first: [Delta; 4], second: [Delta; 4]) -> [Delta; 8] {
    let mut all = [first[0]; 8];
    let mut i = 0;
    while i < 4 {
        all[i] = first[i];
        all[i + 4] = second[i];
        i += 1;
    }
    all
}

const fn mirrored<const N: usize>(deltas: [Delta; N]) -> [Delta; N] {
    let mut out = deltas;
    let mut i = 0;
    while i < N {
        out[i] = deltas[i].mirrored();
        i += 1;
    }
    out
}

/// Returns the paths a piece travels along when moving without capturing.
pub fn move_paths(piece: &PlacedPiece) -> Vec<&'static [Delta]> {
    match piece.piece {
        Piece::Pawn => {
            let push: &'static [Delta; 2] = match piece.color {
                Color::White => &WHITE_PAWN_PUSH,
                Color::Black => &BLACK_PAWN_PUSH,
            };
            let reach = if Board::is_initial_placement(piece) { 2 } else { 1 };
            vec![&push[..reach]]
        }
        Piece::Rook => ROOK_PATHS.iter().map(|p| &p[..]).collect(),
        Piece::Bishop => BISHOP_PATHS.iter().map(|p| &p[..]).collect(),
        Piece::Queen => ROOK_PATHS
            .iter()
            .chain(BISHOP_PATHS.iter())
            .map(|p| &p[..])
            .collect(),
        Piece::Knight => KNIGHT_PATHS.iter().map(|p| &p[..]).collect(),
        Piece::King => KING_PATHS.iter().map(|p| &p[..]).collect(),
    }
}

/// Returns the paths along which a piece may capture.
///
/// Identical to [`move_paths`] for everything but pawns, which capture on the
/// two forward diagonals.
pub fn capture_paths(piece: &PlacedPiece) -> Vec<&'static [Delta]> {
    match (piece.piece, piece.color) {
        (Piece::Pawn, Color::White) => WHITE_PAWN_CAPTURES.iter().map(|p| &p[..]).collect(),
        (Piece::Pawn, Color::Black) => BLACK_PAWN_CAPTURES.iter().map(|p| &p[..]).collect(),
        _ => move_paths(piece),
    }
}
