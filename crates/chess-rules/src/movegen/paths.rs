//! Projection of delta-paths onto the board.

use chess_core::{Delta, Square};

/// An ordered line of absolute squares, nearest first.
pub type Path = Vec<Square>;

/// Turns each delta-path into absolute squares relative to `origin`.
///
/// Squares that fall off the board are dropped. Geometry paths only move
/// outward, so in practice a path simply ends at the edge.
pub fn project(origin: Square, delta_paths: &[&[Delta]]) -> Vec<Path> {
    delta_paths
        .iter()
        .map(|deltas| {
            deltas
                .iter()
                .filter_map(|&delta| origin.offset(delta))
                .collect()
        })
        .collect()
}
