//! Relative board offsets.

/// A `(Δfile, Δrank)` offset measured from a piece's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub file: i8,
    pub rank: i8,
}

impl Delta {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Delta { file, rank }
    }

    /// Returns this delta scaled by `steps`.
    #[inline]
    pub const fn times(self, steps: i8) -> Self {
        Delta::new(self.file * steps, self.rank * steps)
    }

    /// Returns this delta with the rank component negated.
    ///
    /// Used to turn White pawn geometry into Black pawn geometry.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Delta::new(self.file, -self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_scales_both_axes() {
        assert_eq!(Delta::new(1, -1).times(3), Delta::new(3, -3));
        assert_eq!(Delta::new(0, 1).times(6), Delta::new(0, 6));
    }

    #[test]
    fn mirrored_flips_rank_only() {
        assert_eq!(Delta::new(-1, 1).mirrored(), Delta::new(-1, -1));
        assert_eq!(Delta::new(0, 2).mirrored(), Delta::new(0, -2));
    }
}
