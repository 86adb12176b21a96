//! Primitives for scoring a position.
//!
//! A `Value` is a plain `f64`, so heuristics are free to return fractional scores and the
//! search can use true infinities for its window bounds.

use super::{Move, NO_MOVE};

/// Type for `f64` to determine the `Value` of an evaluation.
pub type Value = f64;

pub const ZERO: Value = 0.0;
pub const INFINITE: Value = f64::INFINITY;
pub const NEG_INFINITE: Value = f64::NEG_INFINITY;

/// A move paired with the score the search assigned to it.
///
/// Returned at every level of the search; only the move of the root result is meaningful
/// to a caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoringMove {
    pub mov: Move,
    pub score: Value,
}

impl ScoringMove {
    /// Creates a new `ScoringMove`.
    #[inline(always)]
    pub fn new(mov: Move, score: Value) -> Self {
        ScoringMove { mov, score }
    }

    /// Returns a `ScoringMove` containing `NO_MOVE` and a user-defined score.
    #[inline(always)]
    pub fn blank(score: Value) -> Self {
        ScoringMove {
            mov: NO_MOVE,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_covers_move_and_score() {
        let a = ScoringMove::new(Move::new(0, 0), 1.0);
        assert_eq!(a, ScoringMove::new(Move::new(0, 0), 1.0));
        assert_ne!(a, ScoringMove::new(NO_MOVE, 1.0));
        assert_ne!(a, ScoringMove::new(Move::new(0, 0), 2.0));
        assert_eq!(ScoringMove::blank(ZERO).mov, NO_MOVE);
    }
}
