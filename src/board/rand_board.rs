//! Random position generation.

use super::{Board, MoveRule};
use crate::core::GameState;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random `Board` generator. Creates boards by playing random legal moves from a blank board.
///
/// # Examples
///
/// Create one 5x5 `Board` with between 2 and 6 moves played, reproducibly.
///
/// ```
/// use isolation_agent::board::{Board, RandBoard};
///
/// let board: Board = RandBoard::new()
///     .size(5, 5)
///     .pseudo_random(12455)
///     .moves(2, 6)
///     .one();
/// assert!(board.moves_played() >= 2);
/// ```
///
/// Games can end before the minimum is reached; such a board is returned as-is.
pub struct RandBoard {
    width: usize,
    height: usize,
    rule: MoveRule,
    min_moves: u16,
    max_moves: u16,
    rng: StdRng,
}

impl Default for RandBoard {
    fn default() -> Self {
        RandBoard {
            width: 7,
            height: 7,
            rule: MoveRule::King,
            min_moves: 2,
            max_moves: 12,
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandBoard {
    /// Create a new `RandBoard` object.
    pub fn new() -> Self {
        RandBoard::default()
    }

    /// Sets the board dimensions. Dimensions are clamped to at least one cell.
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Sets the move rule of the generated boards.
    pub fn rule(mut self, rule: MoveRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the inclusive range of moves played on a generated board.
    pub fn moves(mut self, min: u16, max: u16) -> Self {
        self.min_moves = min.min(max);
        self.max_moves = max.max(min);
        self
    }

    /// Turns pseudo-random generation on. The same seed creates the same `Board`s.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Creates a singular `Board` with a random position.
    pub fn one(mut self) -> Board {
        self.go()
    }

    /// Creates a `Vec<Board>` of `size` random positions.
    pub fn many(mut self, size: usize) -> Vec<Board> {
        (0..size).map(|_| self.go()).collect()
    }

    fn go(&mut self) -> Board {
        let mut board = Board::blank(
            self.width.min(super::MAX_DIMENSION),
            self.height.min(super::MAX_DIMENSION),
            self.rule,
        );
        let target = self.rng.gen_range(self.min_moves..=self.max_moves);
        while board.moves_played() < target {
            let moves = board.active_moves();
            match moves.choose(&mut self.rng) {
                Some(mov) => board.apply_unchecked(*mov),
                None => break,
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_boards_repeat() {
        let a = RandBoard::new().size(5, 5).pseudo_random(7).many(4);
        let b = RandBoard::new().size(5, 5).pseudo_random(7).many(4);
        assert_eq!(a, b);
    }

    #[test]
    fn respects_move_bounds() {
        for board in RandBoard::new().size(6, 6).moves(3, 5).pseudo_random(1).many(20) {
            assert!(board.moves_played() <= 5);
            assert_eq!(board.blank_cell_count(), 36 - board.moves_played() as usize);
        }
    }
}
