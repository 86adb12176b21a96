//! Contains the primitives every other module is built upon: `Player`, `Move`, and the
//! `GameState` trait describing what the search needs from a board.

pub mod score;

use std::fmt;
use std::ops::Not;

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

/// The sentinel move returned when no legal move exists.
pub const NO_MOVE: Move = Move { row: -1, col: -1 };

/// Enum to represent the two players of a game. `One` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Returns the other player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isolation_agent::core::Player;
    ///
    /// let p = Player::Two;
    /// assert_eq!(p.other_player(), Player::One);
    /// ```
    #[inline(always)]
    pub fn other_player(self) -> Player {
        !(self)
    }
}

impl Not for Player {
    type Output = Player;

    #[inline(always)]
    fn not(self) -> Self::Output {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Player::One => f.pad("Player One"),
            Player::Two => f.pad("Player Two"),
        }
    }
}

/// A board coordinate, `(row, col)`.
///
/// Coordinates are signed so that the sentinel [`NO_MOVE`] of `(-1, -1)` can be
/// represented alongside real cells.
///
/// [`NO_MOVE`]: constant.NO_MOVE.html
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Creates a new `Move` to the given cell.
    #[inline(always)]
    pub const fn new(row: i32, col: i32) -> Self {
        Move { row, col }
    }

    /// Returns if this is the "no move" sentinel.
    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == NO_MOVE
    }

    /// Returns if this is a real coordinate.
    #[inline(always)]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the move as a `(row, col)` tuple.
    #[inline(always)]
    pub fn as_tuple(self) -> (i32, i32) {
        (self.row, self.col)
    }
}

impl Default for Move {
    fn default() -> Self {
        NO_MOVE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The capabilities a search needs from a game state.
///
/// A state is never mutated by the search: [`forecast_move`] hands back a new state with
/// the move applied, leaving `self` usable for the sibling branches.
///
/// [`forecast_move`]: #tymethod.forecast_move
pub trait GameState: Sized {
    /// Returns the player whose turn it is.
    fn active_player(&self) -> Player;

    /// Returns all moves `player` could make from this state. Empty if the player is stuck.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// Returns a new state with `mov` applied by the active player.
    fn forecast_move(&self, mov: Move) -> Self;

    /// Returns the location of `player`, or `None` if it has not been placed yet.
    fn player_location(&self, player: Player) -> Option<Move>;

    /// Returns the number of cells that are neither blocked nor occupied.
    fn blank_cell_count(&self) -> usize;

    /// Number of columns of the board.
    fn width(&self) -> usize;

    /// Number of rows of the board.
    fn height(&self) -> usize;

    /// Returns if `mov` is legal for the active player.
    fn is_move_legal(&self, mov: Move) -> bool {
        self.legal_moves(self.active_player()).contains(&mov)
    }

    /// Returns if `player` is the first player to move.
    #[inline(always)]
    fn is_player_one(&self, player: Player) -> bool {
        player == Player::One
    }

    /// Returns if `player` is the second player to move.
    #[inline(always)]
    fn is_player_two(&self, player: Player) -> bool {
        player == Player::Two
    }

    /// Returns the legal moves of the active player.
    #[inline]
    fn active_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player_flips() {
        for player in ALL_PLAYERS.iter() {
            assert_ne!(player.other_player(), *player);
            assert_eq!(player.other_player().other_player(), *player);
        }
    }

    #[test]
    fn sentinel() {
        assert!(NO_MOVE.is_none());
        assert_eq!(NO_MOVE.as_tuple(), (-1, -1));
        assert!(Move::new(0, 0).is_some());
        assert_eq!(Move::from((2, 3)), Move::new(2, 3));
    }
}
