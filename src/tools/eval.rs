//! Heuristic evaluation of a position from one player's point of view.
//!
//! Evaluation is the leaf cost of the whole search, so every strategy here is a pure function
//! of the state: no caches, no counters.
//!
//! The strategies disagree on how a stuck player looks. The move differentials see a player
//! with zero moves as simply "fewer moves" and stay finite. The center-distance ratio ignores
//! mobility entirely, so a stuck player sitting on the center still scores the maximum center
//! distance. Neither is treated as canonical; pick one through [`Heuristic`].
//!
//! [`Heuristic`]: enum.Heuristic.html

use crate::core::score::Value;
use crate::core::{GameState, Move, Player};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Anything able to score a state for a player.
///
/// Implemented by [`Heuristic`] and by every `Fn(&S, Player) -> Value` closure, so tests and
/// callers can plug in their own scoring.
///
/// ```
/// use isolation_agent::board::Board;
/// use isolation_agent::core::Player;
/// use isolation_agent::tools::eval::{Evaluator, Heuristic};
///
/// let board = Board::new(3, 3).unwrap();
/// let constant = |_: &Board, _: Player| 1.5_f64;
/// assert_eq!(constant.score(&board, Player::One), 1.5);
/// assert_eq!(Heuristic::MoveDifferential.score(&board, Player::One), 0.0);
/// ```
///
/// [`Heuristic`]: enum.Heuristic.html
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> Value;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> Value,
{
    #[inline]
    fn score(&self, state: &S, player: Player) -> Value {
        self(state, player)
    }
}

/// The built-in evaluation strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// `my moves - opponent moves`.
    #[default]
    MoveDifferential,
    /// `my moves - 2 * opponent moves`, chasing the opponent harder.
    AggressiveMoveDifferential,
    /// Ratio of the opponent's distance to the center over the player's own.
    CenterDistance,
    /// `MoveDifferential + CenterDistance`.
    MovesAndCenter,
}

impl Heuristic {
    /// Every strategy, in declaration order.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::MoveDifferential,
        Heuristic::AggressiveMoveDifferential,
        Heuristic::CenterDistance,
        Heuristic::MovesAndCenter,
    ];

    /// The configuration name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::MoveDifferential => "move_differential",
            Heuristic::AggressiveMoveDifferential => "aggressive_move_differential",
            Heuristic::CenterDistance => "center_distance",
            Heuristic::MovesAndCenter => "moves_and_center",
        }
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: Player) -> Value {
        match *self {
            Heuristic::MoveDifferential => move_differential(state, player, 1.0),
            Heuristic::AggressiveMoveDifferential => move_differential(state, player, 2.0),
            Heuristic::CenterDistance => center_distance(state, player),
            Heuristic::MovesAndCenter => {
                move_differential(state, player, 1.0) + center_distance(state, player)
            }
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .find(|h| h.name() == s.trim())
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Number of legal moves of `player` minus `weight` times those of its opponent.
pub fn move_differential<S: GameState>(state: &S, player: Player, weight: Value) -> Value {
    let own = state.legal_moves(player).len() as Value;
    let opp = state.legal_moves(player.other_player()).len() as Value;
    own - weight * opp
}

/// `opponent distance / player distance` from the board center.
///
/// A player standing on the center would divide by zero, so it scores the largest distance
/// any cell can have instead. An unplaced player counts as being that far away.
pub fn center_distance<S: GameState>(state: &S, player: Player) -> Value {
    let center = board_center(state);
    let max_distance = distance(Move::new(0, 0), center);

    let own = state
        .player_location(player)
        .map_or(max_distance, |loc| distance(loc, center));
    if own == 0.0 {
        return max_distance;
    }
    let opp = state
        .player_location(player.other_player())
        .map_or(max_distance, |loc| distance(loc, center));
    opp / own
}

/// The center cell, `(height / 2, width / 2)`.
#[inline]
pub fn board_center<S: GameState>(state: &S) -> Move {
    Move::new((state.height() / 2) as i32, (state.width() / 2) as i32)
}

#[inline]
fn distance(a: Move, b: Move) -> Value {
    let dr = (a.row - b.row) as Value;
    let dc = (a.col - b.col) as Value;
    (dr * dr + dc * dc).sqrt()
}
