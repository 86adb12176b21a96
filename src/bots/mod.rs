//! The search engine: depth-limited minimax and alpha-beta, the cooperative [`TimeGuard`]
//! they both consult, and the iterative-deepening driver on top of them.
//!
//! Every recursive call starts by asking the guard whether there is still time. When there is
//! not, the call returns `Err(Timeout)` and `?` unwinds the whole search without any further
//! node work. Only the driver in [`iterative`] catches it.
//!
//! [`TimeGuard`]: struct.TimeGuard.html
//! [`iterative`]: iterative/index.html

pub mod alphabeta;
pub mod iterative;
pub mod minimax;

use crate::core::score::{ScoringMove, Value, INFINITE, NEG_INFINITE};
use crate::core::{GameState, Move, Player, NO_MOVE};
use crate::tools::eval::Evaluator;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;

/// Signal raised when the remaining time drops below the safety threshold.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("search aborted with {remaining:.2} ms left (threshold {threshold} ms)")]
pub struct Timeout {
    pub remaining: f64,
    pub threshold: f64,
}

/// Cooperative cancellation: reads a remaining-time provider against a fixed threshold.
pub struct TimeGuard<F> {
    time_left: F,
    threshold: f64,
}

impl<F: Fn() -> f64> TimeGuard<F> {
    /// Creates a guard that trips once `time_left()` reports less than `threshold` ms.
    pub fn new(time_left: F, threshold: f64) -> Self {
        TimeGuard {
            time_left,
            threshold,
        }
    }

    /// Returns `Err(Timeout)` if the search must stop now.
    #[inline]
    pub fn check(&self) -> Result<(), Timeout> {
        let remaining = (self.time_left)();
        if remaining < self.threshold {
            Err(Timeout {
                remaining,
                threshold: self.threshold,
            })
        } else {
            Ok(())
        }
    }
}

/// Which recursive search the agent runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    MiniMax,
    AlphaBeta,
}

impl SearchMethod {
    /// The configuration name of this method.
    pub fn name(self) -> &'static str {
        match self {
            SearchMethod::MiniMax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }

    /// Searches `state` to `depth` plies from a maximizing root with a full window.
    pub fn search<S, E, F>(
        self,
        ctx: &mut SearchContext<E, F>,
        state: &S,
        depth: u16,
    ) -> Result<ScoringMove, Timeout>
    where
        S: GameState,
        E: Evaluator<S>,
        F: Fn() -> f64,
    {
        match self {
            SearchMethod::MiniMax => minimax::minimax(ctx, state, depth, true),
            SearchMethod::AlphaBeta => {
                alphabeta::alpha_beta(ctx, state, depth, NEG_INFINITE, INFINITE, true)
            }
        }
    }
}

impl FromStr for SearchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "minimax" => Ok(SearchMethod::MiniMax),
            "alphabeta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Everything a single top-level search shares across its recursion: the evaluator, the
/// player whose point of view is maximized, the time guard, and a visited-node counter.
pub struct SearchContext<'a, E, F> {
    evaluator: &'a E,
    guard: TimeGuard<F>,
    player: Player,
    nodes: u64,
}

impl<'a, E, F: Fn() -> f64> SearchContext<'a, E, F> {
    pub fn new(evaluator: &'a E, player: Player, guard: TimeGuard<F>) -> Self {
        SearchContext {
            evaluator,
            guard,
            player,
            nodes: 0,
        }
    }

    /// The player the search maximizes for.
    #[inline(always)]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Number of nodes entered so far, across every search run with this context.
    #[inline(always)]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    // First thing every node does.
    #[inline]
    fn enter(&mut self) -> Result<(), Timeout> {
        self.guard.check()?;
        self.nodes += 1;
        Ok(())
    }

    #[inline]
    fn evaluate<S>(&self, state: &S) -> Value
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.evaluator.score(state, self.player)
    }

    // The side to move is stuck.
    #[inline]
    fn stuck<S>(&self, state: &S) -> ScoringMove
    where
        S: GameState,
        E: Evaluator<S>,
    {
        ScoringMove::new(NO_MOVE, self.evaluate(state))
    }

    // Depth exhausted. The move is a placeholder: the searching player's own cell.
    #[inline]
    fn cutoff<S>(&self, state: &S) -> ScoringMove
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let here = state.player_location(self.player).unwrap_or(NO_MOVE);
        ScoringMove::new(here, self.evaluate(state))
    }
}

/// Player that picks a uniformly random legal move. The fastest, yet dumbest, player we have
/// to offer.
pub struct RandomPlayer {
    rng: StdRng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer::default()
    }

    /// A reproducible random player.
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one of `legal_moves`, or `NO_MOVE` if there are none.
    pub fn choose_move(&mut self, legal_moves: &[Move]) -> Move {
        legal_moves.choose(&mut self.rng).copied().unwrap_or(NO_MOVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn guard_trips_below_threshold() {
        let left = Cell::new(50.0);
        let guard = TimeGuard::new(|| left.get(), 10.0);
        assert!(guard.check().is_ok());
        left.set(10.0);
        assert!(guard.check().is_ok());
        left.set(9.5);
        assert_eq!(
            guard.check(),
            Err(Timeout {
                remaining: 9.5,
                threshold: 10.0
            })
        );
    }

    #[test]
    fn method_names() {
        assert_eq!("minimax".parse::<SearchMethod>(), Ok(SearchMethod::MiniMax));
        assert_eq!("alphabeta".parse::<SearchMethod>(), Ok(SearchMethod::AlphaBeta));
        assert!("negamax".parse::<SearchMethod>().is_err());
        assert_eq!(SearchMethod::AlphaBeta.to_string(), "alphabeta");
    }

    #[test]
    fn random_player() {
        let mut random = RandomPlayer::seeded(9);
        assert_eq!(random.choose_move(&[]), NO_MOVE);
        let moves = [Move::new(0, 1), Move::new(2, 2)];
        for _ in 0..10 {
            assert!(moves.contains(&random.choose_move(&moves)));
        }
    }
}
