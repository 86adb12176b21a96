//! The game-playing agent: configuration, the opening book, and the search driver glued into
//! a single `choose_move` call per turn.
//!
//! # Examples
//!
//! ```
//! use isolation_agent::agent::{Agent, AgentConfig};
//! use isolation_agent::board::Board;
//! use isolation_agent::core::{GameState, Move};
//! use isolation_agent::tools::timer::Timer;
//!
//! let agent = Agent::new(AgentConfig::default().iterative(false).search_depth(1)).unwrap();
//! let board = Board::new(3, 3).unwrap();
//! let timer = Timer::new(1_000);
//!
//! let mov = agent.choose_move(&board, &board.active_moves(), timer.provider());
//! assert_eq!(mov, Move::new(1, 1));
//! ```

pub mod config;

pub use self::config::{AgentConfig, ConfigError};

use crate::bots::iterative::{fixed_depth, iterative_deepening, SearchReport};
use crate::bots::{SearchContext, TimeGuard};
use crate::core::{GameState, Move, NO_MOVE};
use crate::tools::eval::{Evaluator, Heuristic};
use crate::tools::opening_book::OpeningBook;

use log::debug;

/// How the agent arrived at its move for a turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decision {
    /// There was nothing to choose from.
    NoLegalMoves,
    /// The opening book answered without searching.
    Book(Move),
    /// A search ran; its report says how deep it got.
    Searched(SearchReport),
}

impl Decision {
    /// The move to play, `NO_MOVE` when there is none.
    pub fn best_move(&self) -> Move {
        match *self {
            Decision::NoLegalMoves => NO_MOVE,
            Decision::Book(mov) => mov,
            Decision::Searched(ref report) => report.best_move,
        }
    }
}

/// A time-bounded Isolation player.
///
/// The agent holds no state between turns apart from its configuration, so the same agent may
/// answer for any position.
pub struct Agent<E = Heuristic> {
    config: AgentConfig,
    evaluator: E,
    book: Option<OpeningBook>,
}

impl Agent<Heuristic> {
    /// Creates an agent scoring leaves with the configured heuristic.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let book = if config.opening_book {
            Some(OpeningBook::default())
        } else {
            None
        };
        Ok(Agent {
            evaluator: config.heuristic,
            config,
            book,
        })
    }
}

impl<E> Agent<E> {
    /// Replaces the evaluator, e.g. with a closure.
    pub fn with_evaluator<E2>(self, evaluator: E2) -> Agent<E2> {
        Agent {
            config: self.config,
            evaluator,
            book: self.book,
        }
    }

    /// Replaces the opening book. `None` disables it.
    pub fn with_book(mut self, book: Option<OpeningBook>) -> Self {
        self.book = book;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn book(&self) -> Option<&OpeningBook> {
        self.book.as_ref()
    }

    /// Decides on a move for the side to move in `state`.
    ///
    /// `time_left` reports the milliseconds remaining on the turn clock. Searches give up once
    /// it drops below the configured threshold, so the agent answers before the clock expires.
    pub fn decide<S, F>(&self, state: &S, legal_moves: &[Move], time_left: F) -> Decision
    where
        S: GameState,
        E: Evaluator<S>,
        F: Fn() -> f64,
    {
        if legal_moves.is_empty() {
            debug!("no legal moves");
            return Decision::NoLegalMoves;
        }

        let player = state.active_player();
        if let Some(mov) = self.book.as_ref().and_then(|book| book.move_for(state, player)) {
            return Decision::Book(mov);
        }

        let guard = TimeGuard::new(time_left, self.config.timeout_ms);
        let mut ctx = SearchContext::new(&self.evaluator, player, guard);
        let report = if self.config.iterative {
            iterative_deepening(&mut ctx, state, self.config.method, self.config.depth_limit)
        } else {
            fixed_depth(&mut ctx, state, self.config.method, self.config.search_depth)
        };
        debug!(
            "player {} plays {} (depth {}, {} nodes{})",
            player,
            report.best_move,
            report.completed_depth,
            report.nodes,
            if report.aborted { ", out of time" } else { "" }
        );
        Decision::Searched(report)
    }

    /// The move [`decide`] settles on. `(-1, -1)` means no move.
    ///
    /// [`decide`]: #method.decide
    pub fn choose_move<S, F>(&self, state: &S, legal_moves: &[Move], time_left: F) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
        F: Fn() -> f64,
    {
        self.decide(state, legal_moves, time_left).best_move()
    }
}
