//! A time-bounded game-playing agent for Isolation.
//!
//! Isolation is played by two players on a rectangular grid. Each turn the side to move jumps
//! to a blank cell reachable under the board's move rule, and the cell it leaves behind is
//! blocked for good. The first player left without a legal move loses.
//!
//! This crate is separated into a few parts:
//!
//! - [`core`]: players, moves, scores, and the [`GameState`] trait the search is written
//!   against.
//! - [`board`]: a concrete Isolation [`Board`], with king or knight moves.
//! - [`tools`]: heuristics, the turn timer, and the opening book.
//! - [`bots`]: minimax, alpha-beta, and iterative deepening under a cooperative time guard.
//! - [`agent`]: the configured [`Agent`] answering one `choose_move` per turn.
//!
//! # Usage
//!
//! ```
//! use isolation_agent::{Agent, AgentConfig, Board};
//! use isolation_agent::core::GameState;
//! use isolation_agent::tools::timer::Timer;
//!
//! let agent = Agent::new(AgentConfig::default()).unwrap();
//! let board = Board::new(7, 7).unwrap();
//! let timer = Timer::new(100);
//!
//! let mov = agent.choose_move(&board, &board.active_moves(), timer.provider());
//! assert!(board.is_move_legal(mov));
//! ```
//!
//! The agent never overruns its turn. Each search node checks the remaining time first and
//! the whole search unwinds once it falls below the configured threshold, handing back the
//! deepest completed answer, or `(-1, -1)` when even depth 1 did not finish.
//!
//! [`core`]: core/index.html
//! [`board`]: board/index.html
//! [`tools`]: tools/index.html
//! [`bots`]: bots/index.html
//! [`agent`]: agent/index.html
//! [`GameState`]: core/trait.GameState.html
//! [`Board`]: board/struct.Board.html
//! [`Agent`]: agent/struct.Agent.html

pub mod agent;
pub mod board;
pub mod bot_prelude;
pub mod bots;
pub mod core;
pub mod tools;

#[doc(no_inline)]
pub use crate::agent::{Agent, AgentConfig, ConfigError, Decision};
#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::{GameState, Move, Player, NO_MOVE};
