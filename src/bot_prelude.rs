//! Easy importing of all available players and searches.

pub use crate::agent::{Agent, AgentConfig, Decision};
pub use crate::bots::iterative::{fixed_depth, iterative_deepening, SearchReport};
pub use crate::bots::{RandomPlayer, SearchContext, SearchMethod, TimeGuard, Timeout};
pub use crate::tools::eval::{Evaluator, Heuristic};
pub use crate::tools::opening_book::{BookRule, OpeningBook};
