//! Iterative deepening on top of the fixed-depth searches.
//!
//! The driver searches depth 1, then 2, then 3 and so on, remembering the result of the last
//! iteration that finished. A [`Timeout`] raised anywhere inside an iteration throws that
//! iteration away; the move handed back always comes from a completed depth.
//!
//! [`Timeout`]: ../struct.Timeout.html

use super::{SearchContext, SearchMethod};
use crate::core::score::{Value, NEG_INFINITE};
use crate::core::{GameState, Move, NO_MOVE};
use crate::tools::eval::Evaluator;

use log::{debug, trace};

/// Outcome of a search run by the agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchReport {
    /// Move of the deepest completed iteration, or `NO_MOVE`.
    pub best_move: Move,
    /// Score of that iteration; `-inf` when none completed.
    pub score: Value,
    /// Deepest depth fully searched. Zero when nothing completed.
    pub completed_depth: u16,
    /// Nodes entered, including those of an abandoned iteration.
    pub nodes: u64,
    /// Whether the search was cut short by the time guard.
    pub aborted: bool,
}

impl SearchReport {
    fn empty() -> Self {
        SearchReport {
            best_move: NO_MOVE,
            score: NEG_INFINITE,
            completed_depth: 0,
            nodes: 0,
            aborted: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Deepening {
    Searching,
    Aborted,
}

/// Runs `method` at increasing depths until the time guard fires or `depth_limit` (if any) is
/// reached.
pub fn iterative_deepening<S, E, F>(
    ctx: &mut SearchContext<E, F>,
    state: &S,
    method: SearchMethod,
    depth_limit: Option<u16>,
) -> SearchReport
where
    S: GameState,
    E: Evaluator<S>,
    F: Fn() -> f64,
{
    let mut report = SearchReport::empty();
    let mut status = Deepening::Searching;
    let mut depth: u16 = 1;

    while status == Deepening::Searching {
        let before = ctx.nodes();
        match method.search(ctx, state, depth) {
            Ok(found) => {
                report.best_move = found.mov;
                report.score = found.score;
                report.completed_depth = depth;
                debug!(
                    "{} depth {} complete: {} scores {}",
                    method, depth, found.mov, found.score
                );
                trace!("depth {} visited {} nodes", depth, ctx.nodes() - before);

                let capped = depth_limit.map_or(false, |limit| depth >= limit);
                match depth.checked_add(1) {
                    Some(next) if !capped => depth = next,
                    _ => break,
                }
            }
            Err(timeout) => {
                trace!("depth {} abandoned: {}", depth, timeout);
                status = Deepening::Aborted;
            }
        }
    }

    report.aborted = status == Deepening::Aborted;
    report.nodes = ctx.nodes();
    report
}

/// A single search at `depth`. Returns `NO_MOVE` if it times out.
pub fn fixed_depth<S, E, F>(
    ctx: &mut SearchContext<E, F>,
    state: &S,
    method: SearchMethod,
    depth: u16,
) -> SearchReport
where
    S: GameState,
    E: Evaluator<S>,
    F: Fn() -> f64,
{
    let mut report = SearchReport::empty();
    match method.search(ctx, state, depth) {
        Ok(found) => {
            report.best_move = found.mov;
            report.score = found.score;
            report.completed_depth = depth;
        }
        Err(timeout) => {
            trace!("depth {} abandoned: {}", depth, timeout);
            report.aborted = true;
        }
    }
    report.nodes = ctx.nodes();
    report
}
