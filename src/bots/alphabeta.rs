//! The alpha-beta algorithm.
use super::{SearchContext, Timeout};
use crate::core::score::{ScoringMove, Value, INFINITE, NEG_INFINITE};
use crate::core::GameState;
use crate::tools::eval::Evaluator;

/// Minimax with alpha-beta pruning.
///
/// `alpha` is the score the maximizing side can already guarantee and `beta` the one the
/// minimizing side can. Both are passed by value: a node only tightens its own copy, and once
/// `alpha >= beta` its remaining siblings are skipped. Called with `(-inf, +inf)` the root
/// score is exactly the minimax score.
pub fn alpha_beta<S, E, F>(
    ctx: &mut SearchContext<E, F>,
    state: &S,
    depth: u16,
    mut alpha: Value,
    mut beta: Value,
    maximizing: bool,
) -> Result<ScoringMove, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
    F: Fn() -> f64,
{
    ctx.enter()?;

    let moves = state.active_moves();
    if moves.is_empty() {
        return Ok(ctx.stuck(state));
    }

    if depth == 0 {
        return Ok(ctx.cutoff(state));
    }

    if maximizing {
        let mut best = ScoringMove::blank(NEG_INFINITE);
        for mov in moves {
            let returned = alpha_beta(ctx, &state.forecast_move(mov), depth - 1, alpha, beta, false)?;
            if returned.score > best.score || best.mov.is_none() {
                best = ScoringMove::new(mov, returned.score);
            }
            if best.score > alpha {
                alpha = best.score;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = ScoringMove::blank(INFINITE);
        for mov in moves {
            let returned = alpha_beta(ctx, &state.forecast_move(mov), depth - 1, alpha, beta, true)?;
            if returned.score < best.score || best.mov.is_none() {
                best = ScoringMove::new(mov, returned.score);
            }
            if best.score < beta {
                beta = best.score;
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::bots::minimax::minimax;
    use crate::bots::TimeGuard;
    use crate::core::{Move, Player, NO_MOVE};
    use crate::tools::eval::Heuristic;

    fn unlimited() -> TimeGuard<impl Fn() -> f64> {
        TimeGuard::new(|| f64::INFINITY, 10.0)
    }

    fn full_window<S, E, F>(ctx: &mut SearchContext<E, F>, state: &S, depth: u16) -> ScoringMove
    where
        S: GameState,
        E: Evaluator<S>,
        F: Fn() -> f64,
    {
        alpha_beta(ctx, state, depth, NEG_INFINITE, INFINITE, true).unwrap()
    }

    #[test]
    fn center_of_empty_three_by_three() {
        let board = Board::new(3, 3).unwrap();
        for depth in 1..=4 {
            let mut ctx =
                SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
            assert_eq!(full_window(&mut ctx, &board, depth).mov, Move::new(1, 1));
        }
    }

    #[test]
    fn stuck_side_returns_no_move_without_recursing() {
        let board = Board::from_layout("1#2/### 1").unwrap();
        let mut ctx = SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
        let best = full_window(&mut ctx, &board, 3);
        assert_eq!(best.mov, NO_MOVE);
        assert_eq!(ctx.nodes(), 1);
    }

    #[test]
    fn agrees_with_minimax_and_prunes() {
        let board = Board::new(4, 4).unwrap();
        for h in Heuristic::ALL.iter() {
            let mut mm = SearchContext::new(h, Player::One, unlimited());
            let mut ab = SearchContext::new(h, Player::One, unlimited());
            let expected = minimax(&mut mm, &board, 3, true).unwrap();
            let found = full_window(&mut ab, &board, 3);
            assert_eq!(found.score, expected.score, "heuristic {}", h);
            assert!(ab.nodes() < mm.nodes(), "heuristic {}", h);
        }
    }

    #[test]
    fn closed_window_cuts_after_first_child() {
        let board = Board::new(3, 3).unwrap();
        let mut ctx = SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
        let best = alpha_beta(&mut ctx, &board, 1, 0.0, 0.0, true).unwrap();
        assert_eq!(best.mov, Move::new(0, 0));
        assert_eq!(ctx.nodes(), 2);
    }

    #[test]
    fn single_move_is_found_at_any_depth() {
        let board = Board::from_layout("1#../#.../...2 1").unwrap();
        for depth in 1..6 {
            let mut ctx =
                SearchContext::new(&Heuristic::MovesAndCenter, Player::One, unlimited());
            assert_eq!(full_window(&mut ctx, &board, depth).mov, Move::new(1, 1));
        }
    }
}
