//! The minimax algorithm.
use super::{SearchContext, Timeout};
use crate::core::score::{ScoringMove, INFINITE, NEG_INFINITE};
use crate::core::GameState;
use crate::tools::eval::Evaluator;

/// Depth-limited minimax from the point of view of `ctx.player()`.
///
/// Returns the best score reachable from `state` within `depth` plies and the move of the
/// side to move achieving it. A stuck side to move scores `state` with `NO_MOVE`; at depth
/// zero the move is only a placeholder and the score is all the parent uses.
pub fn minimax<S, E, F>(
    ctx: &mut SearchContext<E, F>,
    state: &S,
    depth: u16,
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

    let mut best = ScoringMove::blank(if maximizing { NEG_INFINITE } else { INFINITE });
    for mov in moves {
        let returned = minimax(ctx, &state.forecast_move(mov), depth - 1, !maximizing)?;
        let improves = if maximizing {
            returned.score > best.score
        } else {
            returned.score < best.score
        };
        // The first child always replaces the sentinel, so a node with moves never answers
        // NO_MOVE even if every child is scored as a loss.
        if improves || best.mov.is_none() {
            best = ScoringMove::new(mov, returned.score);
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::bots::TimeGuard;
    use crate::core::{Move, Player, NO_MOVE};
    use crate::tools::eval::Heuristic;

    fn unlimited() -> TimeGuard<impl Fn() -> f64> {
        TimeGuard::new(|| f64::INFINITY, 10.0)
    }

    #[test]
    fn center_of_empty_three_by_three() {
        let board = Board::new(3, 3).unwrap();
        let mut ctx = SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
        let best = minimax(&mut ctx, &board, 1, true).unwrap();
        assert_eq!(best.mov, Move::new(1, 1));
        assert_eq!(best.score, 0.0);
        // Root plus one child per cell.
        assert_eq!(ctx.nodes(), 10);

        for depth in 2..=4 {
            let mut ctx =
                SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
            assert_eq!(minimax(&mut ctx, &board, depth, true).unwrap().mov, Move::new(1, 1));
        }
    }

    #[test]
    fn stuck_side_returns_no_move_without_recursing() {
        let board = Board::from_layout("1#2/### 1").unwrap();
        let mut ctx = SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
        let best = minimax(&mut ctx, &board, 4, true).unwrap();
        assert_eq!(best.mov, NO_MOVE);
        assert_eq!(best.score, 0.0);
        assert_eq!(ctx.nodes(), 1);
    }

    #[test]
    fn depth_zero_answers_own_location() {
        let board = Board::from_layout("1../.../..2 1").unwrap();
        let mut ctx = SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
        let best = minimax(&mut ctx, &board, 0, true).unwrap();
        assert_eq!(best.mov, Move::new(0, 0));
    }

    #[test]
    fn single_move_is_found_at_any_depth() {
        let board = Board::from_layout("1#../#.../...2 1").unwrap();
        for depth in 1..6 {
            let mut ctx =
                SearchContext::new(&Heuristic::MoveDifferential, Player::One, unlimited());
            let best = minimax(&mut ctx, &board, depth, true).unwrap();
            assert_eq!(best.mov, Move::new(1, 1));
        }
    }

    #[test]
    fn first_move_wins_ties_even_when_all_lose() {
        let board = Board::new(2, 2).unwrap();
        let lost = |_: &Board, _: Player| f64::NEG_INFINITY;
        let mut ctx = SearchContext::new(&lost, Player::One, unlimited());
        let best = minimax(&mut ctx, &board, 2, true).unwrap();
        assert_eq!(best.mov, Move::new(0, 0));
        assert_eq!(best.score, f64::NEG_INFINITY);
    }

    #[test]
    fn timeout_unwinds_everything() {
        let board = Board::new(3, 3).unwrap();
        let mut ctx = SearchContext::new(
            &Heuristic::MoveDifferential,
            Player::One,
            TimeGuard::new(|| 5.0, 10.0),
        );
        assert!(minimax(&mut ctx, &board, 3, true).is_err());
        assert_eq!(ctx.nodes(), 0);
    }
}
