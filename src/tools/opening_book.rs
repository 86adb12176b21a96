//! A tiny rule-based opening book, consulted before any search happens.

use super::eval::board_center;
use crate::core::{GameState, Move, Player};

use log::debug;

/// A single fixed rule of the book.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BookRule {
    /// On a player's first move, take the center cell if it is legal.
    OccupyCenter,
    /// On odd x odd boards, player one answers with the opponent's cell mirrored through the
    /// center, when that cell is a legal move.
    MirrorOpponent,
}

impl BookRule {
    /// Returns the move this rule suggests for `player`, if any.
    pub fn suggest<S: GameState>(self, state: &S, player: Player) -> Option<Move> {
        match self {
            BookRule::OccupyCenter => occupy_center(state, player),
            BookRule::MirrorOpponent => mirror_opponent(state, player),
        }
    }
}

/// An ordered list of [`BookRule`]s. The first rule producing a move wins.
///
/// ```
/// use isolation_agent::board::Board;
/// use isolation_agent::core::{Move, Player};
/// use isolation_agent::tools::opening_book::OpeningBook;
///
/// let board = Board::new(7, 7).unwrap();
/// let book = OpeningBook::default();
/// assert_eq!(book.move_for(&board, Player::One), Some(Move::new(3, 3)));
/// ```
///
/// [`BookRule`]: enum.BookRule.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpeningBook {
    rules: Vec<BookRule>,
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook {
            rules: vec![BookRule::OccupyCenter],
        }
    }
}

impl OpeningBook {
    /// Creates a book from an ordered list of rules.
    pub fn new(rules: Vec<BookRule>) -> Self {
        OpeningBook { rules }
    }

    /// Returns the rules in the order they are consulted.
    pub fn rules(&self) -> &[BookRule] {
        &self.rules
    }

    /// Returns the book move for `player` in `state`, if any rule applies.
    pub fn move_for<S: GameState>(&self, state: &S, player: Player) -> Option<Move> {
        for rule in self.rules.iter() {
            if let Some(mov) = rule.suggest(state, player) {
                debug!("opening book: {:?} suggests {}", rule, mov);
                return Some(mov);
            }
        }
        None
    }
}

fn occupy_center<S: GameState>(state: &S, player: Player) -> Option<Move> {
    let area = state.width() * state.height();
    let blanks = state.blank_cell_count();
    let first_move = (blanks == area && state.is_player_one(player))
        || (blanks + 1 == area && state.is_player_two(player));
    if !first_move {
        return None;
    }
    let center = board_center(state);
    if state.legal_moves(player).contains(&center) {
        Some(center)
    } else {
        None
    }
}

fn mirror_opponent<S: GameState>(state: &S, player: Player) -> Option<Move> {
    if state.width() % 2 == 0 || state.height() % 2 == 0 || !state.is_player_one(player) {
        return None;
    }
    let opp = state.player_location(player.other_player())?;
    let reflected = Move::new(
        state.height() as i32 - 1 - opp.row,
        state.width() as i32 - 1 - opp.col,
    );
    if state.legal_moves(player).contains(&reflected) {
        Some(reflected)
    } else {
        None
    }
}
