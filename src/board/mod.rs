//! This module contains [`Board`], the object representing the current state of an Isolation
//! game. All modifications to the board are done through this object, as well as gathering
//! information about the current state of the game.
//!
//! Isolation is played on a `width` x `height` grid. Each turn the active player moves its
//! piece to a blank cell reachable under the board's [`MoveRule`]; the cell it occupies stays
//! blocked for the rest of the game. On its first turn a player may drop onto any blank cell.
//! A player with no legal move on its turn loses.
//!
//! [`Board`]: struct.Board.html
//! [`MoveRule`]: enum.MoveRule.html

pub mod layout;
pub mod rand_board;

pub use self::rand_board::RandBoard;

use crate::core::score::{Value, INFINITE, NEG_INFINITE, ZERO};
use crate::core::{GameState, Move, Player};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest supported width or height.
pub const MAX_DIMENSION: usize = 64;

/// Number of players in a game.
pub const PLAYER_CNT: usize = 2;

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Represents possible errors encountered while building or playing on a `Board`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions: {width}x{height}, each side must be within 1..={max}", max = MAX_DIMENSION)]
    InvalidDimensions { width: usize, height: usize },
    #[error("unrecognized move rule: '{name}', expected 'king' or 'knight'")]
    UnrecognizedRule { name: String },
    #[error("layout is missing the side to move")]
    MissingTurn,
    #[error("invalid turn: '{turn}', expected '1' or '2'")]
    UnrecognizedTurn { turn: String },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unrecognized cell: '{cell}'")]
    UnrecognizedCell { cell: char },
    #[error("{player} is placed more than once")]
    DuplicatePlayer { player: Player },
    #[error("illegal move {mov} for {player}")]
    IllegalMove { mov: Move, player: Player },
}

/// How a placed piece may move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MoveRule {
    /// One step in any of the eight directions.
    #[default]
    King,
    /// An L-shaped chess knight jump.
    Knight,
}

impl MoveRule {
    /// Returns the `(row, col)` offsets reachable from a cell, in generation order.
    #[inline]
    pub fn offsets(self) -> &'static [(i32, i32); 8] {
        match self {
            MoveRule::King => &KING_OFFSETS,
            MoveRule::Knight => &KNIGHT_OFFSETS,
        }
    }
}

impl FromStr for MoveRule {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "king" => Ok(MoveRule::King),
            "knight" => Ok(MoveRule::Knight),
            _ => Err(BoardError::UnrecognizedRule { name: s.to_string() }),
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Blocked,
}

/// Represents an Isolation board.
///
/// `Board` is cheap to clone, and [`forecast_move`] relies on that: every forecast is a fresh
/// copy, so the search never needs to undo a move.
///
/// # Examples
///
/// ```
/// use isolation_agent::board::Board;
/// use isolation_agent::core::{GameState, Move, Player};
///
/// let mut board = Board::new(5, 5).unwrap();
/// assert_eq!(board.legal_moves(Player::One).len(), 25);
///
/// board.apply_move(Move::new(2, 2)).unwrap();
/// assert_eq!(board.active_player(), Player::Two);
/// assert_eq!(board.blank_cell_count(), 24);
/// ```
///
/// [`forecast_move`]: ../core/trait.GameState.html#tymethod.forecast_move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    locations: [Option<Move>; PLAYER_CNT],
    turn: Player,
    moves_played: u16,
    rule: MoveRule,
}

impl Default for Board {
    /// A blank 7x7 board using the king move rule.
    fn default() -> Self {
        Board::blank(7, 7, MoveRule::King)
    }
}

impl Board {
    /// Creates a blank board using the king move rule.
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        Board::with_rule(width, height, MoveRule::King)
    }

    /// Creates a blank board using the given move rule.
    pub fn with_rule(width: usize, height: usize, rule: MoveRule) -> Result<Board, BoardError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board::blank(width, height, rule))
    }

    fn blank(width: usize, height: usize, rule: MoveRule) -> Board {
        Board {
            width,
            height,
            cells: vec![Cell::Blank; width * height],
            locations: [None; PLAYER_CNT],
            turn: Player::One,
            moves_played: 0,
            rule,
        }
    }

    /// Creates a `RandBoard` (Random Board Generator) for generation of `Board`s with random
    /// positions. See the `RandBoard` structure for more information.
    pub fn random() -> RandBoard {
        RandBoard::default()
    }

    /// Returns the player whose turn it is.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the move rule of this board.
    #[inline(always)]
    pub fn rule(&self) -> MoveRule {
        self.rule
    }

    /// Returns the number of moves played so far.
    #[inline(always)]
    pub fn moves_played(&self) -> u16 {
        self.moves_played
    }

    /// Returns if the cell is on the board.
    #[inline]
    pub fn in_bounds(&self, cell: Move) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    /// Returns the state of a cell, or `None` if it is off the board.
    #[inline]
    pub fn cell(&self, cell: Move) -> Option<Cell> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// Returns if the cell is on the board and blank.
    #[inline]
    pub fn is_blank(&self, cell: Move) -> bool {
        self.cell(cell) == Some(Cell::Blank)
    }

    /// Returns every blank cell in row-major order.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut blanks = Vec::with_capacity(self.cells.len());
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Move::new(row, col);
                if self.is_blank(cell) {
                    blanks.push(cell);
                }
            }
        }
        blanks
    }

    /// Generates the moves `player` could make, regardless of whose turn it is.
    pub fn generate_moves(&self, player: Player) -> Vec<Move> {
        let from = match self.locations[player as usize] {
            Some(loc) => loc,
            None => return self.blank_cells(),
        };
        self.rule
            .offsets()
            .iter()
            .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
            .filter(|&to| self.is_blank(to))
            .collect()
    }

    /// Applies a move for the active player, checking its legality.
    pub fn apply_move(&mut self, mov: Move) -> Result<(), BoardError> {
        if !self.generate_moves(self.turn).contains(&mov) {
            return Err(BoardError::IllegalMove {
                mov,
                player: self.turn,
            });
        }
        self.apply_unchecked(mov);
        Ok(())
    }

    fn apply_unchecked(&mut self, mov: Move) {
        let idx = self.index(mov);
        self.cells[idx] = Cell::Blocked;
        self.locations[self.turn as usize] = Some(mov);
        self.turn = self.turn.other_player();
        self.moves_played += 1;
    }

    /// Returns if `player` has won, i.e. it is the opponent's turn and the opponent is stuck.
    pub fn is_winner(&self, player: Player) -> bool {
        self.turn == player.other_player() && self.generate_moves(self.turn).is_empty()
    }

    /// Returns if `player` has lost, i.e. it is `player`'s turn and it is stuck.
    pub fn is_loser(&self, player: Player) -> bool {
        self.turn == player && self.generate_moves(player).is_empty()
    }

    /// Returns if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.generate_moves(self.turn).is_empty()
    }

    /// Returns `+inf` if `player` has won, `-inf` if it has lost, and zero otherwise.
    pub fn utility(&self, player: Player) -> Value {
        if self.is_winner(player) {
            INFINITE
        } else if self.is_loser(player) {
            NEG_INFINITE
        } else {
            ZERO
        }
    }

    #[inline(always)]
    fn index(&self, cell: Move) -> usize {
        cell.row as usize * self.width + cell.col as usize
    }

    fn symbol_at(&self, cell: Move) -> char {
        if self.locations[Player::One as usize] == Some(cell) {
            '1'
        } else if self.locations[Player::Two as usize] == Some(cell) {
            '2'
        } else if self.is_blank(cell) {
            '.'
        } else {
            '#'
        }
    }
}

impl GameState for Board {
    #[inline(always)]
    fn active_player(&self) -> Player {
        self.turn
    }

    #[inline]
    fn legal_moves(&self, player: Player) -> Vec<Move> {
        self.generate_moves(player)
    }

    fn forecast_move(&self, mov: Move) -> Self {
        debug_assert!(self.is_blank(mov), "forecast of move {} onto a filled cell", mov);
        let mut next = self.clone();
        next.apply_unchecked(mov);
        next
    }

    #[inline(always)]
    fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player as usize]
    }

    fn blank_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Blank).count()
    }

    #[inline(always)]
    fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> usize {
        self.height
    }

    fn is_move_legal(&self, mov: Move) -> bool {
        self.generate_moves(self.turn).contains(&mov)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height as i32 {
            write!(f, "|")?;
            for col in 0..self.width as i32 {
                write!(f, " {}", self.symbol_at(Move::new(row, col)))?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "{} to move", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert!(Board::new(0, 3).is_err());
        assert!(Board::new(3, MAX_DIMENSION + 1).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn first_move_is_anywhere() {
        let board = Board::new(3, 4).unwrap();
        let moves = board.legal_moves(Player::One);
        assert_eq!(moves.len(), 12);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[11], Move::new(3, 2));
    }

    #[test]
    fn king_moves_from_center_and_corner() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.legal_moves(Player::One).len(), 8);

        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.legal_moves(Player::One).len(), 3);
    }

    #[test]
    fn knight_moves() {
        let mut board = Board::with_rule(5, 5, MoveRule::Knight).unwrap();
        board.apply_move(Move::new(2, 2)).unwrap();
        assert_eq!(board.legal_moves(Player::One).len(), 8);
        board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.legal_moves(Player::Two).len(), 2);
    }

    #[test]
    fn forecast_leaves_original_untouched() {
        let board = Board::new(4, 4).unwrap();
        let next = board.forecast_move(Move::new(1, 2));
        assert_eq!(board.blank_cell_count(), 16);
        assert_eq!(board.player_location(Player::One), None);
        assert_eq!(next.blank_cell_count(), 15);
        assert_eq!(next.player_location(Player::One), Some(Move::new(1, 2)));
        assert_eq!(next.active_player(), Player::Two);
        assert_eq!(next.moves_played(), 1);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        let err = board.apply_move(Move::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            BoardError::IllegalMove {
                mov: Move::new(0, 0),
                player: Player::Two
            }
        );
        assert!(board.apply_move(Move::new(5, 5)).is_err());
    }

    #[test]
    fn winner_and_loser() {
        let mut board = Board::new(2, 1).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(0, 1)).unwrap();
        assert!(board.is_loser(Player::One));
        assert!(board.is_winner(Player::Two));
        assert_eq!(board.utility(Player::One), NEG_INFINITE);
        assert_eq!(board.utility(Player::Two), INFINITE);
    }

    #[test]
    fn move_rule_from_str() {
        assert_eq!("King".parse::<MoveRule>().unwrap(), MoveRule::King);
        assert_eq!("knight".parse::<MoveRule>().unwrap(), MoveRule::Knight);
        assert!("queen".parse::<MoveRule>().is_err());
    }
}
