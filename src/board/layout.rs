//! Compact text layouts for boards, in the spirit of a chess FEN string.
//!
//! A layout lists the rows from top to bottom separated by `/`, then a space and the side to
//! move. Cells are `.` (blank), `#` (blocked), `1` and `2` (the players' current cells).
//!
//! ```
//! use isolation_agent::board::Board;
//! use isolation_agent::core::{GameState, Move, Player};
//!
//! let board = Board::from_layout("1../.#./..2 1").unwrap();
//! assert_eq!(board.player_location(Player::Two), Some(Move::new(2, 2)));
//! assert_eq!(board.layout(), "1../.#./..2 1");
//! ```

use super::{Board, BoardError, Cell, MoveRule, MAX_DIMENSION};
use crate::core::{Move, Player};

impl Board {
    /// Builds a king-rule board from a layout string.
    pub fn from_layout(layout: &str) -> Result<Board, BoardError> {
        Board::from_layout_with_rule(layout, MoveRule::King)
    }

    /// Builds a board from a layout string using the given move rule.
    pub fn from_layout_with_rule(layout: &str, rule: MoveRule) -> Result<Board, BoardError> {
        let mut sections = layout.split_whitespace();
        let grid = sections.next().unwrap_or("");
        let turn = match sections.next() {
            Some("1") => Player::One,
            Some("2") => Player::Two,
            Some(other) => {
                return Err(BoardError::UnrecognizedTurn {
                    turn: other.to_string(),
                })
            }
            None => return Err(BoardError::MissingTurn),
        };

        let rows: Vec<&str> = grid.split('/').collect();
        let height = rows.len();
        let width = rows[0].chars().count();
        if width == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut board = Board::blank(width, height, rule);
        for (r, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row: r,
                    found,
                    expected: width,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = Move::new(r as i32, c as i32);
                let idx = board.index(cell);
                match ch {
                    '.' => {}
                    '#' => board.cells[idx] = Cell::Blocked,
                    '1' | '2' => {
                        let player = if ch == '1' { Player::One } else { Player::Two };
                        if board.locations[player as usize].is_some() {
                            return Err(BoardError::DuplicatePlayer { player });
                        }
                        board.locations[player as usize] = Some(cell);
                        board.cells[idx] = Cell::Blocked;
                    }
                    _ => return Err(BoardError::UnrecognizedCell { cell: ch }),
                }
            }
        }

        board.turn = turn;
        board.moves_played = board.cells.iter().filter(|c| **c == Cell::Blocked).count() as u16;
        Ok(board)
    }

    /// Returns the layout string of this board.
    pub fn layout(&self) -> String {
        let mut s = String::with_capacity((self.width + 1) * self.height + 2);
        for row in 0..self.height as i32 {
            if row > 0 {
                s.push('/');
            }
            for col in 0..self.width as i32 {
                s.push(self.symbol_at(Move::new(row, col)));
            }
        }
        s.push(' ');
        s.push(match self.turn {
            Player::One => '1',
            Player::Two => '2',
        });
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn parses_layout() {
        let board = Board::from_layout("1#../..../...2 2").unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.active_player(), Player::Two);
        assert_eq!(board.player_location(Player::One), Some(Move::new(0, 0)));
        assert_eq!(board.blank_cell_count(), 9);
        assert_eq!(board.moves_played(), 3);
    }

    #[test]
    fn layout_round_trips_through_play() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(2, 2)).unwrap();
        board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.layout(), "#../.1./..2 2");
        let parsed = Board::from_layout(&board.layout()).unwrap();
        assert_eq!(parsed.legal_moves(Player::Two), board.legal_moves(Player::Two));
    }

    #[test]
    fn layout_errors() {
        assert_eq!(Board::from_layout("..."), Err(BoardError::MissingTurn));
        assert_eq!(
            Board::from_layout("... 3"),
            Err(BoardError::UnrecognizedTurn {
                turn: "3".to_string()
            })
        );
        assert_eq!(
            Board::from_layout(".../.. 1"),
            Err(BoardError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        );
        assert_eq!(
            Board::from_layout("..x 1"),
            Err(BoardError::UnrecognizedCell { cell: 'x' })
        );
        assert_eq!(
            Board::from_layout("1.1 1"),
            Err(BoardError::DuplicatePlayer {
                player: Player::One
            })
        );
    }
}
