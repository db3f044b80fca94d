use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{GameError, InvalidMoveReason};
use super::types::Mark;
use super::win_detector::evaluate;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// Row-major 3x3 grid: indices 0..=2 are the top row, 6..=8 the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Side to move, derived from the marks already placed. X always opens.
    pub fn current_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Places `mark` at `index`. The board is left untouched on error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if index >= BOARD_SIZE {
            return Err(GameError::invalid_move(index, InvalidMoveReason::OutOfBounds));
        }
        if mark == Mark::Empty {
            return Err(GameError::invalid_move(index, InvalidMoveReason::EmptyMark));
        }
        if evaluate(self).is_terminal() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::GameOver));
        }
        if self.cells[index] != Mark::Empty {
            return Err(GameError::invalid_move(index, InvalidMoveReason::CellOccupied));
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Copy of this board with `mark` written at `index`, no rule checks.
    /// Callers must pass an empty in-bounds cell.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty) && !evaluate(board).is_terminal()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {0}")]
    WrongLength(usize),

    #[error("invalid cell symbol '{0}'")]
    InvalidSymbol(char),
}

/// Parses 9 cell symbols (`X`, `O`, and `.`, `_` or `-` for empty).
/// Whitespace and `|` separators are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if symbols.len() != BOARD_SIZE {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut cells = [Mark::Empty; BOARD_SIZE];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = Mark::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol(symbol))?;
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                write!(f, "|")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
