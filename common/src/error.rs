use std::fmt;

use thiserror::Error;

use crate::games::tictactoe::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    CellOccupied,
    EmptyMark,
    GameOver,
    NotYourTurn,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfBounds => "position out of bounds",
            InvalidMoveReason::CellOccupied => "cell is already marked",
            InvalidMoveReason::EmptyMark => "cannot place an empty mark",
            InvalidMoveReason::GameOver => "game is already over",
            InvalidMoveReason::NotYourTurn => "not your turn",
        };
        write!(f, "{}", text)
    }
}

/// Contract violations reported by the engine. Callers are expected to
/// filter input before it reaches the board, so these indicate a bug upstream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move at cell {index}: {reason}")]
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },

    #[error("no legal move: board is full or the game is over")]
    NoLegalMove,

    #[error("computer mark must be X or O, got {0}")]
    InvalidComputerMark(Mark),
}

impl GameError {
    pub fn invalid_move(index: usize, reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove { index, reason }
    }
}
