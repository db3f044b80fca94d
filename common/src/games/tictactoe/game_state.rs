use crate::error::{GameError, InvalidMoveReason};
use super::board::{Board, get_available_moves};
use super::types::{Mark, Outcome, WinLine};
use super::win_detector::{evaluate, winning_line};

/// Authoritative state of one game. Owns its board exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.board.current_mark()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn is_active(&self) -> bool {
        !self.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(&self.board)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        if self.is_active() {
            get_available_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Places `mark` at `index` if it is that mark's turn.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Outcome, GameError> {
        if mark != Mark::Empty && mark != self.current_mark() && self.is_active() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::NotYourTurn));
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        Ok(self.outcome())
    }

    /// Places the mark of the side to move.
    pub fn play(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.apply_move(index, self.current_mark())
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_marks() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.play(4), Ok(Outcome::InProgress));
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.play(0), Ok(Outcome::InProgress));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().get(4), Some(Mark::X));
        assert_eq!(state.board().get(0), Some(Mark::O));
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_apply_move_rejects_wrong_mark() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(
            state.apply_move(0, Mark::O),
            Err(GameError::invalid_move(0, InvalidMoveReason::NotYourTurn))
        );
        assert_eq!(state, TicTacToeGameState::new());
    }

    #[test]
    fn test_game_ends_on_win_and_rejects_further_moves() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4] {
            state.play(index).unwrap();
        }
        assert_eq!(state.play(2), Ok(Outcome::Win(Mark::X)));
        assert_eq!(state.winning_line(), Some(WinLine([0, 1, 2])));
        assert!(!state.is_active());
        assert!(state.available_moves().is_empty());

        let before = state.clone();
        assert_eq!(
            state.play(5),
            Err(GameError::invalid_move(5, InvalidMoveReason::GameOver))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = TicTacToeGameState::new();
        state.play(4).unwrap();
        assert_eq!(
            state.play(4),
            Err(GameError::invalid_move(4, InvalidMoveReason::CellOccupied))
        );
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_draw_game() {
        let mut state = TicTacToeGameState::new();
        let mut outcome = Outcome::InProgress;
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            outcome = state.play(index).unwrap();
        }
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset_after_terminal_game() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4, 2] {
            state.play(index).unwrap();
        }
        assert!(state.outcome().is_terminal());

        state.reset();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), None);
    }
}
