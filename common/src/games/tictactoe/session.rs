use serde::{Deserialize, Serialize};

use crate::error::{GameError, InvalidMoveReason};
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, Mark, Outcome, WinLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub computer_mark: Mark,
}

impl TicTacToeSessionSettings {
    /// Computer mode needs a real mark for the computer to play.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.mode == GameMode::PlayerVsComputer && self.computer_mark.opponent().is_none() {
            return Err(GameError::InvalidComputerMark(self.computer_mark));
        }
        Ok(())
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            computer_mark: Mark::O,
        }
    }
}

/// Cells the front end should emphasise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    LastMove(usize),
    WinningLine(WinLine),
}

impl Highlight {
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Highlight::None => false,
            Highlight::LastMove(cell) => *cell == index,
            Highlight::WinningLine(line) => line.contains(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub outcome: Outcome,
}

/// One game between a human and either another human or the computer.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
    last_computer_move: Option<usize>,
}

impl TicTacToeSession {
    /// Starts a game. If the computer owns X it has already opened when this
    /// returns.
    pub fn new(settings: TicTacToeSessionSettings) -> Result<Self, GameError> {
        settings.validate()?;
        let mut session = Self {
            settings,
            state: TicTacToeGameState::new(),
            last_computer_move: None,
        };
        session.start()?;
        Ok(session)
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::PlayerVsComputer
            && self.state.is_active()
            && self.state.current_mark() == self.settings.computer_mark
    }

    pub fn handle_human_move(&mut self, index: usize) -> Result<MoveReport, GameError> {
        if self.is_computer_turn() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::NotYourTurn));
        }

        let mark = self.state.current_mark();
        let mut outcome = self.state.play(index)?;
        log!("{} played cell {}", mark, index);

        let computer_move = self.play_computer_turn()?;
        if computer_move.is_some() {
            outcome = self.state.outcome();
        }

        if outcome.is_terminal() {
            log!("Game over: {:?}", outcome);
        }

        Ok(MoveReport {
            human_move: index,
            computer_move,
            outcome,
        })
    }

    /// Clears the board. Returns the computer's opening move, if any.
    pub fn reset(&mut self) -> Result<Option<usize>, GameError> {
        self.state.reset();
        self.last_computer_move = None;
        log!("Game reset ({})", self.settings.mode);
        self.start()
    }

    /// Switches mode and starts a new game. Rejected settings leave the
    /// session as it was.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<Option<usize>, GameError> {
        let settings = TicTacToeSessionSettings {
            mode,
            ..self.settings
        };
        settings.validate()?;
        self.settings = settings;
        self.reset()
    }

    pub fn highlight(&self) -> Highlight {
        if let Some(line) = self.state.winning_line() {
            return Highlight::WinningLine(line);
        }

        match (self.settings.mode, self.last_computer_move) {
            (GameMode::PlayerVsComputer, Some(index)) => Highlight::LastMove(index),
            _ => Highlight::None,
        }
    }

    fn start(&mut self) -> Result<Option<usize>, GameError> {
        self.play_computer_turn()
    }

    fn play_computer_turn(&mut self) -> Result<Option<usize>, GameError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }

        let input = BotInput::from_game_state(&self.state);
        let mark = input.current_mark;
        let index = calculate_move(&input)?;
        self.state.apply_move(index, mark)?;
        self.last_computer_move = Some(index);
        log!("Computer ({}) played cell {}", mark, index);
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::Board;

    fn computer_settings(computer_mark: Mark) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: GameMode::PlayerVsComputer,
            computer_mark,
        }
    }

    #[test]
    fn test_player_vs_player_alternates_humans() {
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        let report = session.handle_human_move(4).unwrap();
        assert_eq!(report.computer_move, None);
        assert_eq!(session.state().current_mark(), Mark::O);

        let report = session.handle_human_move(0).unwrap();
        assert_eq!(report.computer_move, None);
        assert_eq!(session.state().board().get(0), Some(Mark::O));
        assert_eq!(session.highlight(), Highlight::None);
    }

    #[test]
    fn test_computer_answers_human_move() {
        let mut session = TicTacToeSession::new(computer_settings(Mark::O)).unwrap();
        let report = session.handle_human_move(0).unwrap();
        assert_eq!(report.human_move, 0);
        assert_eq!(report.computer_move, Some(4));
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(session.state().current_mark(), Mark::X);
        assert_eq!(session.highlight(), Highlight::LastMove(4));
    }

    #[test]
    fn test_computer_opens_when_it_owns_x() {
        let mut session = TicTacToeSession::new(computer_settings(Mark::X)).unwrap();
        assert_eq!(session.highlight(), Highlight::LastMove(0));
        assert_eq!(session.state().board().count(Mark::X), 1);
        assert_eq!(session.state().current_mark(), Mark::O);

        assert_eq!(session.reset(), Ok(Some(0)));
        assert_eq!(session.state().board().count(Mark::X), 1);
    }

    #[test]
    fn test_computer_mode_requires_a_real_mark() {
        let result = TicTacToeSession::new(computer_settings(Mark::Empty));
        assert_eq!(result.err(), Some(GameError::InvalidComputerMark(Mark::Empty)));

        let pvp = TicTacToeSessionSettings {
            mode: GameMode::PlayerVsPlayer,
            computer_mark: Mark::Empty,
        };
        let mut session = TicTacToeSession::new(pvp).unwrap();
        session.handle_human_move(4).unwrap();
        assert_eq!(
            session.set_mode(GameMode::PlayerVsComputer),
            Err(GameError::InvalidComputerMark(Mark::Empty))
        );
        assert_eq!(session.mode(), GameMode::PlayerVsPlayer);
        assert_eq!(session.state().board().get(4), Some(Mark::X));
    }

    #[test]
    fn test_rejected_move_leaves_session_untouched() {
        let mut session = TicTacToeSession::new(computer_settings(Mark::O)).unwrap();
        session.handle_human_move(0).unwrap();
        let before = *session.state().board();

        assert_eq!(
            session.handle_human_move(4),
            Err(GameError::invalid_move(4, InvalidMoveReason::CellOccupied))
        );
        assert_eq!(session.state().board(), &before);
    }

    #[test]
    fn test_human_cannot_beat_computer() {
        // Greedy human: always takes the lowest free cell.
        let mut session = TicTacToeSession::new(computer_settings(Mark::O)).unwrap();
        while session.outcome() == Outcome::InProgress {
            let index = session.state().available_moves()[0];
            session.handle_human_move(index).unwrap();
        }
        assert_ne!(session.outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        for index in [0, 3, 1, 4, 2] {
            session.handle_human_move(index).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Win(Mark::X));
        assert_eq!(session.highlight(), Highlight::WinningLine(WinLine([0, 1, 2])));
        assert!(session.highlight().contains(1));
        assert!(!session.highlight().contains(3));
        assert_eq!(
            session.handle_human_move(5),
            Err(GameError::invalid_move(5, InvalidMoveReason::GameOver))
        );
    }

    #[test]
    fn test_reset_after_terminal_game() {
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        for index in [0, 3, 1, 4, 2] {
            session.handle_human_move(index).unwrap();
        }
        assert!(session.outcome().is_terminal());

        assert_eq!(session.reset(), Ok(None));
        assert_eq!(session.state().board(), &Board::new());
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.state().current_mark(), Mark::X);
        assert_eq!(session.highlight(), Highlight::None);
    }

    #[test]
    fn test_mode_change_resets_board() {
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        session.handle_human_move(4).unwrap();

        assert_eq!(session.set_mode(GameMode::PlayerVsComputer), Ok(None));
        assert_eq!(session.mode(), GameMode::PlayerVsComputer);
        assert_eq!(session.state().board(), &Board::new());

        let report = session.handle_human_move(4).unwrap();
        assert!(report.computer_move.is_some());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        let second = TicTacToeSession::new(TicTacToeSessionSettings::default()).unwrap();
        first.handle_human_move(8).unwrap();
        assert_eq!(second.state().board(), &Board::new());
    }
}
