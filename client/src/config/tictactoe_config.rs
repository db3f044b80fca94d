use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{GameMode, Mark, TicTacToeSessionSettings};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct TicTacToeConfig {
    pub game_mode: GameMode,
    pub computer_mark: Mark,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("computer_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            game_mode: settings.mode,
            computer_mark: settings.computer_mark,
        }
    }
}

impl From<TicTacToeConfig> for TicTacToeSessionSettings {
    fn from(config: TicTacToeConfig) -> Self {
        Self {
            mode: config.game_mode,
            computer_mark: config.computer_mark,
        }
    }
}
