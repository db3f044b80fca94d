mod config;
mod tictactoe_config;

pub use config::load_config;
pub use tictactoe_config::TicTacToeConfig;
