mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, BOARD_SIZE, Board, ParseBoardError, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::{Highlight, MoveReport, TicTacToeSession, TicTacToeSessionSettings};
pub use types::{GameMode, Mark, Outcome, WinLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, evaluate, winning_line};
