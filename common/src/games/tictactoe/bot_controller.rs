use crate::error::GameError;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(input: &BotInput) -> Result<usize, GameError> {
    calculate_minimax_move(&input.board, input.current_mark)
}

/// Sides of one search. The mark asking for a move is always the maximizer.
#[derive(Debug, Clone, Copy)]
struct SearchSides {
    maximizer: Mark,
    minimizer: Mark,
}

/// Best move for `bot_mark` by full-depth minimax. Quicker wins and slower
/// losses score higher; ties go to the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<usize, GameError> {
    let opponent_mark = bot_mark.opponent().ok_or(GameError::NoLegalMove)?;
    if evaluate(board) != Outcome::InProgress {
        return Err(GameError::NoLegalMove);
    }

    let sides = SearchSides {
        maximizer: bot_mark,
        minimizer: opponent_mark,
    };

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(board) {
        let child = board.with_mark(index, bot_mark);
        let score = minimax(&child, 0, false, sides);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

fn minimax(board: &Board, depth: i32, is_maximizing: bool, sides: SearchSides) -> i32 {
    match evaluate(board) {
        Outcome::Win(winner) if winner == sides.maximizer => return WIN_SCORE - depth,
        Outcome::Win(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            let child = board.with_mark(index, sides.maximizer);
            let eval = minimax(&child, depth + 1, false, sides);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            let child = board.with_mark(index, sides.minimizer);
            let eval = minimax(&child, depth + 1, true, sides);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
