use tictactoe_common::games::tictactoe::{
    BOARD_SIDE, GameMode, Mark, Outcome, TicTacToeSession,
};

/// Draws the grid. Empty cells show their index, highlighted cells are
/// wrapped in brackets.
pub fn render_board(session: &TicTacToeSession) -> String {
    let board = session.state().board();
    let highlight = session.highlight();

    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let index = row * BOARD_SIDE + col;
                    let symbol = match mark {
                        Mark::Empty => index.to_string(),
                        other => other.to_string(),
                    };
                    if highlight.contains(index) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Win(mark) => Some(format!("Player {} has won!", mark)),
        Outcome::Draw => Some("Game ended in a draw!".to_string()),
    }
}

pub fn status_line(session: &TicTacToeSession) -> String {
    if let Some(message) = outcome_message(session.outcome()) {
        return format!("{} Type 'reset' to play again.", message);
    }

    let mark = session.state().current_mark();
    match session.mode() {
        GameMode::PlayerVsPlayer => format!("Player {} to move.", mark),
        GameMode::PlayerVsComputer => format!("Your move ({}).", mark),
    }
}
