use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{TicTacToeSession, is_valid_move};
use tictactoe_common::log;

use crate::board_view::{render_board, status_line};
use crate::command::{Command, HELP_TEXT, parse_command};

fn print_state<W: Write>(session: &TicTacToeSession, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", render_board(session))?;
    writeln!(output, "{}", status_line(session))?;
    output.flush()
}

/// Reads commands until `quit` or end of input. Bad input and rejected moves
/// are reported and the loop carries on.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Tic-tac-toe ({}). Type 'help' for commands.", session.mode())?;
    print_state(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            Command::Place(index) if !is_valid_move(session.state().board(), index) => {
                writeln!(output, "Cell {} is not available.", index)?;
                continue;
            }
            Command::Place(index) => session.handle_human_move(index).map(|report| {
                report
                    .computer_move
                    .map(|cell| format!("Computer played cell {}.", cell))
            }),
            Command::Reset => session.reset().map(|_| Some("New game.".to_string())),
            Command::Mode(mode) => session
                .set_mode(mode)
                .map(|_| Some(format!("Switched to {}.", mode))),
        };

        match result {
            Ok(Some(message)) => writeln!(output, "{}", message)?,
            Ok(None) => {}
            Err(err) => {
                log!("Rejected command '{}': {}", line.trim(), err);
                writeln!(output, "{}", err)?;
                continue;
            }
        }

        print_state(session, output)?;
    }

    Ok(())
}
