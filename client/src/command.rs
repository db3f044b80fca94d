use tictactoe_common::games::tictactoe::{BOARD_SIZE, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    Mode(GameMode),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8        place your mark (cells are numbered left to right, top to bottom)
  reset      start a new game
  mode pvp   switch to player vs player
  mode pvc   switch to player vs computer
  help       show this help
  quit       exit";

pub fn parse_game_mode(value: &str) -> Option<GameMode> {
    match value.to_ascii_lowercase().as_str() {
        "pvp" => Some(GameMode::PlayerVsPlayer),
        "pvc" => Some(GameMode::PlayerVsComputer),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "reset" | "r" => Command::Reset,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "mode" | "m" => {
            let value = parts.next().ok_or("Usage: mode <pvp|pvc>")?;
            let mode = parse_game_mode(value)
                .ok_or_else(|| format!("Unknown mode '{}', expected pvp or pvc", value))?;
            Command::Mode(mode)
        }
        other => {
            let index: usize = other
                .parse()
                .map_err(|_| format!("Unknown command '{}', type 'help'", other))?;
            if index >= BOARD_SIZE {
                return Err(format!("Cell must be between 0 and {}", BOARD_SIZE - 1));
            }
            Command::Place(index)
        }
    };

    if parts.next().is_some() {
        return Err(format!("Unexpected arguments after '{}'", head));
    }

    Ok(command)
}
