mod board_view;
mod command;
mod config;
mod runner;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::tictactoe::{GameMode, Mark, TicTacToeSession, TicTacToeSessionSettings};
use tictactoe_common::{log, logger};

use config::load_config;
use runner::run_game;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pvc => GameMode::PlayerVsComputer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a friend or an unbeatable computer")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Mark played by the computer in pvc mode
    #[arg(long, value_enum)]
    computer_mark: Option<MarkArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, config_error) = load_config(args.config.as_deref());

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(err) = config_error {
        log!("Ignoring config file: {}", err);
    }

    let mut settings = TicTacToeSessionSettings::from(config.tictactoe);
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }
    if let Some(mark) = args.computer_mark {
        settings.computer_mark = mark.into();
    }

    log!(
        "Starting {} game, computer plays {}",
        settings.mode,
        settings.computer_mark
    );

    let mut session = TicTacToeSession::new(settings)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_game(&mut session, stdin.lock(), &mut stdout)?;

    log!("Bye");
    Ok(())
}
