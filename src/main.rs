use std::io::ErrorKind;
use std::process::ExitCode;

use hangman::cli::args;
use hangman::io::TerminalIO;
use hangman::logging::init_tracing;
use hangman::services::game::Game;
use hangman::GameError;
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = args::parse();
    init_tracing(args.verbose);

    let seed = args.seed_or_random();
    debug!(seed, "starting");

    let mut game = Game::new(seed, args.options(), TerminalIO, TerminalIO);
    match game.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            println!();
            debug!("input closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
