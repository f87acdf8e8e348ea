use std::io;
use std::process::ExitCode;

use plum_boards::session::game_session::{GameSession, SessionEnd};
use plum_boards::session::logging::init_logging;
use plum_boards::session::session_config::SessionConfig;

fn main() -> ExitCode {
    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: plum_boards [--variant standard|custom|checkers] [--quiet] [--log <filter>]"
            );
            return ExitCode::from(2);
        }
    };
    init_logging(&config.log_filter);

    let stdin = io::stdin();
    let mut session = GameSession::new(stdin.lock(), io::stdout(), config);
    match session.run() {
        Ok(SessionEnd::GameOver { .. }) | Ok(SessionEnd::Quit) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
