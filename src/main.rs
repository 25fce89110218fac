use std::{io, process::ExitCode};

fn main() -> ExitCode {
    env_logger::init();

    let stdout = io::stdout();
    match playlist_ring::run_demo(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("playlist demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
