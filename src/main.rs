//! envars - save, sync and pull .env files

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = envars::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
