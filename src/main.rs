#![forbid(unsafe_code)]

//! Binary entry point for the inference scaffold

use inference_app::app;
use std::env;
use std::process::ExitCode;

/// Exit code for normal termination (reachable only via `--help`)
const EXIT_SUCCESS: u8 = 0;
/// Exit code when a log line cannot be written
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    match app::run(env::args().skip(1)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("inference-app: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
