use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vader::args::Args;
use vader::commands;
use vader::error::VaderError;
use vader::launch::ExecLauncher;
use vader::settings::{LOG_VAR, Settings};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = Settings::from_env()
        .map_err(VaderError::from)
        .and_then(|settings| commands::run(&args, &settings, &ExecLauncher));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
