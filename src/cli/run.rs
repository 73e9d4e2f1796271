//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Initializes tracing
//! - Creates the tokio runtime
//! - Dispatches to command handlers
//! - Handles all error output

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;
use crate::{CliArgs, Config, ExitCode, FluxionError};

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns
/// `Result<(), ExitCode>`:
/// - On success: returns `Ok(())` after printing any output
/// - On error: prints the error to standard error, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        model: cli.model.clone(),
        verbose: if cli.verbose { Some(true) } else { None },
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let err = FluxionError::from(err);
            eprintln!("Error: {err}");
            return Err(err.to_exit_code());
        }
    };

    let _ = fluxion_utils::logging::init_tracing(config.defaults.verbose.unwrap_or(false));

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create async runtime: {e}");
            return Err(ExitCode::INTERNAL);
        }
    };

    let result = match cli.command {
        Commands::Generate {
            output,
            prompt_file,
        } => rt.block_on(commands::generate(&config, output, prompt_file)),
        Commands::Debug { file, logs } => rt.block_on(commands::debug(&config, file, logs)),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("Error: {err}");
            Err(err.to_exit_code())
        }
    }
}
