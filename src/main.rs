//! Lintgate: post-edit validation hook for code-editing agents.
//!
//! This is the main entry point for the `lintgate` CLI. It parses arguments,
//! resolves configuration, runs one validation pass, and maps fatal errors to
//! exit codes. Validation issues never change the exit code.

use lintgate::app;
use lintgate::cli::Cli;
use lintgate::exit_codes;
use std::process::ExitCode;

/// Environment variable holding the log filter (e.g. `debug`, `lintgate=info`).
const LOG_ENV: &str = "LINTGATE_LOG";

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the hook response.
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse_args();

    let result = app::resolve_config(&cli, |key| std::env::var(key).ok()).and_then(|config| {
        let stdin = std::io::stdin();
        app::run(
            &cli,
            &config,
            stdin.lock(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
