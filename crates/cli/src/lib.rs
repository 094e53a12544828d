//! Shared plumbing for the deck command-line tools.

use std::process::ExitCode;

/// Initialize logging. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

/// One-line diagnostic for a failed run.
///
/// Errors raised by the deck libraries are expected failures; anything else
/// is reported as unexpected.
pub fn error_message(err: &anyhow::Error) -> String {
    if err.downcast_ref::<deck_core::Error>().is_some() {
        format!("Error: {}", err)
    } else {
        format!("Unexpected error: {}", err)
    }
}

/// Print `success` on stdout or the error on stderr and pick the exit code.
pub fn finish(result: anyhow::Result<()>, success: impl FnOnce() -> String) -> ExitCode {
    match result {
        Ok(()) => {
            println!("{}", success());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}
