//! Error handling and exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use numalgo_core::constants::exit_codes;
use numalgo_harness::HarnessError;

/// Errors raised before any suite runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The fixture directory does not exist.
    #[error("fixture directory {} does not exist", .0.display())]
    MissingFixtureDir(PathBuf),
}

/// Map an application error to an exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.is::<AppError>() {
        return exit_codes::ERROR_CONFIG;
    }
    match err.downcast_ref::<HarnessError>() {
        Some(HarnessError::UnknownSuite(_) | HarnessError::Algorithm(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Convert a numeric code into a process exit code.
pub fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
