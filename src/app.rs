//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use evorun::params::ParameterError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success, including an explicit help request (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Parameter error (exit code 1) - unrecognized name, malformed value,
    /// unresolvable strategy, or unreadable/unwritable parameter file.
    pub const PARAMETER_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Returns `true` for errors where printing full option usage helps the
/// user fix the invocation.
pub const fn wants_usage(error: &ParameterError) -> bool {
    matches!(
        error,
        ParameterError::Unrecognized { .. } | ParameterError::UnknownOption { .. }
    )
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
