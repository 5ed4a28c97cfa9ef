//! evorun: parameter bootstrap for evolutionary-computation runs
//!
//! Entry point for the evorun binary. Merges defaults, any resumable
//! saved parameter file, and the invocation tokens, ensures the run
//! directories exist, and persists the merged state for collaborating
//! subsystems.

use std::process::ExitCode;

use evorun::params::{Bootstrap, Cli, Parameters, bootstrap};

mod app;

use app::{exit_code, setup_tracing, wants_usage};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let params = match bootstrap(&cli.tokens) {
        Ok(Bootstrap::HelpRequested) => {
            print!("{}", Parameters::from_defaults().usage());
            return exit_code::SUCCESS;
        }
        Ok(Bootstrap::Ready(params)) => params,
        Err(e) => {
            eprintln!("Parameter error: {e}");
            if wants_usage(&e) {
                eprint!("{}", Parameters::from_defaults().usage());
            }
            return exit_code::PARAMETER_ERROR;
        }
    };

    tracing::info!("{params}");
    persist_if_addressable(&params)
}

/// Saves the merged parameters to their canonical run location, when the
/// run is addressable at all.
fn persist_if_addressable(params: &Parameters) -> ExitCode {
    let addressable = evorun::params::RunAddress::from_parameters(params)
        .is_ok_and(|address| address.is_addressable());

    if !addressable {
        tracing::info!("no base/saveTo set; parameters not persisted");
        return exit_code::SUCCESS;
    }

    match params.save() {
        Ok(path) => {
            tracing::info!(path = %path.display(), "parameters saved");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Parameter error: {e}");
            exit_code::PARAMETER_ERROR
        }
    }
}
