//! Parameter registry for evolutionary-computation runs.
//!
//! This module provides:
//! - The typed option registry ([`Parameters`]) and its value model
//!   ([`Kind`], [`Value`])
//! - Override token parsing ([`Strictness`])
//! - Flat-file persistence with round-trip guarantees
//! - The resume protocol ([`bootstrap`], [`RunAddress`])
//! - CLI argument parsing ([`Cli`])
//! - Named strategy resolution ([`Strategy`])
//!
//! # Priority
//!
//! Parameter values are resolved with the following priority (highest to
//! lowest):
//!
//! 1. **Invocation tokens** - `name:value` overrides from the command line
//! 2. **Saved parameter file** - A prior run's persisted state, when resuming
//! 3. **Compiled-in defaults** - The exhaustive declaration step
//!
//! On resume, the saved file is loaded leniently (stale option names from
//! older versions are skipped) and the invocation tokens are then
//! re-applied strictly, so command-line typos are caught even during a
//! resume and the command line always has final say.
//!
//! # Failure posture
//!
//! Every error here is fatal to the experiment: an unknown name, a
//! malformed value, an unresolvable strategy, or an unreadable file is
//! surfaced as a typed [`ParameterError`] and never papered over with a
//! default. The binary maps any of them to exit code 1.

mod cli;
mod error;
mod parse;
mod persist;
mod registry;
mod resume;
mod strategy;
mod value;

pub(crate) mod defaults;

#[cfg(test)]
mod parse_tests;
#[cfg(test)]
mod persist_tests;
#[cfg(test)]
mod value_tests;

pub use cli::Cli;
pub use error::ParameterError;
pub use parse::Strictness;
pub use registry::Parameters;
pub use resume::{Bootstrap, RunAddress, bootstrap};
pub use strategy::{STRATEGIES, Strategy};
pub use value::{Kind, Value};
