//! Error types for parameter lookup, parsing, and persistence.

use std::path::PathBuf;

use thiserror::Error;

use super::value::Kind;

/// Error type for all parameter registry operations.
///
/// Every variant is non-recoverable for the experiment itself: a wrong or
/// missing parameter invalidates hours of downstream computation, so the
/// binary maps each of these to a diagnostic plus exit code 1. The library
/// surface propagates them as typed errors and never substitutes a silent
/// default.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// A typed lookup or set named an option that was never declared with
    /// that kind. Always a caller/typo bug.
    #[error("No {kind} option named '{name}'")]
    UnknownOption {
        /// The undeclared option name
        name: String,
        /// The kind the caller asked for
        kind: Kind,
    },

    /// A strict parse pass saw a token whose name no declared option matches.
    #[error("Unrecognized option '{name}' with value '{value}'")]
    Unrecognized {
        /// The unrecognized name
        name: String,
        /// The value that accompanied it
        value: String,
    },

    /// A token's value does not convert to the declared kind of its option.
    #[error("Malformed {kind} value '{value}' for option '{name}': {reason}")]
    MalformedValue {
        /// The option name the token addressed
        name: String,
        /// The unconvertible value text
        value: String,
        /// The declared kind of the option
        kind: Kind,
        /// Reason the conversion failed
        reason: String,
    },

    /// A strategy-kind token named a strategy missing from the compiled-in table.
    #[error("'{value}' is not a known strategy for option '{name}'")]
    UnresolvedStrategy {
        /// The option name the token addressed
        name: String,
        /// The unresolvable strategy name
        value: String,
    },

    /// Failed to read a saved parameter file.
    #[error("Failed to read parameter file '{}': {source}", path.display())]
    FileRead {
        /// Path to the parameter file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a parameter file or create a run directory.
    #[error("Failed to write '{}': {source}", path.display())]
    FileWrite {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ParameterError {
    /// Creates an `UnknownOption` error for a name/kind pair.
    pub(crate) fn unknown(name: &str, kind: Kind) -> Self {
        Self::UnknownOption {
            name: name.to_string(),
            kind,
        }
    }
}
