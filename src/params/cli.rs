//! CLI argument parsing using clap.
//!
//! The invocation surface is the token list itself: positional
//! `name:value` overrides, applied in order. The reserved token `help`
//! in first position prints full option usage instead of running.

use clap::Parser;

/// evorun: parameter bootstrap for evolutionary-computation runs
///
/// Merges compiled-in defaults, a resumable saved parameter file, and
/// the given override tokens, with the tokens always winning.
#[derive(Debug, Parser)]
#[command(name = "evorun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override tokens in name:value form (value may be empty);
    /// 'help' as the first token prints full option usage
    #[arg(value_name = "NAME:VALUE")]
    pub tokens: Vec<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
