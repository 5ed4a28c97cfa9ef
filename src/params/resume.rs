//! Resume protocol: detect and continue a previously started run.
//!
//! A run is addressed by four option values: `base`, `saveTo`, `log`, and
//! `runNumber`. They determine one canonical parameter file path,
//! `base/saveTo{run}/log{run}_parameters.txt`; companion log files live
//! beside it, so other subsystems rely on this exact shape. If that file
//! already exists at startup, the run is resumed: defaults first, then the
//! saved file (lenient), then the live invocation tokens (strict) so the
//! command line always has final say and typos in it are still caught.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::ParameterError;
use super::parse::{self, Strictness};
use super::registry::Parameters;

/// The four raw values that address one run on disk.
///
/// Scanned from invocation tokens before any registry exists, each
/// defaulting to empty text when its token is absent. `run` is kept as
/// raw text because the token may never have been validated as a number
/// at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunAddress {
    /// Base directory for all runs of the experiment
    pub base: String,
    /// Subdirectory prefix for this run's output
    pub save_to: String,
    /// Prefix for log file names
    pub log: String,
    /// Run number, as raw text
    pub run: String,
}

impl RunAddress {
    /// Scans raw invocation tokens for the four addressing options.
    ///
    /// Later tokens win, matching the merger's override order.
    #[must_use]
    pub fn scan<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut address = Self {
            base: String::new(),
            save_to: String::new(),
            log: String::new(),
            run: String::new(),
        };
        for raw in tokens {
            let (name, value) = parse::split_token(raw);
            match name {
                "base" => address.base = value.to_string(),
                "saveTo" => address.save_to = value.to_string(),
                "log" => address.log = value.to_string(),
                "runNumber" => address.run = value.to_string(),
                _ => {}
            }
        }
        address
    }

    /// Reads the four addressing options back out of a live registry,
    /// used when saving to the canonical location.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if any addressing option is undeclared,
    /// which only happens if the default declarations were edited.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ParameterError> {
        Ok(Self {
            base: params.string_parameter("base")?.to_string(),
            save_to: params.string_parameter("saveTo")?.to_string(),
            log: params.string_parameter("log")?.to_string(),
            run: params.integer_parameter("runNumber")?.to_string(),
        })
    }

    /// Returns `true` if the address can designate a prior run at all.
    ///
    /// With both `base` and `saveTo` empty, no prior run could have been
    /// saved, so resume is skipped regardless of what happens to exist at
    /// the naively computed path.
    #[must_use]
    pub fn is_addressable(&self) -> bool {
        !(self.base.is_empty() && self.save_to.is_empty())
    }

    /// Directory holding all output of this run: `base/saveTo{run}`.
    #[must_use]
    pub fn run_directory(&self) -> PathBuf {
        Path::new(&self.base).join(format!("{}{}", self.save_to, self.run))
    }

    /// Canonical parameter file path:
    /// `base/saveTo{run}/log{run}_parameters.txt`.
    #[must_use]
    pub fn parameter_file(&self) -> PathBuf {
        self.run_directory()
            .join(format!("{}{}_parameters.txt", self.log, self.run))
    }
}

/// Outcome of startup parameter processing.
#[derive(Debug)]
pub enum Bootstrap {
    /// The reserved `help` token led the invocation; print usage and exit
    /// with status 0 without any other processing.
    HelpRequested,
    /// A fully merged registry, either fresh or resumed.
    Ready(Parameters),
}

/// Builds the registry for this invocation, resuming a prior run when its
/// saved parameter file exists.
///
/// Order of operations:
/// 1. `help` as the first token short-circuits everything.
/// 2. Scan tokens for the run address and compute the canonical path.
/// 3. If the address is usable and both the run directory and the file
///    exist: defaults, then the file (lenient), then the tokens (strict).
///    Otherwise: defaults, then the tokens (strict).
/// 4. Ensure the `base` directory exists (idempotent).
///
/// # Errors
///
/// Returns an error for unrecognized live tokens, malformed values,
/// unresolvable strategies, an unreadable parameter file, or a `base`
/// directory that cannot be created.
pub fn bootstrap(tokens: &[String]) -> Result<Bootstrap, ParameterError> {
    if tokens.first().is_some_and(|t| t == "help") {
        return Ok(Bootstrap::HelpRequested);
    }

    let address = RunAddress::scan(tokens.iter().map(String::as_str));
    let token_strs = tokens.iter().map(String::as_str);

    let file = address.parameter_file();
    let params = if address.is_addressable()
        && file.parent().is_some_and(Path::exists)
        && file.exists()
    {
        info!(path = %file.display(), "resuming run from saved parameters");
        let mut params = Parameters::from_defaults();
        params.load_from(&file)?;
        // Command line overwrites the save file
        params.apply_tokens(token_strs, Strictness::Strict)?;
        params
    } else {
        Parameters::from_tokens(token_strs)?
    };

    if !address.base.is_empty() && !Path::new(&address.base).is_dir() {
        info!(base = %address.base, "creating base directory");
        fs::create_dir_all(&address.base).map_err(|e| ParameterError::FileWrite {
            path: PathBuf::from(&address.base),
            source: e,
        })?;
    }

    Ok(Bootstrap::Ready(params))
}
