//! Parameter file persistence.
//!
//! The file format is plain text, one `name:value` per line, one line per
//! declared option, grouped by kind in [`Kind::SAVE_ORDER`]. No comments,
//! no quoting, no escaping: a text value containing `:` is a documented
//! forward-incompatible limitation of the format. Writes truncate the
//! target; there is no partial-write recovery, so a crash mid-write
//! leaves a file that should not be resumed against.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ParameterError;
use super::parse::{self, Strictness};
use super::registry::ParamStore;
use super::resume::RunAddress;
use super::value::Kind;

/// Renders the full file contents for the store.
pub(crate) fn render(store: &ParamStore) -> String {
    let mut out = String::new();
    for kind in Kind::SAVE_ORDER {
        store.write_labels(kind, &mut out);
    }
    out
}

/// Writes the full label/value dump to `path`, truncating existing content.
pub(crate) fn save_to(store: &ParamStore, path: &Path) -> Result<(), ParameterError> {
    fs::write(path, render(store)).map_err(|e| ParameterError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Saves to the canonical run location, creating the run subdirectory if
/// needed, and returns the file path written.
pub(crate) fn save_to_run_directory(
    store: &ParamStore,
    address: &RunAddress,
) -> Result<PathBuf, ParameterError> {
    let dir = address.run_directory();
    fs::create_dir_all(&dir).map_err(|e| ParameterError::FileWrite {
        path: dir.clone(),
        source: e,
    })?;
    let path = address.parameter_file();
    save_to(store, &path)?;
    Ok(path)
}

/// Reads a saved file and feeds its lines through a lenient parse pass, so
/// the result is exactly what the merger would have produced from those
/// lines as tokens.
pub(crate) fn load_from(store: &mut ParamStore, path: &Path) -> Result<(), ParameterError> {
    let content = fs::read_to_string(path).map_err(|e| ParameterError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse::apply(
        store,
        content.lines().filter(|line| !line.is_empty()),
        Strictness::Lenient,
    )
}
