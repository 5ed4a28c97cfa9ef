//! Token parsing and override application.
//!
//! An override token is a raw `name:value` fragment; a missing `:` means
//! the empty value. Tokens are applied in sequence order, so later tokens
//! for the same name win within one pass. The same code path consumes
//! invocation arguments (strict) and saved parameter files (lenient).

use tracing::{debug, warn};

use super::error::ParameterError;
use super::registry::ParamStore;
use super::value::Value;

/// How a parse pass treats a token whose name no declared option matches.
///
/// Invocation arguments are parsed strictly so typos are caught; saved
/// files are parsed leniently so a resume survives option-set drift
/// between versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Unrecognized names are fatal.
    Strict,
    /// Unrecognized names are logged and skipped.
    Lenient,
}

/// Splits a raw token on the first `:` into name and value.
///
/// Values containing further `:` separators are kept whole; there is no
/// escaping in the format.
pub(crate) fn split_token(raw: &str) -> (&str, &str) {
    raw.split_once(':').unwrap_or((raw, ""))
}

/// Applies a token sequence to the store.
///
/// Malformed values and unresolvable strategy names fail regardless of
/// strictness; a bad literal almost certainly corrupts an in-progress
/// resumed run, so it is never skipped.
pub(crate) fn apply<'a, I>(
    store: &mut ParamStore,
    tokens: I,
    strictness: Strictness,
) -> Result<(), ParameterError>
where
    I: IntoIterator<Item = &'a str>,
{
    for raw in tokens {
        let (name, value) = split_token(raw);
        let Some(kind) = store.kind_of(name) else {
            match strictness {
                Strictness::Strict => {
                    return Err(ParameterError::Unrecognized {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
                Strictness::Lenient => {
                    warn!(name, value, "skipping unrecognized option");
                    continue;
                }
            }
        };
        let parsed = Value::parse(kind, name, value)?;
        debug!(%kind, name, %parsed, "option set");
        store.change(name, parsed)?;
    }
    Ok(())
}
