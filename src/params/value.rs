//! Option kinds and the tagged value union.
//!
//! The original system kept five parallel typed collections and probed
//! them in a fixed order to route tokens. Here every option carries one
//! [`Value`], so a name has exactly one [`Kind`] and routing is by
//! declaration rather than probe order. The probe order survives only as
//! [`Kind::SAVE_ORDER`], which fixes the grouping of the parameter file.

use std::fmt;

use super::error::ParameterError;
use super::strategy::Strategy;

/// The static type category an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// Boolean flag
    Boolean,
    /// 64-bit floating point
    Double,
    /// Free-form text
    Text,
    /// Named strategy reference
    Strategy,
}

impl Kind {
    /// Fixed kind order for the parameter file: integer, long, boolean,
    /// double, text, strategy. Collaborators parse saved files positionally
    /// in tests, so this order is part of the on-disk contract.
    pub const SAVE_ORDER: [Self; 6] = [
        Self::Integer,
        Self::Long,
        Self::Boolean,
        Self::Double,
        Self::Text,
        Self::Strategy,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Text => "text",
            Self::Strategy => "strategy",
        };
        f.write_str(label)
    }
}

/// A single typed option value.
///
/// `Strategy` holds `None` for options that deliberately have no default
/// component selected; the file form of `None` is an empty value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// Boolean flag
    Boolean(bool),
    /// 64-bit floating point
    Double(f64),
    /// Free-form text
    Text(String),
    /// Named strategy reference, possibly unset
    Strategy(Option<&'static Strategy>),
}

impl Value {
    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Long(_) => Kind::Long,
            Self::Boolean(_) => Kind::Boolean,
            Self::Double(_) => Kind::Double,
            Self::Text(_) => Kind::Text,
            Self::Strategy(_) => Kind::Strategy,
        }
    }

    /// Converts raw token text into a value of the given kind.
    ///
    /// Boolean conversion is deliberately lenient: case-insensitive `true`
    /// is `true` and any other text is `false`, matching the behavior every
    /// saved parameter file to date was written under. A typo like `ture`
    /// therefore silently becomes `false`; see the module tests that pin
    /// this down.
    ///
    /// # Errors
    ///
    /// Returns `MalformedValue` when numeric text does not parse, and
    /// `UnresolvedStrategy` when a non-empty strategy name is missing from
    /// the compiled-in table.
    pub fn parse(kind: Kind, name: &str, text: &str) -> Result<Self, ParameterError> {
        match kind {
            Kind::Integer => text
                .parse::<i32>()
                .map(Self::Integer)
                .map_err(|e| malformed(kind, name, text, &e)),
            Kind::Long => text
                .parse::<i64>()
                .map(Self::Long)
                .map_err(|e| malformed(kind, name, text, &e)),
            Kind::Double => text
                .parse::<f64>()
                .map(Self::Double)
                .map_err(|e| malformed(kind, name, text, &e)),
            Kind::Boolean => Ok(Self::Boolean(text.eq_ignore_ascii_case("true"))),
            Kind::Text => Ok(Self::Text(text.to_string())),
            Kind::Strategy => {
                if text.is_empty() {
                    return Ok(Self::Strategy(None));
                }
                Strategy::resolve(text).map(|s| Self::Strategy(Some(s))).ok_or_else(|| {
                    ParameterError::UnresolvedStrategy {
                        name: name.to_string(),
                        value: text.to_string(),
                    }
                })
            }
        }
    }
}

fn malformed(kind: Kind, name: &str, text: &str, reason: &dyn fmt::Display) -> ParameterError {
    ParameterError::MalformedValue {
        name: name.to_string(),
        value: text.to_string(),
        kind,
        reason: reason.to_string(),
    }
}

/// File representation: the exact text that `name:value` lines carry.
///
/// Integers and doubles use the shortest round-tripping decimal form,
/// booleans are `true`/`false`, and an unset strategy is the empty text.
/// A text value containing `:` is a known forward-incompatible format
/// limitation; it is written as-is and will not survive a reload intact.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Strategy(Some(s)) => f.write_str(s.name),
            Self::Strategy(None) => Ok(()),
        }
    }
}
