//! The option store and the typed registry surface.
//!
//! [`ParamStore`] is the single insertion-ordered mapping from option name
//! to declared entry. [`Parameters`] wraps it with the typed accessor and
//! mutator surface that the rest of an experiment calls by name; it is
//! constructed once at startup and handed by reference to every
//! collaborator (no global registry).

use std::fmt::{self, Write as _};

use indexmap::IndexMap;

use super::error::ParameterError;
use super::parse::{self, Strictness};
use super::strategy::Strategy;
use super::value::{Kind, Value};
use super::{defaults, persist, resume};

/// One declared option: current value, compiled-in default, and help text.
#[derive(Debug, Clone)]
pub(crate) struct ParamDef {
    pub(crate) current: Value,
    pub(crate) default: Value,
    pub(crate) help: &'static str,
}

/// Insertion-ordered mapping from option name to declaration.
///
/// Every name ever queried or mutated must have been declared up front;
/// there is no dynamic declaration at override time. Declaring a name
/// twice replaces the earlier entry wholesale (last registration wins) —
/// a data-authoring smell, not a runtime error.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParamStore {
    entries: IndexMap<String, ParamDef>,
}

impl ParamStore {
    pub(crate) fn declare(&mut self, name: &str, default: Value, help: &'static str) {
        self.entries.insert(
            name.to_string(),
            ParamDef {
                current: default.clone(),
                default,
                help,
            },
        );
    }

    pub(crate) fn declare_integer(&mut self, name: &str, default: i32, help: &'static str) {
        self.declare(name, Value::Integer(default), help);
    }

    pub(crate) fn declare_long(&mut self, name: &str, default: i64, help: &'static str) {
        self.declare(name, Value::Long(default), help);
    }

    pub(crate) fn declare_boolean(&mut self, name: &str, default: bool, help: &'static str) {
        self.declare(name, Value::Boolean(default), help);
    }

    pub(crate) fn declare_double(&mut self, name: &str, default: f64, help: &'static str) {
        self.declare(name, Value::Double(default), help);
    }

    pub(crate) fn declare_text(&mut self, name: &str, default: &str, help: &'static str) {
        self.declare(name, Value::Text(default.to_string()), help);
    }

    pub(crate) fn declare_strategy(
        &mut self,
        name: &str,
        default: Option<&'static Strategy>,
        help: &'static str,
    ) {
        self.declare(name, Value::Strategy(default), help);
    }

    /// Membership probe used for token routing. Never fails.
    pub(crate) fn has_label(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Declared kind of a name, if any.
    pub(crate) fn kind_of(&self, name: &str) -> Option<Kind> {
        self.entries.get(name).map(|def| def.current.kind())
    }

    /// Current value of a name declared with the given kind.
    pub(crate) fn get(&self, name: &str, kind: Kind) -> Result<&Value, ParameterError> {
        self.entries
            .get(name)
            .map(|def| &def.current)
            .filter(|value| value.kind() == kind)
            .ok_or_else(|| ParameterError::unknown(name, kind))
    }

    /// Replaces the current value of a declared name. The new value must
    /// carry the declared kind.
    pub(crate) fn change(&mut self, name: &str, value: Value) -> Result<(), ParameterError> {
        let kind = value.kind();
        match self.entries.get_mut(name) {
            Some(def) if def.current.kind() == kind => {
                def.current = value;
                Ok(())
            }
            _ => Err(ParameterError::unknown(name, kind)),
        }
    }

    /// All `(name, current value)` pairs of one kind, in declaration order.
    pub(crate) fn labels(&self, kind: Kind) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter(move |(_, def)| def.current.kind() == kind)
            .map(|(name, def)| (name.as_str(), &def.current))
    }

    /// Serializes every `(name, current value)` pair of one kind, one
    /// `name:value` line each, in declaration order.
    pub(crate) fn write_labels(&self, kind: Kind, sink: &mut String) {
        for (name, value) in self.labels(kind) {
            let _ = writeln!(sink, "{name}:{value}");
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn definitions(&self, kind: Kind) -> impl Iterator<Item = (&str, &ParamDef)> {
        self.entries
            .iter()
            .filter(move |(_, def)| def.current.kind() == kind)
            .map(|(name, def)| (name.as_str(), def))
    }
}

/// The live parameter registry for one experimental run.
///
/// # Construction
///
/// Construction always fills every option with its compiled-in default
/// first; override sources are applied on top. [`resume::bootstrap`] is
/// the usual entry point and also implements resume detection.
///
/// # Concurrency
///
/// Effectively immutable after initialization: all mutation happens on the
/// control thread during startup, after which worker threads may freely
/// share `&Parameters` for reads. Concurrent mutation is a caller error
/// this type does not guard against.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub(crate) store: ParamStore,
}

impl Parameters {
    /// Creates a registry holding only the compiled-in defaults.
    #[must_use]
    pub fn from_defaults() -> Self {
        let mut store = ParamStore::default();
        defaults::fill(&mut store);
        Self { store }
    }

    /// Creates a registry from defaults plus a strict pass over the given
    /// invocation tokens.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized names, malformed values, or
    /// unresolvable strategy names.
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut params = Self::from_defaults();
        params.apply_tokens(tokens, Strictness::Strict)?;
        Ok(params)
    }

    /// Creates a registry from defaults plus a lenient pass over an
    /// explicit parameter file.
    ///
    /// # Errors
    ///
    /// Returns `FileRead` if the file cannot be read, or a conversion
    /// error for malformed lines.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ParameterError> {
        let mut params = Self::from_defaults();
        params.load_from(path)?;
        Ok(params)
    }

    /// Applies a sequence of `name:value` tokens in order; later tokens
    /// for the same name win.
    ///
    /// # Errors
    ///
    /// Malformed values and unresolvable strategies always fail. An
    /// unrecognized name fails only under [`Strictness::Strict`]; a
    /// lenient pass logs and skips it, which is what tolerates option-set
    /// drift in parameter files written by older versions.
    pub fn apply_tokens<'a, I>(
        &mut self,
        tokens: I,
        strictness: Strictness,
    ) -> Result<(), ParameterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        parse::apply(&mut self.store, tokens, strictness)
    }

    /// Gets a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared boolean option.
    pub fn boolean_parameter(&self, name: &str) -> Result<bool, ParameterError> {
        match self.store.get(name, Kind::Boolean)? {
            Value::Boolean(v) => Ok(*v),
            _ => Err(ParameterError::unknown(name, Kind::Boolean)),
        }
    }

    /// Gets an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared integer option.
    pub fn integer_parameter(&self, name: &str) -> Result<i32, ParameterError> {
        match self.store.get(name, Kind::Integer)? {
            Value::Integer(v) => Ok(*v),
            _ => Err(ParameterError::unknown(name, Kind::Integer)),
        }
    }

    /// Gets a long parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared long option.
    pub fn long_parameter(&self, name: &str) -> Result<i64, ParameterError> {
        match self.store.get(name, Kind::Long)? {
            Value::Long(v) => Ok(*v),
            _ => Err(ParameterError::unknown(name, Kind::Long)),
        }
    }

    /// Gets a double parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared double option.
    pub fn double_parameter(&self, name: &str) -> Result<f64, ParameterError> {
        match self.store.get(name, Kind::Double)? {
            Value::Double(v) => Ok(*v),
            _ => Err(ParameterError::unknown(name, Kind::Double)),
        }
    }

    /// Gets a text parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared text option.
    pub fn string_parameter(&self, name: &str) -> Result<&str, ParameterError> {
        match self.store.get(name, Kind::Text)? {
            Value::Text(v) => Ok(v.as_str()),
            _ => Err(ParameterError::unknown(name, Kind::Text)),
        }
    }

    /// Gets a strategy parameter; `None` means no component is selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared strategy option.
    pub fn strategy_parameter(
        &self,
        name: &str,
    ) -> Result<Option<&'static Strategy>, ParameterError> {
        match self.store.get(name, Kind::Strategy)? {
            Value::Strategy(v) => Ok(*v),
            _ => Err(ParameterError::unknown(name, Kind::Strategy)),
        }
    }

    /// Sets an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared integer option.
    pub fn set_integer(&mut self, name: &str, value: i32) -> Result<(), ParameterError> {
        self.store.change(name, Value::Integer(value))
    }

    /// Sets a long parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared long option.
    pub fn set_long(&mut self, name: &str, value: i64) -> Result<(), ParameterError> {
        self.store.change(name, Value::Long(value))
    }

    /// Sets a double parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared double option.
    pub fn set_double(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        self.store.change(name, Value::Double(value))
    }

    /// Sets a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared boolean option.
    pub fn set_boolean(&mut self, name: &str, value: bool) -> Result<(), ParameterError> {
        self.store.change(name, Value::Boolean(value))
    }

    /// Sets a text parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared text option.
    pub fn set_string(&mut self, name: &str, value: &str) -> Result<(), ParameterError> {
        self.store.change(name, Value::Text(value.to_string()))
    }

    /// Sets a strategy parameter.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if `name` is not a declared strategy option.
    pub fn set_strategy(
        &mut self,
        name: &str,
        value: Option<&'static Strategy>,
    ) -> Result<(), ParameterError> {
        self.store.change(name, Value::Strategy(value))
    }

    /// Returns `true` if `name` is declared with any kind. Never fails.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.store.has_label(name)
    }

    /// Writes the full registry state to `path`, truncating any existing
    /// content: one `name:value` line per option, grouped by kind in
    /// [`Kind::SAVE_ORDER`].
    ///
    /// # Errors
    ///
    /// Returns `FileWrite` if the target cannot be written.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ParameterError> {
        persist::save_to(&self.store, path)
    }

    /// Saves to the canonical path derived from `base`, `saveTo`, `log`,
    /// and `runNumber`, creating the run directory first.
    ///
    /// # Errors
    ///
    /// Returns `FileWrite` if the directory or file cannot be created.
    pub fn save(&self) -> Result<std::path::PathBuf, ParameterError> {
        let address = resume::RunAddress::from_parameters(self)?;
        persist::save_to_run_directory(&self.store, &address)
    }

    /// Loads a saved parameter file into this registry through a lenient
    /// parse pass, so stale options from older versions are skipped.
    ///
    /// # Errors
    ///
    /// Returns `FileRead` if the file cannot be read, or a conversion
    /// error for lines whose values are malformed.
    pub fn load_from(&mut self, path: &std::path::Path) -> Result<(), ParameterError> {
        persist::load_from(&mut self.store, path)
    }

    /// Renders the descriptive help text for every declared option,
    /// grouped by kind.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut out = String::from("Usage: evorun [NAME:VALUE]...\n");
        for kind in Kind::SAVE_ORDER {
            let _ = writeln!(out, "\n{kind} options:");
            for (name, def) in self.store.definitions(kind) {
                let _ = writeln!(out, "  {name}:{}", def.default);
                let _ = writeln!(out, "      {}", def.help);
            }
        }
        out
    }

    /// Number of declared options across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no options are declared. Never the case for a
    /// default-filled registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameters {{ {} options }}", self.store.len())
    }
}
