//! Typed lookups over an [`ArgIndex`].
//!
//! Every accessor is a pure function of the index, the queried name and a
//! caller default. Nothing here fails: a missing option yields the default,
//! an unparseable integer yields `0`.

pub mod coerce;

use serde::Serialize;

use crate::domain::negated_name_of;
use crate::index::ArgIndex;

pub use coerce::{interpret_bool, parse_int_lenient};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The queried option itself was present.
    Flag,
    /// Only its `-no` counterpart was present.
    Negated,
    /// Neither form was present; the caller default was used.
    Default,
}

/// A resolved value together with its [`ValueSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    fn new(value: T, source: ValueSource) -> Self {
        Resolved { value, source }
    }
}

/// Resolve a boolean option, honouring the `-noX` convention.
///
/// Precedence:
/// 1. `name` present → its first value, interpreted by [`interpret_bool`].
///    The literal flag wins even when `-noX` appears before or after it.
/// 2. Only the negated form present → the negation of its first value.
///    `-nojff=0` is a double negative and yields `true`.
/// 3. Neither present → `default`.
pub fn resolve_bool(index: &ArgIndex, name: &str, default: bool) -> Resolved<bool> {
    if let Some(value) = index.first_value(name) {
        return Resolved::new(interpret_bool(value), ValueSource::Flag);
    }

    let negated = negated_name_of(name);
    if let Some(value) = index.first_value(negated.as_str()) {
        tracing::debug!(option = name, negated = %negated, "resolved from negated form");
        return Resolved::new(!interpret_bool(value), ValueSource::Negated);
    }

    Resolved::new(default, ValueSource::Default)
}

/// Resolve a string option. A bare flag yields `""`, not the default.
pub fn resolve_string(index: &ArgIndex, name: &str, default: &str) -> Resolved<String> {
    match index.first_value(name) {
        Some(value) => Resolved::new(value.unwrap_or_default().to_string(), ValueSource::Flag),
        None => Resolved::new(default.to_string(), ValueSource::Default),
    }
}

/// Resolve an integer option. A bare flag or non-numeric value yields `0`.
pub fn resolve_int(index: &ArgIndex, name: &str, default: i64) -> Resolved<i64> {
    match index.first_value(name) {
        Some(value) => Resolved::new(
            parse_int_lenient(value.unwrap_or_default()),
            ValueSource::Flag,
        ),
        None => Resolved::new(default, ValueSource::Default),
    }
}

/// Boolean value of `name`; see [`resolve_bool`].
///
/// # Examples
///
/// ```
/// use getarg::index::ArgIndex;
/// use getarg::resolve::bool_arg;
///
/// let index = ArgIndex::build(["-nojff", "-jff"]);
/// assert!(bool_arg(&index, "-jff", false));
///
/// let index = ArgIndex::build(["--nojff=1"]);
/// assert!(!bool_arg(&index, "-jff", true));
/// ```
pub fn bool_arg(index: &ArgIndex, name: &str, default: bool) -> bool {
    resolve_bool(index, name, default).value
}

/// String value of `name`; see [`resolve_string`].
pub fn string_arg(index: &ArgIndex, name: &str, default: &str) -> String {
    resolve_string(index, name, default).value
}

/// Integer value of `name`; see [`resolve_int`].
pub fn int_arg(index: &ArgIndex, name: &str, default: i64) -> i64 {
    resolve_int(index, name, default).value
}

#[cfg(test)]
mod tests;
