pub mod shared;

use std::collections::HashMap;

use crate::domain::{OptionName, OptionToken};
use crate::resolve;

pub use shared::SharedIndex;

/// Immutable index of the options present in one token sequence.
///
/// Maps each canonical name to every value recorded for it, in encounter
/// order. A `None` entry is a bare flag (`-jff`); `Some("")` is an explicit
/// empty value (`-jff=`). Positional tokens are kept separately and never
/// take part in option resolution.
///
/// Built once by [`ArgIndex::build`]; re-parsing means building a new index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgIndex {
    values: HashMap<OptionName, Vec<Option<String>>>,
    order: Vec<OptionName>,
    positionals: Vec<String>,
}

impl ArgIndex {
    /// Index a token sequence (program name already removed).
    ///
    /// Never fails: empty strings, bare `-`, and `-=value` are recorded
    /// best-effort like any other token.
    ///
    /// # Examples
    ///
    /// ```
    /// use getarg::index::ArgIndex;
    ///
    /// let index = ArgIndex::build(["-jff=11", "--bar", "input.txt"]);
    /// assert_eq!(index.first_value("-jff"), Some(Some("11")));
    /// assert_eq!(index.first_value("-bar"), Some(None));
    /// assert_eq!(index.positionals(), ["input.txt"]);
    /// ```
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = ArgIndex::default();
        for raw in tokens {
            let raw = raw.as_ref();
            match OptionToken::parse(raw) {
                Some(token) => index.record(token),
                None => index.positionals.push(raw.to_string()),
            }
        }
        tracing::debug!(
            options = index.order.len(),
            positionals = index.positionals.len(),
            "built argument index"
        );
        index
    }

    /// Index the current process arguments, skipping the program name.
    pub fn from_env() -> Self {
        Self::build(std::env::args().skip(1))
    }

    fn record(&mut self, token: OptionToken) {
        let OptionToken { name, value } = token;
        match self.values.get_mut(&name) {
            Some(values) => values.push(value),
            None => {
                self.order.push(name.clone());
                self.values.insert(name, vec![value]);
            }
        }
    }

    /// Whether the option occurred at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&OptionName::new(name))
    }

    /// The first recorded occurrence of `name`.
    ///
    /// `None` when the option never occurred, `Some(None)` for a bare flag,
    /// `Some(Some(value))` when it carried `=value`.
    pub fn first_value(&self, name: &str) -> Option<Option<&str>> {
        self.values
            .get(&OptionName::new(name))
            .and_then(|values| values.first())
            .map(|value| value.as_deref())
    }

    /// Every recorded occurrence of `name`, in encounter order.
    pub fn values(&self, name: &str) -> &[Option<String>] {
        self.values
            .get(&OptionName::new(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct option names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &OptionName> {
        self.order.iter()
    }

    /// Distinct option names with their recorded values, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&OptionName, &[Option<String>])> {
        self.order.iter().map(move |name| {
            let values = self.values.get(name).map(Vec::as_slice).unwrap_or(&[]);
            (name, values)
        })
    }

    /// Tokens that did not start with `-`, in encounter order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// True when no option was recorded (positionals are not counted).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// See [`resolve::bool_arg`].
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        resolve::bool_arg(self, name, default)
    }

    /// See [`resolve::string_arg`].
    pub fn get_string(&self, name: &str, default: &str) -> String {
        resolve::string_arg(self, name, default)
    }

    /// See [`resolve::int_arg`].
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        resolve::int_arg(self, name, default)
    }
}
