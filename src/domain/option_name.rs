/// A canonical option name (always exactly one logical leading dash).
///
/// `--jff` and `-jff` both normalize to `-jff`. The `no` negation prefix is
/// not special here: `-nojff` is its own name, paired with `-jff` only at
/// resolution time via [`OptionName::negated`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionName(pub(crate) String);

impl OptionName {
    /// Normalize a dashed name.
    ///
    /// - `--name` → `-name`
    /// - `-name` → kept as-is
    /// - `---name` → `--name` (only one dash is ever dropped)
    /// - No leading dash → a dash is prepended
    pub fn new(raw: &str) -> Self {
        let normalized = if raw.starts_with("--") {
            raw[1..].to_string()
        } else if raw.starts_with('-') {
            raw.to_string()
        } else {
            format!("-{raw}")
        };
        OptionName(normalized)
    }

    /// The negated counterpart: `-jff` → `-nojff`.
    pub fn negated(&self) -> OptionName {
        OptionName(format!("-no{}", self.bare()))
    }

    /// The name without its leading dash.
    pub fn bare(&self) -> &str {
        self.0.strip_prefix('-').unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the negated form of a caller-supplied option name.
///
/// Accepts the single-dash form callers use (`-jff`); a double-dash or
/// undashed name is normalized first.
pub fn negated_name_of(name: &str) -> OptionName {
    OptionName::new(name).negated()
}

impl PartialEq<str> for OptionName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OptionName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for OptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
