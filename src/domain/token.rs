use super::OptionName;

/// An option-like token split into its canonical name and optional value.
///
/// `-jff=11` → name `-jff`, value `Some("11")`. `--bar` → name `-bar`, value
/// `None`. Only the first `=` splits; later ones belong to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    pub name: OptionName,
    pub value: Option<String>,
}

impl OptionToken {
    /// Split a raw token. Returns `None` for positional tokens (anything not
    /// starting with `-`, including the empty string).
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with('-') {
            return None;
        }
        let (name, value) = match raw.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (raw, None),
        };
        Some(OptionToken {
            name: OptionName::new(name),
            value,
        })
    }
}
