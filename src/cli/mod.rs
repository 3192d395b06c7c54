pub mod index;
pub mod logging;
pub mod resolve;

use serde::Serialize;

use crate::command::{self, SplitError};
use crate::protocol::ErrorOutput;
use crate::query::QueryError;

/// Anything that stops a subcommand from producing its report.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Split(#[from] SplitError),
}

/// Where the raw tokens come from: a command-line string split with shell
/// quoting rules, or tokens passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Line(String),
    Tokens(Vec<String>),
}

impl TokenSource {
    pub(crate) fn tokens(&self) -> Result<Vec<String>, SplitError> {
        match self {
            TokenSource::Line(line) => command::split(line),
            TokenSource::Tokens(tokens) => Ok(tokens.clone()),
        }
    }
}

/// Print the report, or an error object on failure, and map to an exit code.
pub(crate) fn finish<T: Serialize>(result: Result<T, CliError>) -> std::process::ExitCode {
    match result {
        Ok(output) => {
            output_json(&output);
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            output_json(&ErrorOutput::new(e.to_string()));
            std::process::ExitCode::FAILURE
        }
    }
}

/// Serialize a report to JSON and print it to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impls on strings, numbers and enums. Failure here indicates
/// a programming bug, not a runtime condition.
fn output_json<T: Serialize>(output: &T) {
    let json = serde_json::to_string(output).expect("report serialization cannot fail");
    println!("{json}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_pass_through_unchanged() {
        let source = TokenSource::Tokens(vec!["a b".into(), "-x".into()]);
        assert_eq!(source.tokens().unwrap(), vec!["a b", "-x"]);
    }

    #[test]
    fn line_is_split() {
        let source = TokenSource::Line(r#"-x "a b""#.into());
        assert_eq!(source.tokens().unwrap(), vec!["-x", "a b"]);
    }

    #[test]
    fn cli_error_displays_inner_error() {
        let err = CliError::from(QueryError::ParseError("bad".into()));
        assert_eq!(err.to_string(), "invalid KDL syntax: bad");
    }
}
