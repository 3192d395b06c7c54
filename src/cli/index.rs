use std::process::ExitCode;

use super::{CliError, TokenSource};
use crate::index::ArgIndex;
use crate::protocol::IndexOutput;

/// Execute the index subcommand: dump every recorded option as JSON.
pub fn run(source: &TokenSource) -> ExitCode {
    super::finish(execute(source))
}

fn execute(source: &TokenSource) -> Result<IndexOutput, CliError> {
    let index = ArgIndex::build(source.tokens()?);
    Ok(IndexOutput::from(&index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_lists_options_and_positionals() {
        let output = execute(&TokenSource::Line("-a=1 pos --a".into())).unwrap();
        assert_eq!(output.options.len(), 1);
        assert_eq!(output.options[0].values, vec![Some("1".to_string()), None]);
        assert_eq!(output.positionals, vec!["pos"]);
    }
}
