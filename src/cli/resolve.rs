use std::path::PathBuf;
use std::process::ExitCode;

use super::{CliError, TokenSource};
use crate::index::ArgIndex;
use crate::protocol::ResolveOutput;
use crate::query::{Query, QueryKind, QuerySet};

/// Everything `getarg resolve` needs.
///
/// `bools`, `strings` and `ints` hold `NAME` or `NAME=DEFAULT` specs.
/// Queries from `queries_file` are resolved after the command-line ones.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub bools: Vec<String>,
    pub strings: Vec<String>,
    pub ints: Vec<String>,
    pub queries_file: Option<PathBuf>,
    pub source: TokenSource,
}

/// Execute the resolve subcommand and write its JSON report to stdout.
pub fn run(request: &ResolveRequest) -> ExitCode {
    super::finish(execute(request))
}

fn execute(request: &ResolveRequest) -> Result<ResolveOutput, CliError> {
    let queries = build_queries(request)?;
    let index = ArgIndex::build(request.source.tokens()?);
    tracing::debug!(queries = queries.len(), "resolving");
    Ok(queries.resolve_all(&index))
}

fn build_queries(request: &ResolveRequest) -> Result<QuerySet, CliError> {
    let mut set = QuerySet::default();
    let specs = [
        (QueryKind::Bool, &request.bools),
        (QueryKind::String, &request.strings),
        (QueryKind::Int, &request.ints),
    ];
    for (kind, specs) in specs {
        for spec in specs {
            set.push(Query::from_spec(kind, spec)?);
        }
    }
    if let Some(path) = &request.queries_file {
        set.extend(QuerySet::load(path)?);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::OptionValue;

    fn request(bools: &[&str], ints: &[&str], line: &str) -> ResolveRequest {
        ResolveRequest {
            bools: bools.iter().map(|s| s.to_string()).collect(),
            strings: vec![],
            ints: ints.iter().map(|s| s.to_string()).collect(),
            queries_file: None,
            source: TokenSource::Line(line.to_string()),
        }
    }

    #[test]
    fn execute_resolves_each_kind_in_order() {
        let output = execute(&request(&["-jff=true"], &["-port=1"], "-nojff -port=80")).unwrap();
        assert_eq!(output.options.len(), 2);
        assert_eq!(output.options[0].value, OptionValue::Bool(false));
        assert_eq!(output.options[1].value, OptionValue::Int(80));
    }

    #[test]
    fn execute_rejects_bad_spec() {
        let err = execute(&request(&["jff"], &[], "")).unwrap_err();
        assert!(matches!(err, CliError::Query(_)));
    }

    #[test]
    fn execute_rejects_unsplittable_line() {
        let err = execute(&request(&["-jff"], &[], "-a | -b")).unwrap_err();
        assert!(matches!(err, CliError::Split(_)));
    }

    #[test]
    fn execute_missing_queries_file() {
        let mut req = request(&[], &[], "");
        req.queries_file = Some(PathBuf::from("/tmp/does-not-exist-getarg.kdl"));
        assert!(matches!(execute(&req), Err(CliError::Query(_))));
    }
}
