mod document;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::OptionName;
use crate::index::ArgIndex;
use crate::protocol::{OptionValue, ResolveOutput, ResolvedOption};
use crate::resolve;
use document::{QueryDocument, QueryNode};

/// The type an option is resolved as.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Bool,
    String,
    Int,
}

impl QueryKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "bool" => Some(QueryKind::Bool),
            "string" => Some(QueryKind::String),
            "int" => Some(QueryKind::Int),
            _ => None,
        }
    }

    /// Default used when a query does not name one: `false`, `""`, `0`.
    fn implicit_default(self) -> OptionValue {
        match self {
            QueryKind::Bool => OptionValue::Bool(false),
            QueryKind::String => OptionValue::String(String::new()),
            QueryKind::Int => OptionValue::Int(0),
        }
    }
}

/// A request to resolve one option as a given type, with a fallback default.
///
/// The default always matches the kind; constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    name: OptionName,
    default: OptionValue,
}

/// Errors from building queries out of CLI specs or a query file.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("query file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read query file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("line {line}: {message}")]
    InvalidQuery { line: usize, message: String },
    #[error("invalid query '{0}': {1}")]
    InvalidSpec(String, String),
}

impl Query {
    /// Build a query from a command-line spec: `NAME` or `NAME=DEFAULT`.
    ///
    /// `NAME` must start with `-`. A bool default is one of `true`, `false`,
    /// `1`, `0`; an int default must be a base-10 integer.
    pub fn from_spec(kind: QueryKind, spec: &str) -> Result<Self, QueryError> {
        let invalid = |message: &str| QueryError::InvalidSpec(spec.to_string(), message.to_string());

        let (name, default) = match spec.split_once('=') {
            Some((name, default)) => (name, Some(default)),
            None => (spec, None),
        };
        let name = parse_name(name).map_err(|m| invalid(&m))?;

        let default = match (kind, default) {
            (_, None) => kind.implicit_default(),
            (QueryKind::Bool, Some(raw)) => match raw {
                "true" | "1" => OptionValue::Bool(true),
                "false" | "0" => OptionValue::Bool(false),
                _ => return Err(invalid("bool default must be true, false, 1 or 0")),
            },
            (QueryKind::Int, Some(raw)) => raw
                .parse::<i64>()
                .map(OptionValue::Int)
                .map_err(|_| invalid("int default must be a base-10 integer"))?,
            (QueryKind::String, Some(raw)) => OptionValue::String(raw.to_string()),
        };

        Ok(Query { name, default })
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn kind(&self) -> QueryKind {
        match self.default {
            OptionValue::Bool(_) => QueryKind::Bool,
            OptionValue::String(_) => QueryKind::String,
            OptionValue::Int(_) => QueryKind::Int,
        }
    }

    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    /// Resolve this query against an index.
    pub fn resolve(&self, index: &ArgIndex) -> ResolvedOption {
        let name = self.name.as_str();
        let (value, source) = match &self.default {
            OptionValue::Bool(default) => {
                let r = resolve::resolve_bool(index, name, *default);
                (OptionValue::Bool(r.value), r.source)
            }
            OptionValue::String(default) => {
                let r = resolve::resolve_string(index, name, default);
                (OptionValue::String(r.value), r.source)
            }
            OptionValue::Int(default) => {
                let r = resolve::resolve_int(index, name, *default);
                (OptionValue::Int(r.value), r.source)
            }
        };
        ResolvedOption {
            name: name.to_string(),
            kind: self.kind(),
            value,
            source,
        }
    }
}

/// An ordered list of queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    queries: Vec<Query>,
}

impl QuerySet {
    /// Load queries from a KDL file.
    pub fn load(path: &Path) -> Result<Self, QueryError> {
        let doc = QueryDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse queries from KDL source.
    ///
    /// ```kdl
    /// queries {
    ///     bool "-jff" default=#true
    ///     string "-datadir" default="/var/lib/app"
    ///     int "-port" default=8333
    /// }
    /// ```
    ///
    /// A document without a `queries` section yields no queries.
    pub fn parse(source: &str) -> Result<Self, QueryError> {
        let doc = QueryDocument::parse(source)?;
        Self::from_document(&doc)
    }

    fn from_document(doc: &QueryDocument) -> Result<Self, QueryError> {
        let queries = doc
            .section("queries")
            .iter()
            .map(parse_node)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QuerySet { queries })
    }

    pub fn push(&mut self, query: Query) {
        self.queries.push(query);
    }

    /// Append every query of `other` after the existing ones.
    pub fn extend(&mut self, other: QuerySet) {
        self.queries.extend(other.queries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.queries.iter()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Resolve every query against `index`, in query order.
    pub fn resolve_all(&self, index: &ArgIndex) -> ResolveOutput {
        ResolveOutput {
            options: self.queries.iter().map(|q| q.resolve(index)).collect(),
        }
    }
}

fn parse_name(raw: &str) -> Result<OptionName, String> {
    if !raw.starts_with('-') || raw.trim_start_matches('-').is_empty() {
        return Err(format!("option name '{raw}' must start with '-'"));
    }
    Ok(OptionName::new(raw))
}

fn parse_node(node: &QueryNode<'_>) -> Result<Query, QueryError> {
    let at_line = |message: String| QueryError::InvalidQuery {
        line: node.line(),
        message,
    };

    let kind = QueryKind::from_keyword(node.name())
        .ok_or_else(|| at_line(format!("unknown query type '{}'", node.name())))?;

    let name = match node.arguments().as_slice() {
        [value] => value
            .as_string()
            .ok_or_else(|| at_line("option name must be a string".to_string()))?,
        _ => return Err(at_line("expected exactly one option name".to_string())),
    };
    let name = parse_name(name).map_err(&at_line)?;

    if let Some(unknown) = node.property_names().into_iter().find(|p| *p != "default") {
        return Err(at_line(format!("unknown property '{unknown}'")));
    }

    let default = match node.property("default") {
        None => kind.implicit_default(),
        Some(value) => match kind {
            QueryKind::Bool => value
                .as_bool()
                .map(OptionValue::Bool)
                .ok_or_else(|| at_line("bool default must be #true or #false".to_string()))?,
            QueryKind::String => value
                .as_string()
                .map(|s| OptionValue::String(s.to_string()))
                .ok_or_else(|| at_line("string default must be a string".to_string()))?,
            QueryKind::Int => value
                .as_integer()
                .and_then(|i| i64::try_from(i).ok())
                .map(OptionValue::Int)
                .ok_or_else(|| at_line("int default must be a 64-bit integer".to_string()))?,
        },
    };

    Ok(Query { name, default })
}
