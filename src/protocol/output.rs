use serde::Serialize;

use crate::index::ArgIndex;
use crate::query::QueryKind;
use crate::resolve::ValueSource;

/// Report written to stdout by `getarg resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub options: Vec<ResolvedOption>,
}

/// One resolved query.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResolvedOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QueryKind,
    pub value: OptionValue,
    pub source: ValueSource,
}

/// A typed option value, serialized as a bare JSON bool, number or string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    String(String),
}

/// Report written to stdout by `getarg index`.
#[derive(Debug, Serialize)]
pub struct IndexOutput {
    pub options: Vec<IndexedOption>,
    pub positionals: Vec<String>,
}

/// Every value recorded for one option; `null` marks a bare flag.
#[derive(Debug, Serialize)]
pub struct IndexedOption {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl From<&ArgIndex> for IndexOutput {
    fn from(index: &ArgIndex) -> Self {
        IndexOutput {
            options: index
                .entries()
                .map(|(name, values)| IndexedOption {
                    name: name.to_string(),
                    values: values.to_vec(),
                })
                .collect(),
            positionals: index.positionals().to_vec(),
        }
    }
}

/// Written instead of a report when the command fails.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub error: String,
}

impl ErrorOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
