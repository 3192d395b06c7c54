//! Query file abstraction layer.
//!
//! `QueryDocument` and `QueryNode` wrap the `kdl` crate types so the rest of
//! the query module never touches KDL entries or spans directly.

use super::QueryError;

/// Parsed KDL document paired with its source text.
pub(super) struct QueryDocument {
    doc: kdl::KdlDocument,
    source: String,
}

/// Single KDL node with source context for line-number reporting.
pub(super) struct QueryNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

impl QueryDocument {
    /// Parse a KDL source string into a document.
    pub(super) fn parse(source: &str) -> Result<Self, QueryError> {
        let doc: kdl::KdlDocument = source
            .parse()
            .map_err(|e: kdl::KdlError| QueryError::ParseError(e.to_string()))?;
        Ok(Self {
            doc,
            source: source.to_string(),
        })
    }

    /// Load and parse a KDL query file.
    pub(super) fn load(path: &std::path::Path) -> Result<Self, QueryError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QueryError::NotFound(path.to_path_buf())
            } else {
                QueryError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Child nodes of the named top-level section, or empty when absent.
    ///
    /// `section("queries")` returns the contents of the `queries { … }` block.
    pub(super) fn section(&self, name: &str) -> Vec<QueryNode<'_>> {
        self.doc
            .get(name)
            .and_then(|n| n.children())
            .map(|children| {
                children
                    .nodes()
                    .iter()
                    .map(|node| QueryNode {
                        node,
                        source: &self.source,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<'a> QueryNode<'a> {
    /// The node's identifier (e.g. `"bool"`, `"int"`).
    pub(super) fn name(&self) -> &str {
        self.node.name().value()
    }

    /// Unnamed (positional) argument values, in order.
    pub(super) fn arguments(&self) -> Vec<&'a kdl::KdlValue> {
        self.node
            .entries()
            .iter()
            .filter(|e| e.name().is_none())
            .map(|e| e.value())
            .collect()
    }

    /// Value of the named property, e.g. `default=8333`.
    pub(super) fn property(&self, key: &str) -> Option<&'a kdl::KdlValue> {
        self.node
            .entries()
            .iter()
            .find(|e| e.name().is_some_and(|n| n.value() == key))
            .map(|e| e.value())
    }

    /// Names of all properties set on this node.
    pub(super) fn property_names(&self) -> Vec<&'a str> {
        self.node
            .entries()
            .iter()
            .filter_map(|e| e.name().map(|n| n.value()))
            .collect()
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }
}
