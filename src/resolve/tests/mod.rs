mod int;
mod source;

use crate::index::ArgIndex;

/// Index a whitespace-separated argument line, the way a shell would hand
/// it over without any quoting.
fn index_of(line: &str) -> ArgIndex {
    ArgIndex::build(line.split_whitespace())
}
