use std::sync::Arc;

use parking_lot::RwLock;

use super::ArgIndex;

/// A swappable handle to the current [`ArgIndex`].
///
/// Readers take a [`snapshot`](SharedIndex::snapshot) and query it without
/// holding the lock. [`reparse`](SharedIndex::reparse) builds the new index
/// before taking the write lock, so a reader sees either the old index or
/// the new one, never a partial build.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<ArgIndex>>,
}

impl SharedIndex {
    pub fn new(index: ArgIndex) -> Self {
        SharedIndex {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The index as of now. Later reparses do not affect the returned value.
    pub fn snapshot(&self) -> Arc<ArgIndex> {
        Arc::clone(&*self.current.read())
    }

    /// Replace the current index with one built from `tokens`.
    pub fn reparse<I, S>(&self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fresh = Arc::new(ArgIndex::build(tokens));
        *self.current.write() = fresh;
        tracing::debug!("argument index replaced");
    }
}
