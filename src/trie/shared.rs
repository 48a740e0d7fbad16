use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use super::core::Trie;

/// Lock-free holder for the trie currently serving requests
///
/// Readers take a snapshot with [`SharedTrie::load`] and run lookups
/// against it; a rebuilt trie is published with [`SharedTrie::store`].
/// Lookups already holding the previous snapshot finish against it.
pub struct SharedTrie<T> {
    current: ArcSwap<Trie<T>>,
}

impl<T> SharedTrie<T> {
    #[must_use]
    pub fn new(trie: Trie<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(trie),
        }
    }

    /// Snapshot of the trie currently in service
    #[must_use]
    pub fn load(&self) -> Arc<Trie<T>> {
        self.current.load_full()
    }

    /// Publish a freshly built trie, returning the one it replaces
    pub fn store(&self, trie: Trie<T>) -> Arc<Trie<T>> {
        let depth = trie.depth();
        let previous = self.current.swap(Arc::new(trie));
        info!(depth, "Route trie swapped");
        previous
    }
}
