//! A prefix index that can be shared between threads.
//!
//! Reads (lookups, counts, suggestions) take a shared lock and may run
//! concurrently with each other. Inserts, erases and bulk indexing take the
//! exclusive lock for their whole duration.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::trie::index::{EraseOutcome, PrefixIndex};
use crate::trie::stats::IndexStats;
use crate::trie::suggest::{Suggestion, SuggestionShare};

/// A cloneable handle to a prefix index behind a reader-writer lock.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<RwLock<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Wrap an index for shared use.
    pub fn new(index: PrefixIndex) -> Self {
        SharedPrefixIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Hold the shared lock for several reads in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, PrefixIndex> {
        self.inner.read()
    }

    /// Hold the exclusive lock for several writes in a row.
    pub fn write(&self) -> RwLockWriteGuard<'_, PrefixIndex> {
        self.inner.write()
    }

    pub fn insert(&self, word: &str) {
        self.inner.write().insert(word);
    }

    pub fn insert_with_weight(&self, word: &str, weight: u64) {
        self.inner.write().insert_with_weight(word, weight);
    }

    pub fn erase(&self, word: &str) -> EraseOutcome {
        self.inner.write().erase(word)
    }

    pub fn bulk_index_text(&self, text: &str) -> Result<AHashMap<String, u64>> {
        self.inner.write().bulk_index_text(text)
    }

    pub fn lookup_exact(&self, word: &str) -> bool {
        self.inner.read().lookup_exact(word)
    }

    pub fn count_equal(&self, word: &str) -> u64 {
        self.inner.read().count_equal(word)
    }

    pub fn count_prefix(&self, prefix: &str) -> u64 {
        self.inner.read().count_prefix(prefix)
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.inner.read().frequency(word)
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        self.inner.read().suggest(prefix, limit)
    }

    pub fn suggest_with_shares(&self, prefix: &str, limit: usize) -> Vec<SuggestionShare> {
        self.inner.read().suggest_with_shares(prefix, limit)
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Take the index back out if this is the last handle.
    pub fn try_into_inner(self) -> std::result::Result<PrefixIndex, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| SharedPrefixIndex { inner })
    }
}

impl From<PrefixIndex> for SharedPrefixIndex {
    fn from(index: PrefixIndex) -> Self {
        SharedPrefixIndex::new(index)
    }
}
