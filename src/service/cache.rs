//! Bounded least-recently-used cache shared between tasks.
//!
//! A thin port over `moka`'s async cache with an LRU eviction policy. Clones share the same
//! storage, and inserting past capacity evicts the least recently used entry.

use std::hash::Hash;

use moka::{future::Cache, policy::EvictionPolicy};

/// Shared LRU cache with explicit `get`/`put`/`invalidate`.
#[derive(Clone)]
pub struct LruCache<K, V> {
    inner: Cache<K, V>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity.max(1) as u64)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self { inner }
    }

    /// Returns a clone of the cached value and marks it as most recently used.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    /// Inserts or replaces a value.
    pub async fn put(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    /// Removes one entry.
    ///
    /// # Returns
    /// - `true` - An entry was removed
    /// - `false` - The key was not cached
    pub async fn invalidate(&self, key: &K) -> bool {
        self.inner.remove(key).await.is_some()
    }

    /// Number of live entries once pending evictions have been applied.
    #[cfg(test)]
    pub async fn len(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}
