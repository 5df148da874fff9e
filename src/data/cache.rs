// ============================================================
// Layer 4 — Sample Lookup Cache
// ============================================================
// A small least-recently-used cache for index → Sample lookups.
//
// Storage is an IndexMap kept in recency order:
//   front → least recently used (evicted first)
//   back  → most recently used
//
// A hit moves the entry to the back. An insert at capacity
// evicts the front entry.
//
// The cache knows nothing about the dataset it mirrors. The
// owner must call clear() whenever the dataset changes, or
// previously seen indices will keep returning old samples.

use indexmap::IndexMap;

use crate::domain::sample::Sample;

/// Default number of cached lookups
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Bounded index → Sample cache with LRU eviction
#[derive(Debug, Clone)]
pub struct SampleCache {
    /// Cached samples, least recently used first
    entries:  IndexMap<usize, Sample>,
    /// Maximum number of entries before eviction
    capacity: usize,
    /// Lookups answered from the cache
    hits:     u64,
    /// Lookups that fell through to the dataset
    misses:   u64,
}

impl SampleCache {
    /// Create an empty cache holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `index`, marking it most recently used on a hit
    pub fn get(&mut self, index: usize) -> Option<&Sample> {
        match self.entries.shift_remove(&index) {
            Some(sample) => {
                self.hits += 1;
                let (pos, _) = self.entries.insert_full(index, sample);
                self.entries.get_index(pos).map(|(_, s)| s)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert as most recently used, evicting the oldest entry at capacity
    pub fn insert(&mut self, index: usize, sample: Sample) {
        if self.capacity == 0 {
            return;
        }
        self.entries.shift_remove(&index);
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(index, sample);
    }

    /// Drop every entry; hit/miss counters are kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `index` is cached, without touching recency
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// (hits, misses) since construction
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for SampleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
