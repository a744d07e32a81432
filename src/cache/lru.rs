//! LRU-evicting signature cache.
//!
//! Each entry records a logical access tick. When the cache is full the entry
//! with the oldest tick is evicted before the new one is inserted. Finding
//! that entry is a linear scan over the metadata, which keeps the structure
//! a single map and is cheap at the capacities used for dictionaries.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::AlphabetError;
use crate::signature::{interior_signature, Signature};

/// Default number of words kept by [`SignatureCache`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Metadata tracked for each cached word.
#[derive(Debug, Clone, Copy)]
struct EntryMetadata {
    signature: Signature,
    last_accessed: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    tick: u64,
    entries: FxHashMap<Box<str>, EntryMetadata>,
    stats: CacheStats,
}

impl CacheState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Finds the least recently used word.
    fn find_lru(&self) -> Option<Box<str>> {
        self.entries
            .iter()
            .min_by_key(|(_, meta)| meta.last_accessed)
            .map(|(word, _)| word.clone())
    }

    fn evict_lru(&mut self) {
        if let Some(word) = self.find_lru() {
            self.entries.remove(&word);
            self.stats.evictions += 1;
        }
    }
}

/// Hit/miss counters of a [`SignatureCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to encode the word.
    pub misses: u64,
    /// Entries dropped to stay within capacity.
    pub evictions: u64,
}

/// Thread-safe, bounded cache of interior signatures keyed by word.
///
/// A capacity of zero disables caching: every lookup encodes the word and
/// nothing is stored.
#[derive(Debug)]
pub struct SignatureCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl SignatureCache {
    /// Creates a cache holding at most `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Creates a cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Maximum number of cached words.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of words currently cached.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats
    }

    /// Cached interior signature of `word`, refreshing its recency.
    pub fn get(&self, word: &str) -> Option<Signature> {
        let mut state = self.state.lock();
        let tick = state.next_tick();
        let meta = state.entries.get_mut(word)?;
        meta.last_accessed = tick;
        Some(meta.signature)
    }

    /// Interior signature of `word`, encoding and caching it on a miss.
    ///
    /// Words that fail to encode are not cached.
    pub fn get_or_encode(&self, word: &str) -> Result<Signature, AlphabetError> {
        if self.capacity == 0 {
            self.state.lock().stats.misses += 1;
            return interior_signature(word);
        }

        let mut state = self.state.lock();
        let tick = state.next_tick();
        if let Some(meta) = state.entries.get_mut(word) {
            meta.last_accessed = tick;
            let signature = meta.signature;
            state.stats.hits += 1;
            return Ok(signature);
        }

        state.stats.misses += 1;
        let signature = interior_signature(word)?;
        if state.entries.len() >= self.capacity {
            state.evict_lru();
        }
        state.entries.insert(
            word.into(),
            EntryMetadata {
                signature,
                last_accessed: tick,
            },
        );
        Ok(signature)
    }

    /// Drops every cached word and resets the counters.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.stats = CacheStats::default();
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
