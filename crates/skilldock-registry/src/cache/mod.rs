//! Result caching with TTL support and deterministic key generation.

use std::time::{Duration, SystemTime};

use dashmap::DashMap;
use serde::Serialize;

/// Cache entry with TTL
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Cached value
    pub value: V,
    /// When the entry was stored
    pub stored_at: SystemTime,
    /// Time-to-live duration
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Create a cache entry with the given TTL
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: SystemTime::now(),
            ttl,
        }
    }

    /// Check if cache entry is still fresh
    pub fn is_fresh(&self) -> bool {
        match self.stored_at.elapsed() {
            Ok(elapsed) => elapsed < self.ttl,
            Err(_) => false, // Clock went backwards, consider stale
        }
    }

    /// Get age of cache entry
    pub fn age(&self) -> Option<Duration> {
        self.stored_at.elapsed().ok()
    }
}

/// In-memory TTL cache for registry results
///
/// Keys are generated from a namespace plus a parameter set; two calls with
/// logically equal parameters always map to the same key regardless of the
/// order the parameters were supplied in, so deduplication and caching line
/// up across call sites.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Cache storage
    entries: DashMap<String, CacheEntry<V>>,
    /// TTL applied to every entry stored in this instance
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Build the canonical cache key for a namespace and parameter set
    ///
    /// Parameters are sorted by name before serialization, so insertion
    /// order never leaks into the key.
    pub fn generate_key(&self, namespace: &str, params: &[(&str, String)]) -> String {
        let mut pairs: Vec<&(&str, String)> = params.iter().collect();
        pairs.sort_by_key(|(name, _)| *name);

        let query: Vec<String> = pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!("{}?{}", namespace, query.join("&"))
    }

    /// Get a cached value if present and fresh
    ///
    /// A stale entry behaves as a miss and is evicted as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            if entry.is_fresh() {
                return Some(entry.value.clone());
            }
        }
        // Stale entry, evict lazily
        self.entries.remove(key);
        None
    }

    /// Store a value under a key, overwriting any existing entry
    pub fn set(&self, key: &str, value: V) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, self.ttl));
    }

    /// Check whether a fresh value exists for a key, without cloning it
    ///
    /// Used to avoid scheduling duplicate prefetches.
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| entry.is_fresh())
            .unwrap_or(false)
    }

    /// Remove every entry whose key contains the given substring
    pub fn invalidate_pattern(&self, pattern: &str) {
        self.entries.retain(|key, _| !key.contains(pattern));
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let mut fresh_count = 0;
        let mut stale_count = 0;

        for entry in self.entries.iter() {
            if entry.is_fresh() {
                fresh_count += 1;
            } else {
                stale_count += 1;
            }
        }

        CacheStats {
            total_entries: self.entries.len(),
            fresh_entries: fresh_count,
            stale_entries: stale_count,
        }
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Total number of entries
    pub total_entries: usize,
    /// Number of fresh entries
    pub fresh_entries: usize,
    /// Number of stale entries
    pub stale_entries: usize,
}

#[cfg(test)]
mod tests;
