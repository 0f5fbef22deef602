//! Bounded LRU memoization of calculation results.
//!
//! Entries are keyed by [`Fingerprint`] and stamped with a monotonic
//! generation. Lookups return copies; the cache owns its entries.

mod fingerprint;

pub use fingerprint::Fingerprint;

use crate::calc::CalculationResult;
use crate::Result;
use log::{debug, trace};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default number of retained results.
pub const DEFAULT_CAPACITY: usize = 256;

/// Cache configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// Every lookup misses and nothing is stored.
    pub fn disabled() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            enabled: false,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// A stored result and the generation it was written in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheEntry {
    pub result: CalculationResult,
    pub generation: u64,
}

/// What to drop from the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalidation {
    Entry(Fingerprint),
    All,
}

/// Counters since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub invalidations: u64,
    pub len: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
pub struct CalculationCache {
    // None when disabled or zero capacity.
    entries: Option<LruCache<Fingerprint, CacheEntry>>,
    generation: u64,
    stats: CacheStats,
}

impl Default for CalculationCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl CalculationCache {
    pub fn new(config: CacheConfig) -> Self {
        let entries = if config.enabled {
            NonZeroUsize::new(config.capacity).map(LruCache::new)
        } else {
            None
        };
        let capacity = entries.as_ref().map_or(0, |e| e.cap().get());
        Self {
            entries,
            generation: 0,
            stats: CacheStats {
                capacity,
                ..CacheStats::default()
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generation that the next `put` will stamp.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Looks up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &Fingerprint) -> Option<CalculationResult> {
        let found = self.entries.as_mut().and_then(|e| e.get(key)).copied();
        match found {
            Some(entry) => {
                self.stats.hits += 1;
                debug!("cache hit {:?} (generation {})", key, entry.generation);
                Some(entry.result)
            }
            None => {
                self.stats.misses += 1;
                debug!("cache miss {:?}", key);
                None
            }
        }
    }

    /// Inspects an entry without touching recency or counters.
    pub fn peek(&self, key: &Fingerprint) -> Option<CacheEntry> {
        self.entries.as_ref().and_then(|e| e.peek(key)).copied()
    }

    /// Stores `result`, evicting the least recently used entry when full.
    pub fn put(&mut self, key: Fingerprint, result: CalculationResult) {
        let Some(entries) = self.entries.as_mut() else {
            return;
        };
        let entry = CacheEntry {
            result,
            generation: self.generation,
        };
        self.generation += 1;
        if let Some((old_key, old)) = entries.push(key, entry) {
            if old_key != key {
                self.stats.evictions += 1;
                debug!("cache evicted {:?} (generation {})", old_key, old.generation);
            } else {
                trace!("cache replaced {:?}", key);
            }
        }
    }

    /// Returns the cached result for `key`, or computes and stores it.
    /// Errors from `compute` are returned and nothing is stored.
    pub fn get_or_compute<F>(&mut self, key: Fingerprint, compute: F) -> Result<CalculationResult>
    where
        F: FnOnce() -> Result<CalculationResult>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let result = compute()?;
        self.put(key, result);
        Ok(result)
    }

    /// Drops one entry or all of them. Returns how many were removed.
    pub fn invalidate(&mut self, what: Invalidation) -> usize {
        let Some(entries) = self.entries.as_mut() else {
            return 0;
        };
        let removed = match what {
            Invalidation::Entry(key) => usize::from(entries.pop(&key).is_some()),
            Invalidation::All => {
                let n = entries.len();
                entries.clear();
                n
            }
        };
        self.stats.invalidations += removed as u64;
        debug!("cache invalidated {} entr{} ({:?})", removed, if removed == 1 { "y" } else { "ies" }, what);
        removed
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.len(),
            ..self.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{Calculator, SampledCurve};
    use crate::gp::Pnt;
    use crate::space::SpaceMappingConfig;

    fn sample(offset: f64) -> (Fingerprint, CalculationResult) {
        let curves = vec![SampledCurve::new(
            "c",
            vec![
                Pnt::from_coords(offset, 0.0, 0.0),
                Pnt::from_coords(offset, 10.0, -10.0),
            ],
        )];
        let config = SpaceMappingConfig::default();
        let result = Calculator::new(CacheConfig::disabled())
            .calculate_dimensions(&curves, &config)
            .unwrap();
        (Fingerprint::of(&curves, &config), result)
    }

    #[test]
    fn test_get_put_and_stats() {
        let mut cache = CalculationCache::default();
        let (key, result) = sample(0.0);
        assert!(cache.get(&key).is_none());
        cache.put(key, result);
        assert_eq!(cache.get(&key), Some(result));
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.len), (1, 1, 1));
        assert_eq!(stats.capacity, DEFAULT_CAPACITY);
        assert_eq!(stats.hit_ratio(), 0.5);
    }

    #[test]
    fn test_lru_eviction_order() {
        let mut cache = CalculationCache::new(CacheConfig::default().with_capacity(2));
        let (a, ra) = sample(1.0);
        let (b, rb) = sample(2.0);
        let (c, rc) = sample(3.0);
        cache.put(a, ra);
        cache.put(b, rb);
        // Touch `a` so `b` becomes least recently used.
        assert!(cache.get(&a).is_some());
        cache.put(c, rc);
        assert!(cache.peek(&b).is_none());
        assert!(cache.peek(&a).is_some());
        assert!(cache.peek(&c).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_generation_is_monotonic() {
        let mut cache = CalculationCache::default();
        let (a, ra) = sample(1.0);
        let (b, rb) = sample(2.0);
        cache.put(a, ra);
        cache.put(b, rb);
        cache.put(a, ra);
        assert_eq!(cache.peek(&b).map(|e| e.generation), Some(1));
        assert_eq!(cache.peek(&a).map(|e| e.generation), Some(2));
        assert_eq!(cache.generation(), 3);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_invalidate_entry_and_all() {
        let mut cache = CalculationCache::default();
        let (a, ra) = sample(1.0);
        let (b, rb) = sample(2.0);
        cache.put(a, ra);
        cache.put(b, rb);
        assert_eq!(cache.invalidate(Invalidation::Entry(a)), 1);
        assert_eq!(cache.invalidate(Invalidation::Entry(a)), 0);
        assert!(cache.peek(&b).is_some());
        assert_eq!(cache.invalidate(Invalidation::All), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 2);
    }

    #[test]
    fn test_get_or_compute_runs_once() {
        let mut cache = CalculationCache::default();
        let (key, result) = sample(4.0);
        let mut calls = 0;
        for _ in 0..3 {
            let got = cache.get_or_compute(key, || {
                calls += 1;
                Ok(result)
            });
            assert_eq!(got, Ok(result));
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn test_get_or_compute_does_not_store_errors() {
        let mut cache = CalculationCache::default();
        let (key, _) = sample(5.0);
        let err = cache.get_or_compute(key, || {
            Err(crate::MinimapError::EmptyInput("nothing selected".to_string()))
        });
        assert!(err.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_disabled_cache_never_stores() {
        let mut cache = CalculationCache::new(CacheConfig::disabled());
        let (a, ra) = sample(1.0);
        cache.put(a, ra);
        assert!(!cache.is_enabled());
        assert!(cache.get(&a).is_none());
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().capacity, 0);

        let zero = CalculationCache::new(CacheConfig::default().with_capacity(0));
        assert!(!zero.is_enabled());
    }

    #[test]
    fn test_cache_config_deserializes_with_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{ "capacity": 16 }"#).unwrap();
        assert_eq!(config.capacity, 16);
        assert!(config.enabled);
    }
}
