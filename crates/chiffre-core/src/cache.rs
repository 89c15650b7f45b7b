use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use num_bigint::BigUint;
use serde::Serialize;

/// Bounded least-recently-used map from normalized text to its value.
///
/// Every operation takes the lock once, so "check size, evict, insert" and
/// "find, move to front" are atomic with respect to other threads.
pub struct ConversionCache {
    capacity: usize,
    state: Mutex<LruState>,
}

/// Snapshot of the cache counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hits: u64,
    pub lookups: u64,
    /// hits / lookups, 0.0 before the first lookup
    pub hit_ratio: f64,
}

#[derive(Default)]
struct LruState {
    index: HashMap<String, usize>,
    slots: Vec<Slot>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
    hits: u64,
    lookups: u64,
}

struct Slot {
    key: String,
    value: BigUint,
    prev: Option<usize>,
    next: Option<usize>,
}

impl LruState {
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        self.slots[idx].prev = None;
        self.slots[idx].next = None;
    }

    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = None;
        self.slots[idx].next = self.head;

        if let Some(h) = self.head {
            self.slots[h].prev = Some(idx);
        }
        self.head = Some(idx);

        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

impl ConversionCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(LruState::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruState> {
        // Nothing panics between link updates, a poisoned state is still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a key and mark it most recently used
    pub fn get(&self, key: &str) -> Option<BigUint> {
        let mut state = self.lock();
        state.lookups += 1;

        let idx = *state.index.get(key)?;
        state.hits += 1;
        state.unlink(idx);
        state.push_front(idx);

        Some(state.slots[idx].value.clone())
    }

    /// Insert or update a key, evicting the least recently used entry when full
    pub fn put(&self, key: &str, value: BigUint) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.lock();

        if let Some(&idx) = state.index.get(key) {
            state.slots[idx].value = value;
            state.unlink(idx);
            state.push_front(idx);
            return;
        }

        let tail = state.tail;
        let full = state.index.len() >= self.capacity;

        let idx = match tail {
            Some(lru) if full => {
                state.unlink(lru);
                let evicted = std::mem::replace(&mut state.slots[lru].key, key.to_string());
                state.index.remove(&evicted);
                state.slots[lru].value = value;
                tracing::debug!(evicted = %evicted, "Evicted least recently used conversion");
                lru
            }
            _ => {
                state.slots.push(Slot {
                    key: key.to_string(),
                    value,
                    prev: None,
                    next: None,
                });
                state.slots.len() - 1
            }
        };

        state.index.insert(key.to_string(), idx);
        state.push_front(idx);
    }

    /// Drop every entry and reset the hit/lookup counters
    pub fn clear(&self) {
        *self.lock() = LruState::default();
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let hit_ratio = if state.lookups == 0 {
            0.0
        } else {
            state.hits as f64 / state.lookups as f64
        };

        CacheStats {
            size: state.index.len(),
            capacity: self.capacity,
            hits: state.hits,
            lookups: state.lookups,
            hit_ratio,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> Vec<String> {
        let state = self.lock();
        let mut keys = Vec::with_capacity(state.index.len());
        let mut cursor = state.head;

        while let Some(idx) = cursor {
            keys.push(state.slots[idx].key.clone());
            cursor = state.slots[idx].next;
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_get_missing_counts_lookup() {
        let cache = ConversionCache::new(4);
        assert_eq!(cache.get("vingt"), None);

        let stats = cache.stats();
        assert_eq!(stats.lookups, 1);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.hit_ratio, 0.0);
    }

    #[test]
    fn test_put_then_get() {
        let cache = ConversionCache::new(4);
        cache.put("vingt", n(20));

        assert_eq!(cache.get("vingt"), Some(n(20)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_existing_key_updates_value() {
        let cache = ConversionCache::new(2);
        cache.put("cent", n(1));
        cache.put("cent", n(100));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("cent"), Some(n(100)));
    }

    #[test]
    fn test_evicts_first_inserted_without_reads() {
        let cache = ConversionCache::new(3);
        cache.put("un", n(1));
        cache.put("deux", n(2));
        cache.put("trois", n(3));
        cache.put("quatre", n(4));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.keys(), vec!["quatre", "trois", "deux"]);
        assert_eq!(cache.get("un"), None);
    }

    #[test]
    fn test_read_refreshes_recency() {
        let cache = ConversionCache::new(3);
        cache.put("un", n(1));
        cache.put("deux", n(2));
        cache.put("trois", n(3));

        assert_eq!(cache.get("un"), Some(n(1)));
        cache.put("quatre", n(4));

        assert_eq!(cache.keys(), vec!["quatre", "un", "trois"]);
        assert_eq!(cache.get("deux"), None);
    }

    #[test]
    fn test_update_refreshes_recency() {
        let cache = ConversionCache::new(2);
        cache.put("un", n(1));
        cache.put("deux", n(2));
        cache.put("un", n(1));
        cache.put("trois", n(3));

        assert_eq!(cache.keys(), vec!["trois", "un"]);
    }

    #[test]
    fn test_capacity_one() {
        let cache = ConversionCache::new(1);
        cache.put("un", n(1));
        cache.put("deux", n(2));

        assert_eq!(cache.keys(), vec!["deux"]);
        assert_eq!(cache.get("deux"), Some(n(2)));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = ConversionCache::new(0);
        cache.put("un", n(1));

        assert!(cache.is_empty());
        assert_eq!(cache.get("un"), None);
        assert_eq!(cache.stats().capacity, 0);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let cache = ConversionCache::new(10);
        for i in 0..100u64 {
            cache.put(&format!("key{i}"), n(i));
            if i % 3 == 0 {
                cache.get(&format!("key{}", i / 2));
            }
            assert!(cache.len() <= 10);
        }
        assert_eq!(cache.len(), 10);
        assert_eq!(cache.keys().len(), 10);
    }

    #[test]
    fn test_clear_resets_entries_and_counters() {
        let cache = ConversionCache::new(4);
        cache.put("un", n(1));
        cache.get("un");
        cache.get("deux");

        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.lookups, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.hit_ratio, 0.0);
        assert!(cache.keys().is_empty());

        // still usable after clearing
        cache.put("trois", n(3));
        assert_eq!(cache.get("trois"), Some(n(3)));
    }

    #[test]
    fn test_hit_ratio() {
        let cache = ConversionCache::new(4);
        cache.put("un", n(1));
        cache.get("un");
        cache.get("un");
        cache.get("un");
        cache.get("deux");

        let stats = cache.stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.lookups, 4);
        assert!((stats.hit_ratio - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_serialize() {
        let cache = ConversionCache::new(7);
        let json = serde_json::to_value(cache.stats()).unwrap();

        assert_eq!(json["size"], 0);
        assert_eq!(json["capacity"], 7);
        assert_eq!(json["hit_ratio"], 0.0);
    }

    #[test]
    fn test_concurrent_writers_respect_capacity() {
        let cache = ConversionCache::new(16);

        std::thread::scope(|s| {
            for t in 0..8u64 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..200u64 {
                        let key = format!("t{t}-{}", i % 40);
                        if cache.get(&key).is_none() {
                            cache.put(&key, n(i));
                        }
                    }
                });
            }
        });

        let stats = cache.stats();
        assert_eq!(stats.size, 16);
        assert_eq!(stats.lookups, 8 * 200);
        assert_eq!(cache.keys().len(), 16);
    }
}
