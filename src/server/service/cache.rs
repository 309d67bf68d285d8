//! Time-to-live response caches of the mock services.
//!
//! Entries are keyed `method_params` (for example `getAll_1_20`) and stamped with the time
//! they were stored. A cached value is only served while it is younger than the cache's TTL.
//! When a cache grows past its capacity it evicts either the oldest share of its entries or
//! the single first inserted one, depending on its [`Eviction`] policy. The scheduler sweeps
//! expired entries periodically and writes invalidate the caches they affect.
//!
//! Every invalidation bumps the cache's generation. A read takes the generation before it
//! touches the tables and stores its result with [`TtlCache::insert_if_current`], so a page
//! read before a concurrent write is never cached after that write invalidated the cache.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use entity::prelude::{Affiliate, Campaign, Message, Product};
use tokio::sync::Mutex;

use crate::model::{page::Page, product::InfluencerMatch};

/// What to drop when a cache outgrows its capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eviction {
    /// Drop the oldest share of the capacity, e.g. `0.3` for 30%
    OldestFraction(f64),
    /// Drop the first inserted entry until the cache fits
    FirstInserted,
}

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
    sequence: u64,
}

pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    ttl: Option<Duration>,
    capacity: usize,
    eviction: Eviction,
    sequence: u64,
    generation: u64,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache, `ttl` of `None` keeps entries until evicted or invalidated.
    pub fn new(ttl: Option<Duration>, capacity: usize, eviction: Eviction) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            capacity,
            eviction,
            sequence: 0,
            generation: 0,
        }
    }

    fn is_fresh(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        self.ttl.is_none_or(|ttl| now - entry.stored_at < ttl)
    }

    /// Get a copy of the value stored under `key` if it has not expired.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: String, value: V, now: DateTime<Utc>) {
        self.sequence += 1;
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
                sequence: self.sequence,
            },
        );

        if self.entries.len() > self.capacity {
            self.evict();
        }
    }

    /// Store `value` only if nothing was invalidated since `generation` was taken.
    ///
    /// Returns whether the value was stored.
    pub fn insert_if_current(
        &mut self,
        key: String,
        value: V,
        now: DateTime<Utc>,
        generation: u64,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.insert(key, value, now);
        true
    }

    /// Count of invalidations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn evict(&mut self) {
        let mut by_age: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.sequence, key.clone()))
            .collect();
        by_age.sort_unstable();

        let count = match self.eviction {
            Eviction::OldestFraction(fraction) => {
                ((self.capacity as f64 * fraction).floor() as usize).max(1)
            }
            Eviction::FirstInserted => self.entries.len() - self.capacity,
        };

        for (_, key) in by_age.into_iter().take(count) {
            self.entries.remove(&key);
        }
    }

    /// Drop every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&mut self, prefix: &str) {
        self.generation += 1;
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.entries.clear();
    }

    /// Drop expired entries, returning how many were removed.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };

        let before = self.entries.len();
        self.entries.retain(|_, entry| now - entry.stored_at < ttl);

        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a `method_params` cache key.
pub fn cache_key(method: &str, params: &[&dyn std::fmt::Display]) -> String {
    params
        .iter()
        .fold(method.to_string(), |key, param| format!("{}_{}", key, param))
}

/// The response caches of every service, owned by the application state.
pub struct ServiceCache {
    pub campaigns: Mutex<TtlCache<Page<Campaign>>>,
    pub products: Mutex<TtlCache<Page<Product>>>,
    pub recommendations: Mutex<TtlCache<Vec<InfluencerMatch>>>,
    pub affiliates: Mutex<TtlCache<Page<Affiliate>>>,
    pub affiliate: Mutex<TtlCache<Option<Affiliate>>>,
    pub messages: Mutex<TtlCache<Page<Message>>>,
}

impl Default for ServiceCache {
    fn default() -> Self {
        Self {
            campaigns: Mutex::new(TtlCache::new(
                Some(Duration::minutes(3)),
                500,
                Eviction::OldestFraction(0.3),
            )),
            products: Mutex::new(TtlCache::new(
                Some(Duration::minutes(10)),
                500,
                Eviction::OldestFraction(0.3),
            )),
            recommendations: Mutex::new(TtlCache::new(
                Some(Duration::minutes(30)),
                500,
                Eviction::OldestFraction(0.3),
            )),
            affiliates: Mutex::new(TtlCache::new(
                Some(Duration::minutes(5)),
                1000,
                Eviction::OldestFraction(0.2),
            )),
            affiliate: Mutex::new(TtlCache::new(
                Some(Duration::minutes(5)),
                1000,
                Eviction::OldestFraction(0.2),
            )),
            messages: Mutex::new(TtlCache::new(None, 200, Eviction::FirstInserted)),
        }
    }
}

impl ServiceCache {
    /// Drop expired entries from every cache, returning how many were removed.
    pub async fn sweep(&self, now: DateTime<Utc>) -> usize {
        self.campaigns.lock().await.sweep(now)
            + self.products.lock().await.sweep(now)
            + self.recommendations.lock().await.sweep(now)
            + self.affiliates.lock().await.sweep(now)
            + self.affiliate.lock().await.sweep(now)
            + self.messages.lock().await.sweep(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize, eviction: Eviction) -> TtlCache<u32> {
        TtlCache::new(Some(Duration::minutes(3)), capacity, eviction)
    }

    #[test]
    fn serves_entries_until_they_expire() {
        let now = Utc::now();
        let mut cache = cache(10, Eviction::OldestFraction(0.3));
        cache.insert("getAll_1_20".to_string(), 7, now);

        assert_eq!(cache.get("getAll_1_20", now + Duration::minutes(2)), Some(7));
        assert_eq!(cache.get("getAll_1_20", now + Duration::minutes(3)), None);
    }

    #[test]
    fn evicts_oldest_share_past_capacity() {
        let now = Utc::now();
        let mut cache = cache(10, Eviction::OldestFraction(0.3));

        for page in 1..=11 {
            cache.insert(cache_key("getAll", &[&page, &20]), page, now);
        }

        // 11 entries exceed the capacity of 10, so floor(10 * 0.3) = 3 oldest go
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.get("getAll_1_20", now), None);
        assert_eq!(cache.get("getAll_3_20", now), None);
        assert_eq!(cache.get("getAll_4_20", now), Some(4));
    }

    #[test]
    fn first_inserted_policy_drops_one_entry() {
        let now = Utc::now();
        let mut cache = cache(2, Eviction::FirstInserted);

        cache.insert("messages_1_1".to_string(), 1, now);
        cache.insert("messages_2_1".to_string(), 2, now);
        cache.insert("messages_3_1".to_string(), 3, now);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("messages_1_1", now), None);
        assert_eq!(cache.get("messages_3_1", now), Some(3));
    }

    #[test]
    fn sweep_and_invalidation() {
        let now = Utc::now();
        let mut cache = cache(10, Eviction::OldestFraction(0.3));
        cache.insert("messages_1_1".to_string(), 1, now - Duration::minutes(5));
        cache.insert("messages_1_2".to_string(), 2, now);
        cache.insert("messages_2_1".to_string(), 3, now);

        assert_eq!(cache.sweep(now), 1);

        cache.invalidate_prefix("messages_1_");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("messages_2_1", now), Some(3));
    }

    #[test]
    fn skips_inserts_that_raced_an_invalidation() {
        let now = Utc::now();
        let mut cache = cache(10, Eviction::OldestFraction(0.3));

        let generation = cache.generation();
        cache.invalidate_prefix("messages_1_");

        assert!(!cache.insert_if_current("messages_1_1".to_string(), 1, now, generation));
        assert!(cache.is_empty());

        let generation = cache.generation();
        assert!(cache.insert_if_current("messages_1_1".to_string(), 2, now, generation));
        assert_eq!(cache.get("messages_1_1", now), Some(2));

        cache.clear();
        assert!(!cache.insert_if_current("messages_1_1".to_string(), 3, now, generation));
        assert!(cache.is_empty());
    }

    #[test]
    fn keys_join_method_and_params() {
        assert_eq!(cache_key("getAll", &[&1, &20]), "getAll_1_20");
        assert_eq!(cache_key("getById", &[&7]), "getById_7");
    }
}
