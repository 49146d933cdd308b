//! Time-window memoization
//!
//! A small TTL cache keyed by the call's arguments. Entries are served
//! until `now - computed_at` reaches the TTL; there is no invalidation
//! on underlying data change. The clock is injected so expiry can be
//! tested with a fake.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use forecast_spi::Clock;

struct Entry<V> {
    value: V,
    computed_at: DateTime<Utc>,
}

/// Clock-driven TTL cache.
pub struct TtlCache<K, V> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<K, Entry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A still-fresh value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let entries = self.lock();
        entries
            .get(key)
            .filter(|entry| now - entry.computed_at < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Store a value computed now.
    pub fn put(&self, key: K, value: V) {
        let computed_at = self.clock.now();
        self.lock().insert(key, Entry { value, computed_at });
    }

    /// Serve a fresh value or recompute it through `compute`.
    ///
    /// A failed computation caches nothing, so the next call retries.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        compute: impl FnOnce() -> std::result::Result<V, E>,
    ) -> std::result::Result<V, E> {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.put(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FakeClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FakeClock {
        fn at_start() -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            })
        }

        fn advance(&self, minutes: i64) {
            let mut now = self.now.lock().unwrap();
            *now += Duration::minutes(minutes);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[test]
    fn test_serves_fresh_entries() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<&str, i64> = TtlCache::new(Duration::minutes(5), clock.clone());

        cache.put("aqi", 120);
        clock.advance(4);
        assert_eq!(cache.get(&"aqi"), Some(120));
    }

    #[test]
    fn test_expires_after_ttl() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<&str, i64> = TtlCache::new(Duration::minutes(5), clock.clone());

        cache.put("aqi", 120);
        clock.advance(5);
        assert_eq!(cache.get(&"aqi"), None);
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<&str, i64> = TtlCache::new(Duration::minutes(5), clock);
        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn test_get_or_insert_computes_once_until_expiry() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<&str, i64> = TtlCache::new(Duration::minutes(5), clock.clone());
        let mut calls = 0;

        for _ in 0..3 {
            let value: Result<i64, ()> = cache.get_or_try_insert_with("forecast", || {
                calls += 1;
                Ok(7)
            });
            assert_eq!(value, Ok(7));
        }
        assert_eq!(calls, 1);

        clock.advance(6);
        let value: Result<i64, ()> = cache.get_or_try_insert_with("forecast", || {
            calls += 1;
            Ok(8)
        });
        assert_eq!(value, Ok(8));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_failed_computation_is_not_cached() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<&str, i64> = TtlCache::new(Duration::minutes(5), clock);

        let failed: Result<i64, &str> = cache.get_or_try_insert_with("aqi", || Err("down"));
        assert_eq!(failed, Err("down"));

        let recovered: Result<i64, &str> = cache.get_or_try_insert_with("aqi", || Ok(42));
        assert_eq!(recovered, Ok(42));
    }

    #[test]
    fn test_keys_are_independent() {
        let clock = FakeClock::at_start();
        let cache: TtlCache<String, i64> = TtlCache::new(Duration::minutes(5), clock);

        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), Some(2));
    }
}
