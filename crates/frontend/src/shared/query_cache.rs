//! Time-based request cache with in-flight deduplication.
//!
//! Every remote read goes through a [`QueryCache`] keyed by a request
//! signature. A value is *fresh* for five minutes and returned without
//! touching the gateway; after that it is kept another ten minutes (a stale
//! hit triggers a refetch) and finally evicted. Errors are never cached.
//! Clocks are injected as millisecond timestamps so the whole thing is
//! testable off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

/// Окно свежести — 5 минут.
pub const FRESH_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Устаревшее значение хранится ещё 10 минут до вычистки.
pub const KEEP_STALE_MS: f64 = 10.0 * 60.0 * 1000.0;

// ============================================================================
// Expiring map
// ============================================================================
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Fresh(T),
    Stale(T),
    Miss,
}

/// Plain expiring-entry map; the clock is always passed in by the caller.
pub struct ExpiringMap<T> {
    fresh_ms: f64,
    keep_ms: f64,
    entries: HashMap<String, (T, f64)>,
}

impl<T: Clone> ExpiringMap<T> {
    pub fn new(fresh_ms: f64, keep_ms: f64) -> Self {
        Self {
            fresh_ms,
            keep_ms,
            entries: HashMap::new(),
        }
    }

    pub fn lookup(&mut self, key: &str, now: f64) -> Lookup<T> {
        self.evict_expired(now);
        match self.entries.get(key) {
            Some((value, fetched_at)) if now - fetched_at < self.fresh_ms => {
                Lookup::Fresh(value.clone())
            }
            Some((value, _)) => Lookup::Stale(value.clone()),
            None => Lookup::Miss,
        }
    }

    pub fn insert(&mut self, key: &str, value: T, now: f64) {
        self.entries.insert(key.to_string(), (value, now));
    }

    fn evict_expired(&mut self, now: f64) {
        let lifetime = self.fresh_ms + self.keep_ms;
        self.entries
            .retain(|_, (_, fetched_at)| now - *fetched_at < lifetime);
    }
}

// ============================================================================
// Query cache
// ============================================================================
type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T, String>>>;

pub struct QueryCache<T: Clone> {
    cache: RefCell<ExpiringMap<T>>,
    pending: RefCell<HashMap<String, SharedFetch<T>>>,
}

impl<T: Clone + 'static> QueryCache<T> {
    pub fn new() -> Self {
        Self::with_windows(FRESH_MS, KEEP_STALE_MS)
    }

    pub fn with_windows(fresh_ms: f64, keep_ms: f64) -> Self {
        Self {
            cache: RefCell::new(ExpiringMap::new(fresh_ms, keep_ms)),
            pending: RefCell::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key` or run `fetcher` to produce it.
    /// Concurrent calls for the same key share one outstanding request; a
    /// failed fetch leaves nothing behind, so the next call tries again.
    pub async fn fetch<F, Fut>(
        &self,
        key: &str,
        now_ms: impl Fn() -> f64,
        fetcher: F,
    ) -> Result<T, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        if let Lookup::Fresh(value) = self.cache.borrow_mut().lookup(key, now_ms()) {
            return Ok(value);
        }

        let in_flight = self.pending.borrow().get(key).cloned();
        if let Some(shared) = in_flight {
            return shared.await;
        }

        let shared: SharedFetch<T> = fetcher().boxed_local().shared();
        self.pending
            .borrow_mut()
            .insert(key.to_string(), shared.clone());
        let result = shared.await;
        self.pending.borrow_mut().remove(key);
        if let Ok(value) = &result {
            self.cache.borrow_mut().insert(key, value.clone(), now_ms());
        }
        result
    }
}

impl<T: Clone + 'static> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn expiring_map_freshness_transitions() {
        let mut map = ExpiringMap::new(5_000.0, 10_000.0);
        map.insert("k", 42, 0.0);
        assert_eq!(map.lookup("k", 4_999.0), Lookup::Fresh(42));
        assert_eq!(map.lookup("k", 5_000.0), Lookup::Stale(42));
        assert_eq!(map.lookup("k", 14_999.0), Lookup::Stale(42));
        assert_eq!(map.lookup("k", 15_000.0), Lookup::Miss);
    }

    #[test]
    fn fresh_hit_skips_the_fetcher() {
        let cache: QueryCache<u32> = QueryCache::new();
        let clock = Rc::new(Cell::new(0.0));
        let calls = Rc::new(Cell::new(0));

        let result = block_on(cache.fetch("k", || clock.get(), || {
            calls.set(calls.get() + 1);
            async { Ok(7) }
        }));
        assert_eq!(result, Ok(7));

        clock.set(60_000.0);
        let result = block_on(cache.fetch("k", || clock.get(), || {
            calls.set(calls.get() + 1);
            async { Ok(8) }
        }));
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn stale_entry_is_refetched() {
        let cache: QueryCache<u32> = QueryCache::new();
        let clock = Rc::new(Cell::new(0.0));

        let first = block_on(cache.fetch("k", || clock.get(), || async { Ok(1) }));
        assert_eq!(first, Ok(1));

        clock.set(FRESH_MS + 1.0);
        let second = block_on(cache.fetch("k", || clock.get(), || async { Ok(2) }));
        assert_eq!(second, Ok(2));

        // свежее значение снова кэшировано
        let third = block_on(cache.fetch("k", || clock.get(), || async { Ok(3) }));
        assert_eq!(third, Ok(2));
    }

    #[test]
    fn errors_are_not_cached() {
        let cache: QueryCache<u32> = QueryCache::new();
        let calls = Rc::new(Cell::new(0));

        let failed = block_on(cache.fetch("k", || 0.0, || async {
            Err("HTTP error: 500".to_string())
        }));
        assert!(failed.is_err());

        let retried = block_on(cache.fetch("k", || 0.0, || {
            calls.set(calls.get() + 1);
            async { Ok(5) }
        }));
        assert_eq!(retried, Ok(5));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn concurrent_requests_share_one_fetch() {
        let cache: QueryCache<u32> = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = futures::channel::oneshot::channel::<Result<u32, String>>();

        let first_calls = calls.clone();
        let second_calls = calls.clone();
        block_on(async {
            let first = cache.fetch("k", || 0.0, move || {
                first_calls.set(first_calls.get() + 1);
                async move { rx.await.unwrap() }
            });
            let second = cache.fetch("k", || 0.0, move || {
                second_calls.set(second_calls.get() + 1);
                async { Ok(99) }
            });
            let resolve = async move {
                let _ = tx.send(Ok(7));
            };
            let (a, b, ()) = futures::join!(first, second, resolve);
            assert_eq!(a, Ok(7));
            assert_eq!(b, Ok(7));
        });
        assert_eq!(calls.get(), 1);
    }
}
