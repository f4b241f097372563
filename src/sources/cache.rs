//! Time-bucketed read-through cache with an explicit staleness policy.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Outcome of a cache lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<V> {
    /// Entry younger than the TTL.
    Fresh(V),
    /// Entry older than the TTL, still available for fallback.
    Stale(V),
    /// No entry for this key.
    Miss,
}

/// What to do with an expired entry when recomputation fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Return the expired value instead of the error.
    #[default]
    ServeStaleOnError,
    /// Never return expired values.
    Recompute,
}

/// Storage backing a read-through cache.
pub trait CacheStore<K, V> {
    /// What: Look up `key`, classifying the entry against `ttl`.
    ///
    /// Inputs:
    /// - `key`: Cache key.
    /// - `ttl`: Freshness window.
    /// - `now`: Current instant.
    fn lookup(&self, key: &K, ttl: Duration, now: Instant) -> Lookup<V>;

    /// Insert or replace the entry for `key`, stamped with `now`.
    fn store(&mut self, key: K, value: V, now: Instant);
}

/// `HashMap`-backed [`CacheStore`] keeping the insertion instant per entry.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Entries with the instant they were stored.
    entries: HashMap<K, (Instant, V)>,
}

impl<K, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> TtlCache<K, V> {
    /// Number of stored entries (fresh or stale).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> CacheStore<K, V> for TtlCache<K, V> {
    fn lookup(&self, key: &K, ttl: Duration, now: Instant) -> Lookup<V> {
        match self.entries.get(key) {
            Some((stored_at, v)) if now.saturating_duration_since(*stored_at) < ttl => {
                Lookup::Fresh(v.clone())
            }
            Some((_, v)) => Lookup::Stale(v.clone()),
            None => Lookup::Miss,
        }
    }

    fn store(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(key, (now, value));
    }
}

/// What: Return a fresh cached value or compute, store, and return a new one.
///
/// Inputs:
/// - `cache`: Backing store.
/// - `key`: Cache key.
/// - `ttl`: Freshness window.
/// - `now`: Current instant (used for both lookup and stamping).
/// - `policy`: Whether a stale value may stand in for a failed computation.
/// - `compute`: Produces the value on miss or expiry.
///
/// Output:
/// - The cached or computed value, or the computation's error.
///
/// # Errors
/// - Returns the error from `compute` unless a stale value is served under
///   [`StalePolicy::ServeStaleOnError`].
///
/// Details:
/// - Only successful computations are stored.
/// - There is no stampede protection; callers are single-threaded.
pub async fn get_or_compute<C, K, V, E, F, Fut>(
    cache: &mut C,
    key: K,
    ttl: Duration,
    now: Instant,
    policy: StalePolicy,
    compute: F,
) -> Result<V, E>
where
    C: CacheStore<K, V>,
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    let stale = match cache.lookup(&key, ttl, now) {
        Lookup::Fresh(v) => return Ok(v),
        Lookup::Stale(v) => Some(v),
        Lookup::Miss => None,
    };
    match compute().await {
        Ok(v) => {
            cache.store(key, v.clone(), now);
            Ok(v)
        }
        Err(e) => match (policy, stale) {
            (StalePolicy::ServeStaleOnError, Some(v)) => {
                tracing::debug!("recomputation failed; serving stale cache entry");
                Ok(v)
            }
            _ => Err(e),
        },
    }
}
