//! Read-through response cache
//!
//! Provides a [`ResponseCache`] that serves API payloads from a backing store
//! while they are younger than a per-resource TTL, and calls through to the
//! network otherwise. A payload is only ever stored or served if it passes the
//! resource's validity predicate, so a malformed response is never allowed to
//! shadow a later good fetch.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use super::key::{CacheKey, ResourceKind};
use super::store::CacheStore;

/// Stored representation of a cached response
///
/// Serialized as `{"timestamp": <epoch-millis>, "data": <payload>}`, the
/// shape existing deployments already have on disk.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// When the entry was written, as epoch milliseconds
    timestamp: i64,
    /// The cached payload, opaque to the cache
    data: T,
}

/// Per-resource caching policy, fixed at the call site
///
/// `ttl` bounds the age of a servable entry; `is_valid` decides whether a
/// payload (stored or freshly fetched) is well-formed enough to serve and
/// persist. The predicate must be pure.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig<T> {
    /// Maximum entry age before it is treated as stale
    pub ttl: Duration,
    /// Acceptance predicate over payloads; defaults to always-true
    pub is_valid: fn(&T) -> bool,
}

impl<T> CacheConfig<T> {
    /// Creates a config with the given TTL and no extra validity constraint
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            is_valid: |_| true,
        }
    }

    /// Creates a config using the TTL from the resource kind table
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self::new(kind.ttl())
    }

    /// Replaces the validity predicate
    pub fn with_validator(mut self, is_valid: fn(&T) -> bool) -> Self {
        self.is_valid = is_valid;
        self
    }
}

/// Generic read-through cache over a pluggable backing store
///
/// One instance serves every resource kind; the key and config passed to
/// [`ResponseCache::get_or_fetch`] carry the per-resource identity and policy.
/// Store failures never reach the caller: a failed read acts like a miss and
/// a failed write is dropped after logging.
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
}

impl ResponseCache {
    /// Creates a cache over the given backing store
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Returns a payload for `key` that is at most `config.ttl` old
    ///
    /// Serves straight from the store when a fresh, valid entry exists (no
    /// awaiting on that path). Otherwise invokes `fetch` exactly once:
    /// a valid result replaces the stored entry and is returned; an invalid
    /// result is returned without being persisted, leaving any previous entry
    /// in place so the next call retries the network; a fetch error is
    /// propagated unchanged and the store is left untouched.
    pub async fn get_or_fetch<T, E, F, Fut>(
        &self,
        key: &CacheKey,
        config: &CacheConfig<T>,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let storage_key = key.storage_key();

        if let Some(payload) = self.lookup(&storage_key, config) {
            return Ok(payload);
        }

        debug!(key = %storage_key, "cache miss, fetching from API");
        let fresh = fetch().await?;

        if (config.is_valid)(&fresh) {
            self.persist(&storage_key, &fresh);
        } else {
            debug!(key = %storage_key, "fetched payload failed validation, not caching");
        }

        Ok(fresh)
    }

    /// Removes the stored entry for `key`, if any
    ///
    /// Used by callers that want a guaranteed-fresh fetch; a store failure is
    /// logged and ignored, the next write replaces the entry anyway.
    pub fn invalidate(&self, key: &CacheKey) {
        let storage_key = key.storage_key();
        if let Err(err) = self.store.remove(&storage_key) {
            warn!(key = %storage_key, error = %err, "failed to remove cache entry");
        }
    }

    /// Reads and screens the stored entry, returning a servable payload
    ///
    /// Anything that disqualifies the entry (store failure, corrupt JSON,
    /// expiry, failed validity) turns into a miss.
    fn lookup<T: DeserializeOwned>(&self, storage_key: &str, config: &CacheConfig<T>) -> Option<T> {
        let raw = match self.store.get(storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %storage_key, error = %err, "cache read failed, treating as miss");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(key = %storage_key, error = %err, "corrupt cache entry, treating as miss");
                return None;
            }
        };

        let age_millis = now_millis() - entry.timestamp;
        if age_millis >= config.ttl.as_millis() as i64 {
            debug!(key = %storage_key, age_millis, "cache entry expired");
            return None;
        }

        if !(config.is_valid)(&entry.data) {
            debug!(key = %storage_key, "stored payload failed validation, ignoring");
            return None;
        }

        debug!(key = %storage_key, age_millis, "cache hit");
        Some(entry.data)
    }

    /// Writes a fresh entry, replacing any previous one
    ///
    /// A serialization or store failure is logged and swallowed; the caller
    /// still gets the payload it fetched.
    fn persist<T: Serialize>(&self, storage_key: &str, payload: &T) {
        let entry = CacheEntry {
            timestamp: now_millis(),
            data: payload,
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(err) => {
                warn!(key = %storage_key, error = %err, "failed to serialize cache entry");
                return;
            }
        };

        if let Err(err) = self.store.set(storage_key, &json) {
            warn!(key = %storage_key, error = %err, "cache write failed, value not persisted");
        } else {
            debug!(key = %storage_key, "cache entry written");
        }
    }
}

/// Current time as epoch milliseconds
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
