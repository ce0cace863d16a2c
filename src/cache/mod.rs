//! Read-through caching of API responses
//!
//! This module provides a generic response cache: lookups go to a pluggable
//! backing store, entries are served while younger than a per-resource TTL
//! and passing the resource's validity predicate, and misses call through to
//! the network and persist the validated result. Store failures degrade to
//! acting as if no cache existed for that call.

mod key;
mod manager;
mod store;

pub use key::{CacheKey, ResourceKind};
pub use manager::{CacheConfig, ResponseCache};
pub use store::{CacheStore, FileStore, MemoryStore, StoreError};
