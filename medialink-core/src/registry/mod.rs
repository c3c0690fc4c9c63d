//! Alias registry
//!
//! The registry is an opaque, durable key-value store. The core consumes
//! only `exists` / `get` / `set` (with optional per-key expiry); everything
//! else about persistence is the store's own business. All operations are
//! fallible: a registry failure is a distinct condition from "absent".

pub mod memory;
pub mod redis;
pub mod store;

pub use memory::MemoryRegistry;
pub use redis::RedisRegistry;
pub use store::MediaStore;

use async_trait::async_trait;
use std::time::Duration;

use crate::Result;

/// Key namespace for persisted media records.
pub const MEDIA_KEYSPACE: &str = "media:";
/// Key namespace for cached resolved links.
pub const RESOLVE_KEYSPACE: &str = "resolve:";

/// Minimal key-value interface consumed by the core.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool>;

    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, optionally expiring after `ttl`. Keys written without
    /// a TTL live until overwritten or deleted externally.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;
}
