//! Redis-backed registry
//!
//! Stores values as plain strings and relies on Redis' native key expiry
//! (`SETEX`) for TTL-scoped entries.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::time::Duration;

use super::Registry;
use crate::{Error, Result};

pub struct RedisRegistry {
    client: Client,
    key_prefix: String,
}

impl RedisRegistry {
    /// Open a Redis registry.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL
    /// * `key_prefix` - prefix prepended to every key (e.g. "medialink:")
    pub fn open(url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = Client::open(url)?;
        Ok(Self {
            client,
            key_prefix: key_prefix.into(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::Internal(format!("Redis connection failed: {e}")))
    }
}

#[async_trait]
impl Registry for RedisRegistry {
    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let found: bool = conn.exists(self.full_key(key)).await?;
        Ok(found)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(self.full_key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection().await?;
        let key = self.full_key(key);

        match ttl {
            Some(ttl) if ttl.as_secs() > 0 => {
                let _: () = conn.set_ex(&key, value, ttl.as_secs()).await?;
            }
            _ => {
                let _: () = conn.set(&key, value).await?;
            }
        }

        tracing::debug!(key = %key, "Registry key written");
        Ok(())
    }
}
