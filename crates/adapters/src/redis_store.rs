// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redis-backed key-value store
//!
//! Maps the six store primitives onto single Redis commands. The connection
//! is opened on first use and shared by all clones.

use async_trait::async_trait;
use locker_core::{KeyValueStore, StoreError};
use redis::aio::MultiplexedConnection;
use redis::{Client, RedisError};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// [`KeyValueStore`] over a Redis server
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
    conn: Arc<OnceCell<MultiplexedConnection>>,
}

impl RedisStore {
    /// Parse `url` (e.g. `redis://127.0.0.1/0`). No connection is made yet.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            conn: Arc::new(OnceCell::new()),
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(store_error)
            })
            .await?;
        Ok(conn.clone())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("addr", &self.client.get_connection_info().addr)
            .field("connected", &self.conn.initialized())
            .finish()
    }
}

fn store_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Protocol(e.to_string())
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<bool, StoreError> {
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        Ok(reply.is_some())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(store_error)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: i64 = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn expire(&self, key: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        let mut conn = self.connection().await?;
        let updated: i64 = redis::cmd("EXPIRE")
            .arg(key)
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        Ok(updated == 1)
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let mut conn = self.connection().await?;
        let remaining: i64 = redis::cmd("TTL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;
        // -2: no such key, -1: no expiry
        Ok(u64::try_from(remaining).ok())
    }
}

#[cfg(test)]
#[path = "redis_store_tests.rs"]
mod tests;
