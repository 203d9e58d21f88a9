//! Redis key-value store implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use cuedeck_core::error::{AppError, ErrorKind};
use cuedeck_core::result::AppResult;
use cuedeck_core::traits::kv::KvStore;

use super::client::RedisClient;

/// Redis-backed key-value store.
///
/// Every command is bounded by the configured operation timeout; a stalled
/// Redis surfaces as a store error rather than a hung handler.
#[derive(Debug, Clone)]
pub struct RedisKvStore {
    /// Redis client.
    client: RedisClient,
    /// Per-operation timeout.
    op_timeout: Duration,
}

impl RedisKvStore {
    /// Create a new Redis store provider.
    pub fn new(client: RedisClient, op_timeout: Duration) -> Self {
        Self { client, op_timeout }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }

    /// Run a Redis future under the operation timeout.
    async fn bounded<T, F>(&self, fut: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, redis::RedisError>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(Self::map_err),
            Err(_) => Err(AppError::store(format!(
                "Redis operation timed out after {:?}",
                self.op_timeout
            ))),
        }
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = self.bounded(conn.get(&full_key)).await?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = self.bounded(conn.set(&full_key, value)).await?;
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = self
            .bounded(conn.set_ex(&full_key, value, ttl.as_secs()))
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = self.bounded(conn.del(&full_key)).await?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = self.bounded(conn.exists(&full_key)).await?;
        Ok(result)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = self
            .bounded(redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(pong == "PONG")
    }
}
