//! Expiring pointers from preview cache keys to artifact paths.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tracing::{debug, instrument};

use league_common::{LeagueError, LeagueResult};

/// Lifetime of a preview pointer.
pub const PREVIEW_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Namespace used when none is configured.
pub const DEFAULT_PREFIX: &str = "league:";

/// Key-value store with per-entry expiry.
#[async_trait]
pub trait PointerStore: Send + Sync {
    /// Path stored for `key`, if present and not expired.
    async fn get(&self, key: &str) -> LeagueResult<Option<String>>;

    /// Store `path` under `key` for `ttl`.
    async fn set(&self, key: &str, path: &str, ttl: Duration) -> LeagueResult<()>;
}

/// Redis-backed pointer store.
pub struct RedisPointerStore {
    conn: MultiplexedConnection,
    prefix: String,
}

impl RedisPointerStore {
    /// Connect to Redis.
    pub async fn connect(redis_url: &str) -> LeagueResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| LeagueError::CacheError(format!("Redis connection failed: {}", e)))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| LeagueError::CacheError(format!("Redis connection failed: {}", e)))?;

        Ok(Self {
            conn,
            prefix: DEFAULT_PREFIX.to_string(),
        })
    }

    /// Namespace prepended to every key.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn redis_key(&self, key: &str) -> String {
        prefixed(&self.prefix, key)
    }
}

fn prefixed(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

#[async_trait]
impl PointerStore for RedisPointerStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> LeagueResult<Option<String>> {
        let mut conn = self.conn.clone();
        let path: Option<String> = conn
            .get(self.redis_key(key))
            .await
            .map_err(|e| LeagueError::CacheError(format!("Cache get failed: {}", e)))?;

        debug!(hit = path.is_some(), "Pointer lookup");
        Ok(path)
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, path: &str, ttl: Duration) -> LeagueResult<()> {
        let mut conn = self.conn.clone();
        // SET EX rejects a zero expiry.
        let seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(self.redis_key(key), path, seconds)
            .await
            .map_err(|e| LeagueError::CacheError(format!("Cache set failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_key() {
        assert_eq!(
            prefixed(DEFAULT_PREFIX, "team_image_1_0-2_0"),
            "league:team_image_1_0-2_0"
        );
        assert_eq!(prefixed("", "k"), "k");
    }
}
