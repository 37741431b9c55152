//! In-process pointer store.
//!
//! Used when no Redis URL is configured and in tests. Entries expire lazily:
//! an expired entry is reported as missing on read and dropped on the next
//! write.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use league_common::LeagueResult;

use crate::cache::PointerStore;

struct Pointer {
    path: String,
    expires_at: Instant,
}

impl Pointer {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Default)]
pub struct MemoryPointerStore {
    entries: RwLock<HashMap<String, Pointer>>,
}

impl MemoryPointerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PointerStore for MemoryPointerStore {
    async fn get(&self, key: &str) -> LeagueResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|p| !p.is_expired(now))
            .map(|p| p.path.clone()))
    }

    async fn set(&self, key: &str, path: &str, ttl: Duration) -> LeagueResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, p| !p.is_expired(now));
        entries.insert(
            key.to_string(),
            Pointer {
                path: path.to_string(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }
}
