//! In-memory cache with per-entry expiry.
//!
//! Used for data fetched from Discord or read-mostly tables, where a few minutes of staleness is
//! acceptable and a round trip per request is not.

use std::{collections::HashMap, hash::Hash, sync::Arc, time::Duration};

use tokio::{sync::RwLock, time::Instant};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Shared map whose entries expire after a fixed time to live.
///
/// Clones share the same storage. Expired entries are treated as missing and replaced on the
/// next insert for their key.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<K, Entry<V>>>>,
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            ttl: self.ttl,
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + std::fmt::Debug,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a clone of the cached value if present and not expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            return None;
        }

        tracing::debug!("Cache hit for {:?}", key);
        Some(entry.value.clone())
    }

    /// Stores a value for the cache's regular time to live.
    pub async fn insert(&self, key: K, value: V) {
        self.insert_for(key, value, self.ttl).await;
    }

    /// Stores a value for `ttl`, capped at the cache's regular time to live.
    pub async fn insert_for(&self, key: K, value: V, ttl: Duration) {
        let expires_at = Instant::now() + ttl.min(self.ttl);

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > Instant::now());
        entries.insert(key, Entry { value, expires_at });
    }

    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
