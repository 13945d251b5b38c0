use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One cached upstream payload. Entries are never purged; an entry older
/// than its namespace TTL simply reads as absent until overwritten.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: Value,
    pub fetched_at: DateTime<Utc>,
}

pub type CacheMap = Arc<RwLock<AHashMap<String, CacheEntry>>>;

pub const LEAGUE_TTL: chrono::Duration = chrono::Duration::minutes(5);
pub const SCOREBOARD_TTL: chrono::Duration = chrono::Duration::minutes(5);
pub const STATE_TTL: chrono::Duration = chrono::Duration::minutes(2);
pub const PLAYERS_TTL: chrono::Duration = chrono::Duration::hours(24);

#[must_use]
pub fn new_cache() -> CacheMap {
    Arc::new(RwLock::new(AHashMap::new()))
}

pub async fn cache_get(map: &CacheMap, key: &str, ttl: chrono::Duration) -> Option<Value> {
    let guard = map.read().await;
    let entry = guard.get(key)?;
    if Utc::now() - entry.fetched_at < ttl {
        Some(entry.value.clone())
    } else {
        None
    }
}

pub async fn cache_put(map: &CacheMap, key: &str, value: Value) {
    cache_put_at(map, key, value, Utc::now()).await;
}

/// Insert with an explicit fetch timestamp. Tests backdate entries with this
/// instead of sleeping out a TTL window.
pub async fn cache_put_at(map: &CacheMap, key: &str, value: Value, fetched_at: DateTime<Utc>) {
    let mut guard = map.write().await;
    guard.insert(key.to_string(), CacheEntry { value, fetched_at });
}
