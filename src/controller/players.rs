use crate::cache::PLAYERS_TTL;
use crate::controller::sleeper::SleeperClient;
use crate::error::AppResult;
use crate::model::{PlayerInfo, PlayerRef};
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

struct CatalogSnapshot {
    players: Arc<AHashMap<String, PlayerInfo>>,
    fetched_at: DateTime<Utc>,
}

/// Holds the multi-megabyte Sleeper player directory for a day at a time.
/// The payload is too big for the shared value cache, so it gets its own
/// slot with the same read-through behavior.
#[derive(Default)]
pub struct PlayerCatalog {
    snapshot: RwLock<Option<CatalogSnapshot>>,
}

impl PlayerCatalog {
    #[must_use]
    pub fn new() -> Self {
        PlayerCatalog {
            snapshot: RwLock::new(None),
        }
    }

    /// Current directory snapshot, refetched once the 24 hour window
    /// lapses.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a refresh fetch fails or does not decode.
    pub async fn directory(
        &self,
        sleeper: &SleeperClient,
    ) -> AppResult<Arc<AHashMap<String, PlayerInfo>>> {
        {
            let guard = self.snapshot.read().await;
            if let Some(snap) = guard.as_ref() {
                if Utc::now() - snap.fetched_at < PLAYERS_TTL {
                    return Ok(Arc::clone(&snap.players));
                }
            }
        }

        let fresh = Arc::new(sleeper.player_directory().await?);
        let mut guard = self.snapshot.write().await;
        *guard = Some(CatalogSnapshot {
            players: Arc::clone(&fresh),
            fetched_at: Utc::now(),
        });
        Ok(fresh)
    }

    /// Seed the snapshot directly, skipping the fetch.
    pub async fn preload(&self, players: AHashMap<String, PlayerInfo>) {
        let mut guard = self.snapshot.write().await;
        *guard = Some(CatalogSnapshot {
            players: Arc::new(players),
            fetched_at: Utc::now(),
        });
    }
}

/// Resolve one player id against the directory. Ids the directory has not
/// caught up with yet resolve to a placeholder instead of failing.
#[must_use]
pub fn player_ref(directory: &AHashMap<String, PlayerInfo>, id: &str) -> PlayerRef {
    let missing = PlayerInfo::default();
    let info = directory.get(id).unwrap_or(&missing);
    PlayerRef {
        id: id.to_string(),
        name: info.display_name(),
        pos: info.position_label(),
        team: info.team.clone().unwrap_or_default(),
    }
}
