use crate::cache::{self, CacheMap, LEAGUE_TTL, STATE_TTL};
use crate::error::{AppError, AppResult};
use crate::model::{
    LeagueInfo, LeagueRoster, LeagueState, LeagueUser, PlayerInfo, RawBracketNode, RawMatchup,
    RawTransaction,
};
use ahash::AHashMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const SLEEPER_BASE: &str = "https://api.sleeper.app/v1";

/// Read-only Sleeper API client. Every league-family GET goes through the
/// shared value cache keyed `sleeper:{path}`.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base: String,
    league_id: String,
    cache: CacheMap,
}

impl SleeperClient {
    #[must_use]
    pub fn new(league_id: &str, cache: CacheMap) -> Self {
        Self::with_base(SLEEPER_BASE, league_id, cache)
    }

    /// Base override for tests against a local mock server.
    #[must_use]
    pub fn with_base(base: &str, league_id: &str, cache: CacheMap) -> Self {
        SleeperClient {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
            league_id: league_id.to_string(),
            cache,
        }
    }

    /// Handle to the shared value cache, for tests that plant entries.
    #[must_use]
    pub fn cache_handle(&self) -> CacheMap {
        self.cache.clone()
    }

    /// # Errors
    ///
    /// Will return `Err` if the fetch fails or the body is not JSON.
    pub async fn get_cached(&self, path: &str, ttl: chrono::Duration) -> AppResult<Value> {
        let key = format!("sleeper:{path}");
        if let Some(hit) = cache::cache_get(&self.cache, &key, ttl).await {
            return Ok(hit);
        }

        let url = format!("{}{}", self.base, path);
        let value = fetch_json(&self.http, &url).await?;
        cache::cache_put(&self.cache, &key, value.clone()).await;
        Ok(value)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, ttl: chrono::Duration) -> AppResult<T> {
        let value = self.get_cached(path, ttl).await?;
        serde_json::from_value(value).map_err(|e| AppError::UpstreamDecode {
            url: format!("{}{}", self.base, path),
            source: e,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the league cannot be fetched or decoded.
    pub async fn league(&self) -> AppResult<LeagueInfo> {
        self.fetch(&format!("/league/{}", self.league_id), LEAGUE_TTL)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the users cannot be fetched or decoded.
    pub async fn users(&self) -> AppResult<Vec<LeagueUser>> {
        self.fetch(&format!("/league/{}/users", self.league_id), LEAGUE_TTL)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the rosters cannot be fetched or decoded.
    pub async fn rosters(&self) -> AppResult<Vec<LeagueRoster>> {
        self.fetch(&format!("/league/{}/rosters", self.league_id), LEAGUE_TTL)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the week's matchups cannot be fetched or decoded.
    pub async fn matchups(&self, week: u32) -> AppResult<Vec<RawMatchup>> {
        self.fetch(
            &format!("/league/{}/matchups/{week}", self.league_id),
            LEAGUE_TTL,
        )
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the round's transactions cannot be fetched or
    /// decoded.
    pub async fn transactions(&self, round: u32) -> AppResult<Vec<RawTransaction>> {
        self.fetch(
            &format!("/league/{}/transactions/{round}", self.league_id),
            LEAGUE_TTL,
        )
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the winners bracket cannot be fetched or decoded.
    pub async fn winners_bracket(&self) -> AppResult<Vec<RawBracketNode>> {
        self.fetch(
            &format!("/league/{}/winners_bracket", self.league_id),
            LEAGUE_TTL,
        )
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the losers bracket cannot be fetched or decoded.
    pub async fn losers_bracket(&self) -> AppResult<Vec<RawBracketNode>> {
        self.fetch(
            &format!("/league/{}/losers_bracket", self.league_id),
            LEAGUE_TTL,
        )
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the NFL state cannot be fetched or decoded.
    pub async fn state(&self) -> AppResult<LeagueState> {
        self.fetch("/state/nfl", STATE_TTL).await
    }

    /// Current NFL week per Sleeper, cached on the short state TTL.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the NFL state cannot be fetched or decoded.
    pub async fn current_week(&self) -> AppResult<Option<u32>> {
        Ok(self.state().await?.week)
    }

    /// The full player directory, fetched fresh. Freshness bookkeeping for
    /// this multi-megabyte payload lives in `PlayerCatalog`, not the value
    /// cache.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the directory cannot be fetched or decoded.
    pub async fn player_directory(&self) -> AppResult<AHashMap<String, PlayerInfo>> {
        let url = format!("{}/players/nfl", self.base);
        let value = fetch_json(&self.http, &url).await?;
        serde_json::from_value(value).map_err(|e| AppError::UpstreamDecode { url, source: e })
    }
}

pub(crate) async fn fetch_json(http: &Client, url: &str) -> AppResult<Value> {
    let resp = http
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| AppError::UpstreamRequest {
            url: url.to_string(),
            source: e,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await.map_err(|e| AppError::UpstreamRequest {
        url: url.to_string(),
        source: e,
    })?;
    serde_json::from_str(&body).map_err(|e| AppError::UpstreamDecode {
        url: url.to_string(),
        source: e,
    })
}
