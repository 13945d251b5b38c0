use crate::cache::{self, CacheMap, SCOREBOARD_TTL};
use crate::controller::sleeper::fetch_json;
use crate::error::{AppError, AppResult};
use crate::model::Scoreboard;
use reqwest::Client;

pub const ESPN_NFL_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

/// ESPN scoreboard client, one cached payload per `YYYYMMDD` day string.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base: String,
    cache: CacheMap,
}

impl EspnClient {
    #[must_use]
    pub fn new(cache: CacheMap) -> Self {
        Self::with_base(ESPN_NFL_BASE, cache)
    }

    /// Base override for tests against a local mock server.
    #[must_use]
    pub fn with_base(base: &str, cache: CacheMap) -> Self {
        EspnClient {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the scoreboard cannot be fetched or decoded.
    pub async fn scoreboard(&self, yyyymmdd: &str) -> AppResult<Scoreboard> {
        let key = format!("sb:{yyyymmdd}");
        let url = format!("{}/scoreboard?dates={yyyymmdd}", self.base);

        let value = match cache::cache_get(&self.cache, &key, SCOREBOARD_TTL).await {
            Some(hit) => hit,
            None => {
                let fresh = fetch_json(&self.http, &url).await?;
                cache::cache_put(&self.cache, &key, fresh.clone()).await;
                fresh
            }
        };

        serde_json::from_value(value).map_err(|e| AppError::UpstreamDecode { url, source: e })
    }
}
