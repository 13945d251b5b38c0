use chrono::FixedOffset;
use rusty_league::AppState;
use rusty_league::cache;
use rusty_league::controller::espn::EspnClient;
use rusty_league::controller::players::PlayerCatalog;
use rusty_league::controller::sleeper::SleeperClient;
use rusty_league::storage::DocumentStore;
use std::path::Path;
use std::sync::Arc;

pub const LEAGUE_ID: &str = "999";

pub fn eastern() -> FixedOffset {
    FixedOffset::east_opt(-5 * 3600).expect("fixed offset")
}

/// App state pointed at mock upstream bases. Both clients share one
/// cache map, same as the real process.
pub fn test_state(sleeper_base: &str, espn_base: &str, data_dir: &Path) -> AppState {
    let cache = cache::new_cache();
    AppState {
        sleeper: SleeperClient::with_base(sleeper_base, LEAGUE_ID, cache.clone()),
        espn: EspnClient::with_base(espn_base, cache),
        players: Arc::new(PlayerCatalog::new()),
        store: DocumentStore::new(data_dir),
        tz: eastern(),
    }
}

/// Three owners: a full profile, a username-only one, and an empty one.
pub fn users_body() -> &'static str {
    r#"[
      { "user_id": "u1", "username": "gridironguru", "display_name": "Cam",
        "avatar": "a1", "metadata": { "team_name": "The Juggernauts" } },
      { "user_id": "u2", "username": "benchwarmer", "display_name": null,
        "avatar": null, "metadata": null },
      { "user_id": "u3", "username": null, "display_name": null }
    ]"#
}

pub fn rosters_body() -> &'static str {
    r#"[
      { "roster_id": 1, "owner_id": "u1",
        "starters": ["101", "102"], "players": ["101", "102", "103"],
        "reserve": ["104"] },
      { "roster_id": 2, "owner_id": "u2",
        "starters": [], "players": [], "reserve": null },
      { "roster_id": 3, "owner_id": "u3" }
    ]"#
}

/// Directory entries covering the ids in the roster fixtures.
pub fn player_directory() -> ahash::AHashMap<String, rusty_league::model::PlayerInfo> {
    serde_json::from_str(
        r#"{
          "101": { "full_name": "Josh Allen", "position": "QB", "team": "BUF" },
          "102": { "full_name": "Bijan Robinson", "position": "RB", "team": "ATL" },
          "103": { "first_name": "Puka", "last_name": "Nacua",
                   "fantasy_positions": ["WR"], "team": "LAR" },
          "104": { "full_name": "Kyler Murray", "position": "QB", "team": "ARI" }
        }"#,
    )
    .expect("player fixture")
}
