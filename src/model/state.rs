use serde::Deserialize;

/// Sleeper `/state/nfl` snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueState {
    pub week: Option<u32>,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub display_week: Option<u32>,
}
