/// ESPN NFL scoreboard wire types. Field coverage is limited to what the
/// games view and week resolution actually read.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scoreboard {
    pub events: Option<Vec<SbEvent>>,
    pub week: Option<SbWeek>,
    pub season: Option<SbSeason>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbWeek {
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbSeason {
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub season_type: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbEvent {
    pub id: Option<String>,
    pub date: Option<String>,
    pub status: Option<SbStatus>,
    pub competitions: Option<Vec<SbCompetition>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbStatus {
    #[serde(rename = "type")]
    pub status_type: Option<SbStatusType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbCompetition {
    pub date: Option<String>,
    pub venue: Option<SbVenue>,
    pub competitors: Option<Vec<SbCompetitor>>,
    pub broadcasts: Option<Vec<SbBroadcast>>,
    pub status: Option<SbStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbVenue {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub score: Option<String>, // ESPN sends scores as strings
    pub team: Option<SbTeam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbTeam {
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbBroadcast {
    pub names: Option<Vec<String>>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
}

// --- Games view ----------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GameSideView {
    pub name: Option<String>,
    pub abbrev: Option<String>,
    pub score: Option<i64>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub id: Option<String>,
    pub status: String,
    #[serde(rename = "startUTC")]
    pub start_utc: Option<String>,
    #[serde(rename = "startLocalET")]
    pub start_local: Option<String>,
    pub week: Option<u32>,
    #[serde(rename = "seasonType")]
    pub season_type: Option<u32>,
    pub venue: Option<String>,
    pub network: Option<String>,
    pub home: GameSideView,
    pub away: GameSideView,
}

#[derive(Debug, Clone, Serialize)]
pub struct GamesView {
    pub date: String,
    pub count: usize,
    pub games: Vec<GameView>,
}
