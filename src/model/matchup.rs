use crate::model::league::TeamRef;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchup {
    #[serde(default)]
    pub roster_id: u64,
    pub matchup_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: f64,
}

/// Sleeper occasionally serves points as null or a string; anything that is
/// not a JSON number scores zero.
fn lenient_points<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupSide {
    pub roster_id: u64,
    pub team: String,
    pub manager: String,
    #[serde(rename = "avatarThumb")]
    pub avatar_thumb: Option<String>,
    pub points: f64,
}

impl MatchupSide {
    #[must_use]
    pub fn new(team: TeamRef, points: f64) -> Self {
        MatchupSide {
            roster_id: team.roster_id,
            team: team.team,
            manager: team.manager,
            avatar_thumb: team.avatar_thumb,
            points,
        }
    }
}

/// A paired head-to-head. `b` is absent for bye-style single entries.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupPair {
    pub id: u64,
    pub a: Option<MatchupSide>,
    pub b: Option<MatchupSide>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupsMeta {
    pub source: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupsView {
    pub week: u32,
    pub meta: MatchupsMeta,
    pub matchups: Vec<MatchupPair>,
}
