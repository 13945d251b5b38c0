use serde::{Deserialize, Serialize};

// --- Sleeper wire shapes -------------------------------------------------
// Every field the provider may omit or null out is optional; decoding
// happens once at the client boundary.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueInfo {
    pub name: Option<String>,
    pub season: Option<String>,
    pub total_rosters: Option<u32>,
    pub settings: Option<LeagueSettings>,
    /// Older league documents carry the playoff start at the top level.
    pub playoff_start_week: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSettings {
    pub playoff_week_start: Option<u32>,
    pub leg: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueUser {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueRoster {
    #[serde(default)]
    pub roster_id: u64,
    pub owner_id: Option<String>,
    #[serde(default)]
    pub starters: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub players: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub reserve: Option<Vec<Option<String>>>,
}

impl LeagueRoster {
    #[must_use]
    pub fn starter_ids(&self) -> Vec<&str> {
        Self::ids(self.starters.as_ref())
    }

    #[must_use]
    pub fn player_ids(&self) -> Vec<&str> {
        Self::ids(self.players.as_ref())
    }

    #[must_use]
    pub fn reserve_ids(&self) -> Vec<&str> {
        Self::ids(self.reserve.as_ref())
    }

    fn ids(list: Option<&Vec<Option<String>>>) -> Vec<&str> {
        list.map(|ids| {
            ids.iter()
                .flatten()
                .map(String::as_str)
                .filter(|id| !id.is_empty())
                .collect()
        })
        .unwrap_or_default()
    }
}

// --- Resolved views ------------------------------------------------------

/// One roster row in the league bundle, owner already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TeamEntry {
    pub roster_id: u64,
    pub owner_id: Option<String>,
    pub manager: String,
    pub username: String,
    pub team: String,
    #[serde(rename = "avatarId")]
    pub avatar_id: Option<String>,
    #[serde(rename = "avatarThumb")]
    pub avatar_thumb: Option<String>,
    #[serde(rename = "avatarFull")]
    pub avatar_full: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueBundle {
    #[serde(rename = "leagueName")]
    pub league_name: String,
    pub roster: Vec<TeamEntry>,
}

/// Trimmed roster row for the Teams tab.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub roster_id: u64,
    pub team: String,
    pub manager: String,
    #[serde(rename = "avatarThumb")]
    pub avatar_thumb: Option<String>,
    #[serde(rename = "avatarFull")]
    pub avatar_full: Option<String>,
}

/// Compact team reference embedded in matchup, transaction, and bracket
/// views.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRef {
    pub roster_id: u64,
    pub team: String,
    pub manager: String,
    #[serde(rename = "avatarThumb")]
    pub avatar_thumb: Option<String>,
}
