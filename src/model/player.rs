use crate::model::utils::first_non_empty;
use serde::{Deserialize, Serialize};

/// One row of the Sleeper NFL player directory. The directory is a single
/// huge map of `player_id -> PlayerInfo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInfo {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    pub team: Option<String>,
}

impl PlayerInfo {
    /// Display name fallback chain: full name, then whatever first/last
    /// parts exist, then "Unknown".
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full) = first_non_empty(&[self.full_name.as_deref()]) {
            return full.to_string();
        }
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            "Unknown".to_string()
        } else {
            joined
        }
    }

    /// Primary position, falling back to the first fantasy slot.
    #[must_use]
    pub fn position_label(&self) -> String {
        first_non_empty(&[
            self.position.as_deref(),
            self.fantasy_positions
                .as_ref()
                .and_then(|slots| slots.first())
                .map(String::as_str),
        ])
        .unwrap_or_default()
        .to_string()
    }
}

/// A player id resolved to something renderable.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRef {
    pub id: String,
    pub name: String,
    pub pos: String,
    pub team: String,
}

/// Starters in slot order plus reserve; bench is everyone else on the roster.
#[derive(Debug, Clone, Serialize)]
pub struct RosterDetail {
    pub roster_id: u64,
    pub starters: Vec<PlayerRef>,
    pub bench: Vec<PlayerRef>,
    pub reserve: Vec<PlayerRef>,
}
