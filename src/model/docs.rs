use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The league snapshot document: the editable league name, the announcement
/// feed, and a hand-maintained roster used only when the live bundle is
/// unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDoc {
    #[serde(rename = "leagueName", default)]
    pub league_name: Option<String>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    /// Freeform rows; served as-is on fallback.
    #[serde(default = "empty_rows")]
    pub roster: Value,
}

impl Default for LeagueDoc {
    fn default() -> Self {
        LeagueDoc {
            league_name: None,
            announcements: Vec::new(),
            roster: empty_rows(),
        }
    }
}

fn empty_rows() -> Value {
    Value::Array(Vec::new())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// RFC 3339; the feed is kept sorted newest first.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Pinboard blocks plus an explicit display order. Ids in `order` that no
/// longer match a block are skipped at read time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletinBoard {
    #[serde(default)]
    pub blocks: Vec<BulletinBlock>,
    #[serde(default)]
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletinBlock {
    #[serde(default)]
    pub id: String,
    /// "post" or "image"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(default = "default_span")]
    pub span: u8,
}

pub(crate) fn default_span() -> u8 {
    6
}

/// Named money pots, amounts in dollars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub banks: BTreeMap<String, f64>,
}
