use crate::model::league::TeamRef;
use crate::model::player::PlayerRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    /// Millisecond epochs.
    pub status_updated: Option<i64>,
    pub created: Option<i64>,
    /// player_id -> receiving roster_id
    #[serde(default)]
    pub adds: Option<BTreeMap<String, u64>>,
    /// player_id -> releasing roster_id
    #[serde(default)]
    pub drops: Option<BTreeMap<String, u64>>,
    #[serde(default)]
    pub roster_ids: Option<Vec<u64>>,
    pub waiver_bid: Option<u64>,
    /// Passed through untouched.
    #[serde(default)]
    pub draft_picks: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerAdd {
    #[serde(flatten)]
    pub player: PlayerRef,
    pub to: TeamRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDrop {
    #[serde(flatten)]
    pub player: PlayerRef,
    pub from: TeamRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub when: String,
    pub round: u32,
    pub adds: Vec<PlayerAdd>,
    pub drops: Vec<PlayerDrop>,
    pub rosters: Vec<TeamRef>,
    pub waiver_bid: u64,
    pub draft_picks: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsView {
    pub round: u32,
    pub count: usize,
    pub items: Vec<TransactionItem>,
}
