use crate::model::league::TeamRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One playoff bracket slot. Sleeper has shipped both the short and the
/// long key spellings, hence the aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBracketNode {
    #[serde(alias = "round")]
    pub r: Option<u32>,
    #[serde(alias = "matchup_id")]
    pub m: Option<u64>,
    pub t1: Option<u64>,
    pub t2: Option<u64>,
    #[serde(default)]
    pub t1_from: Option<Value>,
    #[serde(default)]
    pub t2_from: Option<Value>,
    #[serde(alias = "winner")]
    pub w: Option<u64>,
}

/// Bracket slot with team ids resolved. Undecided slots stay null so the
/// client can render an open bracket.
#[derive(Debug, Clone, Serialize)]
pub struct BracketNodeView {
    pub r: Option<u32>,
    pub m: Option<u64>,
    pub t1: Option<TeamRef>,
    pub t2: Option<TeamRef>,
    pub t1_from: Option<Value>,
    pub t2_from: Option<Value>,
    pub w: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BracketView {
    pub playoff_start_week: Option<u32>,
    pub winners: Vec<BracketNodeView>,
    pub losers: Vec<BracketNodeView>,
}
